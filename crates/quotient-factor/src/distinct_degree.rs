//! Distinct-degree factorization over finite fields.

use quotient_poly::{poly_gcd, pow_mod, Polynomial};
use quotient_rings::{EuclideanDomain, FiniteFieldElement, Ring};

use crate::error::FactorError;

/// Splits a square-free polynomial into products of equal-degree irreducible
/// factors: the result pairs each product with its factors' common degree,
/// ascending.
///
/// `x^(q^i) - x` is the product of all irreducibles of degree dividing i, so
/// gcds against that chain peel off the degree-i part at step i; once the
/// remainder's degree drops below 2i it must itself be irreducible.
///
/// # Errors
///
/// `ZeroPolynomial` when `f` is zero.
pub fn distinct_degree_factor<F: FiniteFieldElement>(
    f: &Polynomial<F>,
) -> Result<Vec<(Polynomial<F>, usize)>, FactorError> {
    if Ring::is_zero(f) {
        return Err(FactorError::ZeroPolynomial);
    }

    let q = u128::from(f.leading_coefficient().order());
    let mut remainder = f.monic();
    let x = Polynomial::x_poly(f.leading_coefficient());
    let mut result = Vec::new();

    if remainder.degree() == 0 {
        return Ok(result);
    }

    let (_, mut frobenius) = x.div_rem(&remainder)?;
    let mut degree = 1;

    while remainder.degree() >= 2 * degree {
        frobenius = pow_mod(&frobenius, q, &remainder)?;
        let g = poly_gcd(&Ring::sub(&frobenius, &x), &remainder)?;

        if g.degree() >= 1 {
            let (quotient, _) = remainder.div_rem(&g)?;
            remainder = quotient;
            result.push((g, degree));
            if remainder.degree() == 0 {
                break;
            }
            let (_, reduced) = frobenius.div_rem(&remainder)?;
            frobenius = reduced;
        }
        degree += 1;
    }

    if remainder.degree() >= 1 {
        let d = remainder.degree();
        result.push((remainder, d));
    }

    Ok(result)
}
