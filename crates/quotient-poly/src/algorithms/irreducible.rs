//! Irreducibility testing over finite fields.

use quotient_rings::{EuclideanDomain, FiniteFieldElement, Ring, RingError};

use crate::algorithms::gcd::{poly_gcd, pow_mod};
use crate::dense::Polynomial;

/// Tests irreducibility of `f` over its finite coefficient field.
///
/// A degree-m polynomial is reducible exactly when it has an irreducible
/// factor of degree at most m/2, and factors of degree dividing i all divide
/// `x^(q^i) - x`. Taking gcds against that chain for i = 1..m/2 therefore
/// decides the question. Constants count as not irreducible.
///
/// # Errors
///
/// Propagates division errors from the underlying polynomial arithmetic;
/// with a nonzero `f` these do not occur.
pub fn is_irreducible<F: FiniteFieldElement>(f: &Polynomial<F>) -> Result<bool, RingError> {
    if Ring::is_zero(f) || f.degree() == 0 {
        return Ok(false);
    }
    if f.degree() == 1 {
        return Ok(true);
    }

    let q = u128::from(f.leading_coefficient().order());
    let x = Polynomial::x_poly(f.leading_coefficient());
    let (_, x_reduced) = x.div_rem(f)?;

    let mut frobenius = x_reduced.clone();
    for _ in 0..f.degree() / 2 {
        // frobenius = x^(q^i) mod f after i squaring rounds.
        frobenius = pow_mod(&frobenius, q, f)?;
        let g = poly_gcd(&Ring::sub(&frobenius, &x_reduced), f)?;
        if g.degree() >= 1 {
            return Ok(false);
        }
    }

    Ok(true)
}
