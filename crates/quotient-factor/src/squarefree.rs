//! Square-free decomposition of integer polynomials by Yun's algorithm.

use num_traits::Zero;
use quotient_arith::Integer;
use quotient_poly::{content, modular_gcd, primitive_part, try_div_exact, Polynomial};
use quotient_rings::Ring;

use crate::error::FactorError;

/// A decomposition `p = content * prod(parts[i].0 ^ parts[i].1)` with each
/// part primitive, square-free, pairwise coprime, and of positive leading
/// coefficient. The content carries the sign.
#[derive(Debug, Clone, PartialEq)]
pub struct SquarefreeFactorization {
    /// Signed content: `gcd` of the coefficients, negated when the leading
    /// coefficient is negative.
    pub content: Integer,
    /// `(square-free part, multiplicity)` pairs, ascending multiplicity.
    pub parts: Vec<(Polynomial<Integer>, u32)>,
}

/// Yun's algorithm: repeated gcds of the running part with the derivative
/// cofactor peel off the multiplicity-i component at step i. All gcds run
/// through the modular integer-polynomial gcd.
///
/// # Errors
///
/// `ZeroPolynomial` when `p` is zero.
pub fn squarefree_decompose(
    p: &Polynomial<Integer>,
) -> Result<SquarefreeFactorization, FactorError> {
    if Ring::is_zero(p) {
        return Err(FactorError::ZeroPolynomial);
    }

    let mut signed_content = content(p);
    if p.leading_coefficient().is_negative() {
        signed_content = -signed_content;
    }
    let a = primitive_part(p);
    let a = if a.leading_coefficient().is_negative() {
        Ring::neg(&a)
    } else {
        a
    };

    let mut parts = Vec::new();
    if a.degree() == 0 {
        return Ok(SquarefreeFactorization {
            content: signed_content,
            parts,
        });
    }

    let derivative = a.derivative();
    let g = modular_gcd(&a, &derivative)?;
    let mut b = exact(&a, &g)?;
    let c = exact(&derivative, &g)?;
    let mut d = Ring::sub(&c, &b.derivative());
    let mut multiplicity = 1;

    while b.degree() >= 1 {
        let h = modular_gcd(&b, &d)?;
        if h.degree() >= 1 {
            parts.push((h.clone(), multiplicity));
        }
        b = exact(&b, &h)?;
        let c = exact(&d, &h)?;
        d = Ring::sub(&c, &b.derivative());
        multiplicity += 1;
    }

    Ok(SquarefreeFactorization {
        content: signed_content,
        parts,
    })
}

/// Division known to be exact from Yun's invariants.
fn exact(
    a: &Polynomial<Integer>,
    b: &Polynomial<Integer>,
) -> Result<Polynomial<Integer>, FactorError> {
    if Zero::is_zero(b.leading_coefficient()) {
        return Err(FactorError::ZeroPolynomial);
    }
    try_div_exact(a, b).ok_or(FactorError::ZeroPolynomial)
}
