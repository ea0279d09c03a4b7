//! Polynomial gcds and modular exponentiation, plus the content and exact
//! division helpers the integer-polynomial code builds on.

use num_traits::Zero;
use quotient_arith::Integer;
use quotient_rings::{euclidean_gcd, extended_euclidean, EuclideanDomain, Field, Ring, RingError};

use crate::dense::Polynomial;

/// Monic gcd of two polynomials over a field; `gcd(0, 0)` is zero.
///
/// # Errors
///
/// `IncompatibleDomain` when the operands live over different fields.
pub fn poly_gcd<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<Polynomial<F>, RingError> {
    euclidean_gcd(a, b)
}

/// Extended Euclidean algorithm on polynomials: `(g, s, t)` with
/// `s*a + t*b = g` and `g` monic.
///
/// # Errors
///
/// `DivisionUndefined` when both inputs are zero.
pub fn poly_eea<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>, Polynomial<F>), RingError> {
    extended_euclidean(a, b)
}

/// Computes `base^exp mod modulus`, reducing after every multiplication so
/// intermediate degrees stay below `deg(modulus)`.
///
/// # Errors
///
/// `DivisionByZero` when the modulus is zero.
pub fn pow_mod<F: Field>(
    base: &Polynomial<F>,
    mut exp: u128,
    modulus: &Polynomial<F>,
) -> Result<Polynomial<F>, RingError> {
    let (_, mut base) = base.div_rem(modulus)?;
    let (_, mut result) = base.one_like().div_rem(modulus)?;

    while exp > 0 {
        if exp & 1 == 1 {
            let (_, r) = result.mul(&base).div_rem(modulus)?;
            result = r;
        }
        let (_, sq) = base.mul(&base).div_rem(modulus)?;
        base = sq;
        exp >>= 1;
    }

    Ok(result)
}

/// The content: the gcd of all coefficients, non-negative. Content of the
/// zero polynomial is zero.
#[must_use]
pub fn content(p: &Polynomial<Integer>) -> Integer {
    let mut g = Integer::zero();
    for c in p.coeffs() {
        g = g.gcd(c);
    }
    g
}

/// The primitive part: `p` divided by its content. The sign stays with the
/// primitive part, so `p = content * primitive_part`. Zero maps to zero.
#[must_use]
pub fn primitive_part(p: &Polynomial<Integer>) -> Polynomial<Integer> {
    let c = content(p);
    if Zero::is_zero(&c) {
        return p.clone();
    }
    p.map(|coeff| coeff / &c)
}

/// Exact division in `Z[x]`: `Some(q)` with `a = q * b` when `b` divides `a`
/// without remainder, `None` otherwise (including any non-integral quotient
/// coefficient along the way).
#[must_use]
pub fn try_div_exact(
    a: &Polynomial<Integer>,
    b: &Polynomial<Integer>,
) -> Option<Polynomial<Integer>> {
    if Ring::is_zero(b) {
        return None;
    }
    if Ring::is_zero(a) {
        return Some(a.clone());
    }
    if a.degree() < b.degree() {
        return None;
    }

    let lc = b.leading_coefficient();
    let mut rem = a.clone();
    let zero = Integer::zero();
    let mut quot = vec![zero; a.degree() - b.degree() + 1];

    while !Ring::is_zero(&rem) && rem.degree() >= b.degree() {
        let (q, r) = Integer::div_rem(rem.leading_coefficient(), lc);
        if !Zero::is_zero(&r) {
            return None;
        }
        let k = rem.degree() - b.degree();
        quot[k] = q.clone();
        rem = Ring::sub(&rem, &b.mul(&Polynomial::monomial(q, k)));
    }

    if Ring::is_zero(&rem) {
        Some(Polynomial::new(quot).ok()?)
    } else {
        None
    }
}
