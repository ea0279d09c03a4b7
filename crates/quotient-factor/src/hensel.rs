//! Linear Hensel lifting of a coprime mod-p factor pair to the integers.
//!
//! Given a primitive P with P = u1 * w1 (mod p) and u1, w1 coprime mod p,
//! the lift reconstructs u, w with lc(P) * P = u * w over Z, or reports
//! that no such pair exists below a Mignotte-style coefficient bound. The
//! leading coefficient is attached to both halves up front so the quotient
//! field never appears: everything stays in Z[x] and GF(p)[x].

use num_traits::Zero;
use quotient_arith::Integer;
use quotient_poly::{
    lift_symmetric, poly_eea, primitive_part, reduce_mod, try_div_exact, Polynomial,
};
use quotient_rings::{
    EuclideanDomain, Field, FiniteFieldElement, PrimeField, PrimeFieldElement, Ring, RingError,
};

use crate::error::FactorError;

/// A successful lift: `p = u * w` over the integers, with `u` primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct HenselLift {
    /// The lifted factor, primitive with positive-multiple leading sign of
    /// the input pair.
    pub u: Polynomial<Integer>,
    /// The exact cofactor `p / u`.
    pub w: Polynomial<Integer>,
}

/// Lifts the factor pair `(u_start, w_start)` of `p mod prime` to a true
/// integer factorization.
///
/// Returns `Ok(None)` when the pair does not correspond to an integer
/// factorization: the error term stays nonzero past the coefficient bound
/// `2 * maxcoeff(p) * 2^deg(p) * |lc(p)|`, the pair is not coprime mod the
/// prime, or the inputs are inconsistent with `p`.
///
/// # Errors
///
/// `ZeroPolynomial` for a zero or constant `p`; ring errors propagate from
/// the underlying arithmetic.
pub fn hensel_lift(
    p: &Polynomial<Integer>,
    prime: u64,
    u_start: &Polynomial<PrimeFieldElement>,
    w_start: &Polynomial<PrimeFieldElement>,
) -> Result<Option<HenselLift>, FactorError> {
    if Ring::is_zero(p) || p.degree() == 0 {
        return Err(FactorError::ZeroPolynomial);
    }

    let field = PrimeField::new(prime)?;
    let p_image = reduce_mod(p, field);
    // The prime must preserve the degree (not divide the leading coefficient).
    if p_image.degree() != p.degree() {
        return Ok(None);
    }

    let u1 = u_start.monic();
    let w1 = w_start.monic();
    if Ring::mul(&u1, &w1) != p_image.monic() {
        return Ok(None);
    }

    // Fixed Bezout pair: s * u1 + t * w1 = 1 (mod prime).
    let (g, s, t) = match poly_eea(&u1, &w1) {
        Ok(triple) => triple,
        Err(RingError::DivisionUndefined) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if !Ring::is_one(&g) {
        return Ok(None);
    }

    let b = p.leading_coefficient().clone();
    let b_image = field
        .zero()
        .from_index(b.rem_euclid(&Integer::from(prime)).to_u64().unwrap_or(0));
    let Some(b_inv) = b_image.inv() else {
        return Ok(None);
    };

    let target = p.scale(&b);
    let mut u = attach_leading(&u1, &b, &b_image);
    let mut w = attach_leading(&w1, &b, &b_image);

    let max_coeff = p
        .coeffs()
        .iter()
        .map(Integer::abs)
        .max()
        .unwrap_or_else(|| Integer::new(1));
    let degree = u32::try_from(p.degree()).unwrap_or(u32::MAX);
    let bound = Integer::new(2) * max_coeff * Integer::new(2).pow(degree) * b.abs();

    let prime_int = Integer::from(prime);
    let mut modulus = prime_int.clone();

    loop {
        let error = Ring::sub(&target, &Ring::mul(&u, &w));
        if Ring::is_zero(&error) {
            break;
        }
        if modulus > bound {
            return Ok(None);
        }

        // error is divisible by p^k; a nonzero remainder means the inputs
        // were inconsistent.
        let mut exact = true;
        let quotient = error.map(|c| {
            let (q, r) = Integer::div_rem(c, &modulus);
            if !Zero::is_zero(&r) {
                exact = false;
            }
            q
        });
        if !exact {
            return Ok(None);
        }

        // Split c' = c / b via the Bezout identity, folding the division
        // quotient into the w-side so the u-correction stays below deg(u1).
        let c_prime = reduce_mod(&quotient, field).scale(&b_inv);
        let (fold, du) = Ring::mul(&t, &c_prime).div_rem(&u1)?;
        let dw = Ring::add(&Ring::mul(&s, &c_prime), &Ring::mul(&fold, &w1));

        u = Ring::add(&u, &lift_symmetric(&du).scale(&modulus));
        w = Ring::add(&w, &lift_symmetric(&dw).scale(&modulus));
        modulus = &modulus * &prime_int;
    }

    // Restore primitivity; the cofactor compensates via exact division of
    // the original input.
    let u_final = primitive_part(&u);
    Ok(try_div_exact(p, &u_final).map(|w_final| HenselLift {
        u: u_final,
        w: w_final,
    }))
}

/// Lifts the symmetric representative of `base * b` and then overwrites the
/// leading coefficient with the true integer `b`.
fn attach_leading(
    base: &Polynomial<PrimeFieldElement>,
    b: &Integer,
    b_image: &PrimeFieldElement,
) -> Polynomial<Integer> {
    let lifted = lift_symmetric(&base.scale(b_image));
    let mut coeffs: Vec<Integer> = (0..base.degree()).map(|i| lifted.coeff(i)).collect();
    coeffs.push(b.clone());
    Polynomial::new(coeffs).unwrap_or(lifted)
}
