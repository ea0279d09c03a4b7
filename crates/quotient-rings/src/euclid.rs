//! The extended Euclidean algorithm over any Euclidean domain.

use num_traits::{One, Zero};
use quotient_arith::Integer;

use crate::error::RingError;
use crate::traits::{EuclideanDomain, Ring};

/// Extended Euclidean algorithm: returns `(g, s, t)` with
/// `s * a + t * b = g` and `g` the gcd of `a` and `b` in normal form.
///
/// # Errors
///
/// `DivisionUndefined` when both inputs are zero (no Bezout identity
/// exists), or any error raised by `div_rem` along the way.
pub fn extended_euclidean<D: EuclideanDomain>(a: &D, b: &D) -> Result<(D, D, D), RingError> {
    if a.is_zero() && b.is_zero() {
        return Err(RingError::DivisionUndefined);
    }
    a.require_same_ring(b)?;

    // Each row (r, s, t) satisfies s * a + t * b = r. Dividing a whole row by
    // r's unit preserves that, and keeps the remainders canonical (monic
    // polynomials, non-negative integers) so quotients never see unit drift.
    let normalize = |r: D, s: D, t: D| {
        let u_inv = r.unit_inv();
        (r.mul(&u_inv), s.mul(&u_inv), t.mul(&u_inv))
    };

    let (mut old_r, mut old_s, mut old_t) =
        normalize(a.clone(), a.one_like(), a.zero_like());
    let (mut r, mut s, mut t) = normalize(b.clone(), a.zero_like(), a.one_like());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r)?;

        let next = normalize(rem, old_s.sub(&q.mul(&s)), old_t.sub(&q.mul(&t)));
        old_r = r;
        old_s = s;
        old_t = t;
        (r, s, t) = next;
    }

    Ok((old_r, old_s, old_t))
}

/// Greatest common divisor in normal form; `gcd(0, 0)` is zero.
///
/// # Errors
///
/// Any error raised by `div_rem`, in particular `IncompatibleDomain`.
pub fn euclidean_gcd<D: EuclideanDomain>(a: &D, b: &D) -> Result<D, RingError> {
    a.require_same_ring(b)?;

    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let (_, rem) = a.div_rem(&b)?;
        a = b;
        b = rem;
    }

    if a.is_zero() {
        Ok(a)
    } else {
        Ok(a.normal_form())
    }
}

impl Ring for Integer {
    fn zero_like(&self) -> Self {
        Self::zero()
    }

    fn one_like(&self) -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn same_ring(&self, _other: &Self) -> bool {
        true
    }

    fn ring_name(&self) -> String {
        "ZZ".to_string()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn mul_by_scalar(&self, scalar: i64) -> Self {
        self * &Self::new(scalar)
    }
}

impl EuclideanDomain for Integer {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        if Zero::is_zero(other) {
            return Err(RingError::DivisionByZero);
        }
        Ok(Integer::div_rem(self, other))
    }

    fn unit(&self) -> Self {
        if self.is_negative() {
            Self::new(-1)
        } else {
            Self::one()
        }
    }

    fn unit_inv(&self) -> Self {
        self.unit()
    }

    fn normal_form(&self) -> Self {
        self.abs()
    }
}
