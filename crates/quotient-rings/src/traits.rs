//! Capability traits for the algebraic tower.
//!
//! Elements carry a handle to their domain (a modulus, a modulus polynomial),
//! so constants are obtained from an existing element via `zero_like` and
//! `one_like` rather than free functions. The total operations (`add`, `mul`,
//! ...) panic when operands come from different domains; the `checked_*`
//! variants report the mismatch as a `RingError` instead.

use std::fmt;

use crate::error::RingError;

/// A commutative ring element.
pub trait Ring: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The additive identity of this element's ring.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of this element's ring.
    fn one_like(&self) -> Self;

    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Whether this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Whether both elements belong to the same ring.
    fn same_ring(&self, other: &Self) -> bool;

    /// A human-readable name for this element's ring, e.g. `GF(7)`.
    fn ring_name(&self) -> String;

    /// Ring addition.
    ///
    /// # Panics
    ///
    /// Panics when the operands come from different rings.
    fn add(&self, other: &Self) -> Self;

    /// Ring subtraction.
    ///
    /// # Panics
    ///
    /// Panics when the operands come from different rings.
    fn sub(&self, other: &Self) -> Self;

    /// Ring multiplication.
    ///
    /// # Panics
    ///
    /// Panics when the operands come from different rings.
    fn mul(&self, other: &Self) -> Self;

    /// Additive inverse.
    fn neg(&self) -> Self;

    /// Multiplication by a machine integer, the image of `scalar` under the
    /// canonical map from `Z`.
    fn mul_by_scalar(&self, scalar: i64) -> Self;

    /// Raises to a non-negative power by square-and-multiply.
    ///
    /// `pow(0)` is the multiplicative identity, also for the zero element.
    fn pow(&self, mut exp: u128) -> Self {
        let mut base = self.clone();
        let mut result = self.one_like();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    /// Addition that reports a domain mismatch instead of panicking.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when the operands come from different rings.
    fn checked_add(&self, other: &Self) -> Result<Self, RingError> {
        self.require_same_ring(other)?;
        Ok(self.add(other))
    }

    /// Subtraction that reports a domain mismatch instead of panicking.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when the operands come from different rings.
    fn checked_sub(&self, other: &Self) -> Result<Self, RingError> {
        self.require_same_ring(other)?;
        Ok(self.sub(other))
    }

    /// Multiplication that reports a domain mismatch instead of panicking.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when the operands come from different rings.
    fn checked_mul(&self, other: &Self) -> Result<Self, RingError> {
        self.require_same_ring(other)?;
        Ok(self.mul(other))
    }

    /// Errors unless both elements belong to the same ring.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when they do not.
    fn require_same_ring(&self, other: &Self) -> Result<(), RingError> {
        if self.same_ring(other) {
            Ok(())
        } else {
            Err(RingError::IncompatibleDomain {
                left: self.ring_name(),
                right: other.ring_name(),
            })
        }
    }
}

/// A ring with Euclidean division, so the gcd machinery applies.
///
/// Every nonzero element factors as `unit * normal_form`: for integers the
/// unit is the sign, for polynomials over a field it is the leading
/// coefficient. Normalizing gcds through `normal_form` makes them unique.
pub trait EuclideanDomain: Ring {
    /// Division with remainder; the remainder is strictly smaller than the
    /// divisor in the Euclidean measure.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `other` is zero, `IncompatibleDomain` when the
    /// operands come from different rings.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError>;

    /// The unit part of this element. The unit of zero is one.
    fn unit(&self) -> Self;

    /// The inverse of the unit part.
    fn unit_inv(&self) -> Self;

    /// This element stripped of its unit part: non-negative for integers,
    /// monic for polynomials.
    fn normal_form(&self) -> Self {
        self.mul(&self.unit_inv())
    }
}

/// A field element; every nonzero element is invertible.
pub trait Field: EuclideanDomain {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;
}

/// An element of a finite field, enumerable and of known order.
pub trait FiniteFieldElement: Field {
    /// The number of elements in the field.
    fn order(&self) -> u64;

    /// The characteristic of the field.
    fn characteristic(&self) -> u64;

    /// The `index`-th field element under a fixed enumeration of the whole
    /// field; index 0 is zero. Indices are taken modulo the order.
    fn from_index(&self, index: u64) -> Self;
}
