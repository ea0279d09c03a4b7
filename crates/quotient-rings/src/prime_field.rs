//! Prime fields `GF(p)` with machine-word moduli.
//!
//! A `PrimeField` is a cheap `Copy` handle (just the modulus); elements carry
//! their field with them, so two elements can always be checked for domain
//! compatibility before an operation.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use quotient_arith::{is_prime, mod_inv, mod_mul};

use crate::error::RingError;
use crate::traits::{EuclideanDomain, Field, FiniteFieldElement, Ring};

/// The field of integers modulo a prime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates the field `GF(modulus)`.
    ///
    /// Primality is checked with Miller-Rabin at construction, so element
    /// arithmetic never needs to re-verify it.
    ///
    /// # Errors
    ///
    /// `NotPrime` when the modulus is composite, 0, or 1.
    pub fn new(modulus: u64) -> Result<Self, RingError> {
        if is_prime(modulus) {
            Ok(Self { modulus })
        } else {
            Err(RingError::NotPrime(modulus))
        }
    }

    /// The field's modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The canonical image of `value` in this field.
    #[must_use]
    pub fn element(&self, value: i64) -> PrimeFieldElement {
        let m = i128::from(self.modulus);
        let v = (i128::from(value) % m + m) % m;
        PrimeFieldElement {
            field: *self,
            value: v as u64,
        }
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> PrimeFieldElement {
        PrimeFieldElement {
            field: *self,
            value: 0,
        }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> PrimeFieldElement {
        PrimeFieldElement {
            field: *self,
            value: 1 % self.modulus,
        }
    }

    /// Iterates over all field elements, 0 through p - 1.
    pub fn elements(&self) -> impl Iterator<Item = PrimeFieldElement> + '_ {
        let field = *self;
        (0..self.modulus).map(move |value| PrimeFieldElement { field, value })
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

/// An element of a prime field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimeFieldElement {
    field: PrimeField,
    value: u64,
}

impl PrimeFieldElement {
    /// The canonical representative in `[0, p)`.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The field this element belongs to.
    #[must_use]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "incompatible domains: {} vs {}",
            self.field,
            other.field
        );
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Ring for PrimeFieldElement {
    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn is_one(&self) -> bool {
        self.value == 1 % self.field.modulus
    }

    fn same_ring(&self, other: &Self) -> bool {
        self.field == other.field
    }

    fn ring_name(&self) -> String {
        self.field.to_string()
    }

    fn add(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        // Residues can sit just below 2^64, so the sum is formed in u128.
        let m = u128::from(self.field.modulus);
        let sum = (u128::from(self.value) + u128::from(other.value)) % m;
        Self {
            field: self.field,
            value: sum as u64,
        }
    }

    fn sub(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        let m = u128::from(self.field.modulus);
        let diff = (u128::from(self.value) + m - u128::from(other.value)) % m;
        Self {
            field: self.field,
            value: diff as u64,
        }
    }

    fn mul(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        Self {
            field: self.field,
            value: mod_mul(self.value, other.value, self.field.modulus),
        }
    }

    fn neg(&self) -> Self {
        let m = self.field.modulus;
        Self {
            field: self.field,
            value: (m - self.value) % m,
        }
    }

    fn mul_by_scalar(&self, scalar: i64) -> Self {
        Ring::mul(self, &self.field.element(scalar))
    }
}

impl EuclideanDomain for PrimeFieldElement {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        self.require_same_ring(other)?;
        let inv = other.inv().ok_or(RingError::DivisionByZero)?;
        Ok((Ring::mul(self, &inv), self.field.zero()))
    }

    fn unit(&self) -> Self {
        if self.value == 0 {
            self.field.one()
        } else {
            *self
        }
    }

    fn unit_inv(&self) -> Self {
        // unit() is never zero, so the inverse exists.
        self.unit().inv().unwrap_or_else(|| self.field.one())
    }

    fn normal_form(&self) -> Self {
        if self.value == 0 {
            self.field.zero()
        } else {
            self.field.one()
        }
    }
}

impl Field for PrimeFieldElement {
    fn inv(&self) -> Option<Self> {
        mod_inv(self.value, self.field.modulus).map(|value| Self {
            field: self.field,
            value,
        })
    }
}

impl FiniteFieldElement for PrimeFieldElement {
    fn order(&self) -> u64 {
        self.field.modulus
    }

    fn characteristic(&self) -> u64 {
        self.field.modulus
    }

    fn from_index(&self, index: u64) -> Self {
        Self {
            field: self.field,
            value: index % self.field.modulus,
        }
    }
}

impl Add for PrimeFieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Ring::add(&self, &rhs)
    }
}

impl Sub for PrimeFieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Ring::sub(&self, &rhs)
    }
}

impl Mul for PrimeFieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Ring::mul(&self, &rhs)
    }
}

impl Neg for PrimeFieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Ring::neg(&self)
    }
}
