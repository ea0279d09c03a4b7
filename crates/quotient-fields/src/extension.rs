//! Extension fields `GF(p^m)` as quotient rings `GF(p)[x] / (f)`.
//!
//! The field descriptor holds the monic irreducible modulus behind an `Arc`,
//! so elements share one descriptor instead of each owning a copy; cloning
//! an element is a refcount bump plus its residue polynomial.

use std::fmt;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use quotient_arith::factorize;
use quotient_poly::{is_irreducible, poly_eea, Polynomial};
use quotient_rings::{
    EuclideanDomain, Field, FiniteFieldElement, PrimeField, PrimeFieldElement, Ring, RingError,
};

/// Attempts before a randomized modulus search gives up. Irreducibles have
/// density about 1/m among monic degree-m polynomials, so this budget is
/// effectively never exhausted.
const SEARCH_BUDGET: u32 = 4096;

#[derive(Debug)]
struct ExtensionFieldInner {
    base: PrimeField,
    modulus: Polynomial<PrimeFieldElement>,
    order: u64,
}

/// The field `GF(p^m)`, defined by a monic irreducible polynomial of
/// degree m over `GF(p)`.
#[derive(Clone, Debug)]
pub struct ExtensionField {
    inner: Arc<ExtensionFieldInner>,
}

impl PartialEq for ExtensionField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.base == other.inner.base && self.inner.modulus == other.inner.modulus)
    }
}

impl Eq for ExtensionField {}

impl ExtensionField {
    /// Builds the quotient field for a given modulus polynomial.
    ///
    /// The modulus is normalized to its monic associate; the quotient ring
    /// is unchanged by that.
    ///
    /// # Errors
    ///
    /// `NotIrreducible` when the modulus is reducible or constant.
    ///
    /// # Panics
    ///
    /// Panics when the field order `p^m` does not fit in a `u64`.
    pub fn new(modulus: Polynomial<PrimeFieldElement>) -> Result<Self, RingError> {
        if !is_irreducible(&modulus)? {
            return Err(RingError::NotIrreducible);
        }

        let modulus = modulus.monic();
        let base = modulus.leading_coefficient().field();
        let degree = u32::try_from(modulus.degree()).expect("degree fits in u32");
        let order = base
            .modulus()
            .checked_pow(degree)
            .expect("field order fits in u64");

        Ok(Self {
            inner: Arc::new(ExtensionFieldInner {
                base,
                modulus,
                order,
            }),
        })
    }

    /// Searches for a monic irreducible polynomial of the given degree and
    /// builds the corresponding field. A fixed-seed generator rolls a monic
    /// seed with nonzero constant term; candidates then advance by
    /// mixed-radix increments of the coefficients, re-rolling whenever the
    /// constant term wraps to zero (the candidate would be divisible by x).
    /// Deterministic for a given base and degree.
    ///
    /// # Errors
    ///
    /// `NotIrreducible` when the search budget runs out; `EmptyInput` when
    /// `degree` is zero.
    pub fn search(base: PrimeField, degree: usize) -> Result<Self, RingError> {
        if degree == 0 {
            return Err(RingError::EmptyInput);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(0x6669_656c_6473);
        let p = base.modulus();
        let roll = |rng: &mut ChaCha8Rng| -> Vec<PrimeFieldElement> {
            let mut coeffs: Vec<PrimeFieldElement> = (0..degree)
                .map(|_| base.element(rng.gen_range(0..p) as i64))
                .collect();
            if coeffs[0].is_zero() {
                coeffs[0] = base.one();
            }
            coeffs.push(base.one());
            coeffs
        };

        let mut coeffs = roll(&mut rng);
        for _ in 0..SEARCH_BUDGET {
            let candidate = Polynomial::new(coeffs.clone())?;
            if is_irreducible(&candidate)? {
                return Self::new(candidate);
            }

            // Count up in base p across the non-leading coefficients.
            for i in 0..degree {
                coeffs[i] = Ring::add(&coeffs[i], &base.one());
                if !coeffs[i].is_zero() {
                    break;
                }
            }
            if coeffs[0].is_zero() {
                coeffs = roll(&mut rng);
            }
        }

        Err(RingError::NotIrreducible)
    }

    /// The prime field the extension is built over.
    #[must_use]
    pub fn base(&self) -> PrimeField {
        self.inner.base
    }

    /// The monic modulus polynomial.
    #[must_use]
    pub fn modulus_poly(&self) -> &Polynomial<PrimeFieldElement> {
        &self.inner.modulus
    }

    /// The extension degree m.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.inner.modulus.degree()
    }

    /// The number of field elements, `p^m`.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.inner.order
    }

    /// The characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.inner.base.modulus()
    }

    /// Wraps a base-field polynomial as a field element, reducing it modulo
    /// the field's modulus.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when the polynomial's coefficients come from a
    /// different prime field.
    pub fn element(
        &self,
        poly: &Polynomial<PrimeFieldElement>,
    ) -> Result<ExtensionFieldElement, RingError> {
        let probe = Polynomial::zero_poly(&self.inner.base.zero());
        probe.require_same_ring(poly)?;
        let (_, value) = poly.div_rem(&self.inner.modulus)?;
        Ok(ExtensionFieldElement {
            field: self.clone(),
            value,
        })
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            field: self.clone(),
            value: Polynomial::zero_poly(&self.inner.base.zero()),
        }
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            field: self.clone(),
            value: Polynomial::constant(self.inner.base.one()),
        }
    }

    /// The residue class of x, a root of the modulus polynomial.
    #[must_use]
    pub fn adjoined_root(&self) -> ExtensionFieldElement {
        let x = Polynomial::x_poly(&self.inner.base.zero());
        // Reduction handles the degree-1 case, where x is already a constant.
        self.element(&x).unwrap_or_else(|_| self.zero())
    }

    /// A generator of the multiplicative group.
    ///
    /// Found by testing candidates in enumeration order against the prime
    /// factorization of `p^m - 1`.
    #[must_use]
    pub fn generator(&self) -> ExtensionFieldElement {
        let group_order = self.order() - 1;
        let prime_factors: Vec<u64> = factorize(group_order).into_iter().map(|(p, _)| p).collect();
        let probe = self.zero();

        for index in 1..self.order() {
            let candidate = probe.from_index(index);
            let is_generator = prime_factors
                .iter()
                .all(|&q| !Ring::pow(&candidate, u128::from(group_order / q)).is_one());
            if is_generator {
                return candidate;
            }
        }

        // Unreachable: every finite field's multiplicative group is cyclic.
        self.one()
    }
}

impl fmt::Display for ExtensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF({}^{}) mod {}",
            self.characteristic(),
            self.degree(),
            self.inner.modulus
        )
    }
}

/// An element of an extension field: a residue polynomial of degree < m.
#[derive(Clone, PartialEq, Debug)]
pub struct ExtensionFieldElement {
    field: ExtensionField,
    value: Polynomial<PrimeFieldElement>,
}

impl ExtensionFieldElement {
    /// The field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &ExtensionField {
        &self.field
    }

    /// The residue polynomial, degree < m.
    #[must_use]
    pub fn value(&self) -> &Polynomial<PrimeFieldElement> {
        &self.value
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "incompatible domains: {} vs {}",
            self.field,
            other.field
        );
    }

    fn wrap(&self, value: Polynomial<PrimeFieldElement>) -> Self {
        Self {
            field: self.field.clone(),
            value,
        }
    }
}

impl fmt::Display for ExtensionFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Ring for ExtensionFieldElement {
    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(&self.value)
    }

    fn is_one(&self) -> bool {
        Ring::is_one(&self.value)
    }

    fn same_ring(&self, other: &Self) -> bool {
        self.field == other.field
    }

    fn ring_name(&self) -> String {
        format!("GF({}^{})", self.field.characteristic(), self.field.degree())
    }

    fn add(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        self.wrap(Ring::add(&self.value, &other.value))
    }

    fn sub(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        self.wrap(Ring::sub(&self.value, &other.value))
    }

    fn mul(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        let product = Ring::mul(&self.value, &other.value);
        match product.div_rem(self.field.modulus_poly()) {
            Ok((_, r)) => self.wrap(r),
            // The modulus is never zero, so reduction cannot fail.
            Err(_) => self.wrap(product),
        }
    }

    fn neg(&self) -> Self {
        self.wrap(Ring::neg(&self.value))
    }

    fn mul_by_scalar(&self, scalar: i64) -> Self {
        self.wrap(self.value.mul_by_scalar(scalar))
    }
}

impl EuclideanDomain for ExtensionFieldElement {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        self.require_same_ring(other)?;
        let inv = other.inv().ok_or(RingError::DivisionByZero)?;
        Ok((Ring::mul(self, &inv), self.field.zero()))
    }

    fn unit(&self) -> Self {
        if Ring::is_zero(self) {
            self.field.one()
        } else {
            self.clone()
        }
    }

    fn unit_inv(&self) -> Self {
        match self.unit().inv() {
            Some(inv) => inv,
            None => self.field.one(),
        }
    }

    fn normal_form(&self) -> Self {
        if Ring::is_zero(self) {
            self.field.zero()
        } else {
            self.field.one()
        }
    }
}

impl Field for ExtensionFieldElement {
    /// Inverse by the extended Euclidean algorithm on residue and modulus.
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            return None;
        }
        let (g, s, _) = poly_eea(&self.value, self.field.modulus_poly()).ok()?;
        if !Ring::is_one(&g) {
            return None;
        }
        let (_, reduced) = s.div_rem(self.field.modulus_poly()).ok()?;
        Some(self.wrap(reduced))
    }
}

impl FiniteFieldElement for ExtensionFieldElement {
    fn order(&self) -> u64 {
        self.field.order()
    }

    fn characteristic(&self) -> u64 {
        self.field.characteristic()
    }

    /// Mixed-radix enumeration: digit i of `index` in base p is the
    /// coefficient of `x^i`.
    fn from_index(&self, index: u64) -> Self {
        let p = self.field.characteristic();
        let mut index = index % self.field.order();
        let base = self.field.base();

        let mut coeffs = Vec::with_capacity(self.field.degree());
        for _ in 0..self.field.degree() {
            coeffs.push(base.element((index % p) as i64));
            index /= p;
        }
        if coeffs.is_empty() {
            coeffs.push(base.zero());
        }
        self.wrap(Polynomial::new(coeffs).unwrap_or_else(|_| self.value.zero_like()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// GF(9) = GF(3)[x] / (x^2 + 1).
    fn gf9() -> ExtensionField {
        let f = PrimeField::new(3).unwrap();
        let modulus =
            Polynomial::new(vec![f.element(1), f.element(0), f.element(1)]).unwrap();
        ExtensionField::new(modulus).unwrap()
    }

    /// GF(16) = GF(2)[x] / (x^4 + x + 1).
    fn gf16() -> ExtensionField {
        let f = PrimeField::new(2).unwrap();
        let modulus = Polynomial::new(
            [1i64, 1, 0, 0, 1]
                .iter()
                .map(|&c| f.element(c))
                .collect(),
        )
        .unwrap();
        ExtensionField::new(modulus).unwrap()
    }

    #[test]
    fn test_construction() {
        let field = gf9();
        assert_eq!(field.order(), 9);
        assert_eq!(field.characteristic(), 3);
        assert_eq!(field.degree(), 2);
    }

    #[test]
    fn test_reducible_modulus_rejected() {
        let f = PrimeField::new(3).unwrap();
        // x^2 - 1 = (x - 1)(x + 1)
        let reducible =
            Polynomial::new(vec![f.element(-1), f.element(0), f.element(1)]).unwrap();
        assert_eq!(
            ExtensionField::new(reducible).unwrap_err(),
            RingError::NotIrreducible
        );
    }

    #[test]
    fn test_non_monic_modulus_normalized() {
        let f = PrimeField::new(3).unwrap();
        // 2x^2 + 2: same quotient ring as x^2 + 1.
        let doubled =
            Polynomial::new(vec![f.element(2), f.element(0), f.element(2)]).unwrap();
        let field = ExtensionField::new(doubled).unwrap();
        assert!(field.modulus_poly().leading_coefficient().is_one());
        assert_eq!(field, gf9());
    }

    #[test]
    fn test_arithmetic_and_reduction() {
        let field = gf9();
        let x = field.adjoined_root();

        // x^2 = -1 in GF(9).
        let sq = Ring::mul(&x, &x);
        assert_eq!(sq, field.one().neg());

        // The adjoined root satisfies the modulus.
        assert!(Ring::is_zero(&Ring::add(&sq, &field.one())));
    }

    #[test]
    fn test_every_nonzero_element_invertible() {
        let field = gf9();
        let probe = field.zero();
        for index in 1..field.order() {
            let a = probe.from_index(index);
            let inv = a.inv().expect("nonzero element has an inverse");
            assert!(Ring::mul(&a, &inv).is_one());
        }
        assert_eq!(field.zero().inv(), None);
    }

    #[test]
    fn test_frobenius_fixes_the_field() {
        let field = gf16();
        let probe = field.zero();
        for index in 0..field.order() {
            let a = probe.from_index(index);
            assert_eq!(Ring::pow(&a, u128::from(field.order())), a);
        }
    }

    #[test]
    fn test_generator_order() {
        let field = gf16();
        let g = field.generator();

        // Order exactly 15: g^15 = 1 but g^3 != 1 and g^5 != 1.
        assert!(Ring::pow(&g, 15).is_one());
        assert!(!Ring::pow(&g, 3).is_one());
        assert!(!Ring::pow(&g, 5).is_one());
    }

    #[test]
    fn test_search_finds_irreducible() {
        let base = PrimeField::new(2).unwrap();
        for degree in 1..=6 {
            let field = ExtensionField::search(base, degree).unwrap();
            assert_eq!(field.degree(), degree);
            assert!(is_irreducible(field.modulus_poly()).unwrap());
            // The scan never settles on a multiple of x.
            assert!(!field.modulus_poly().coeff(0).is_zero());
        }
        assert_eq!(
            ExtensionField::search(base, 0).unwrap_err(),
            RingError::EmptyInput
        );
    }

    #[test]
    fn test_from_index_round_trip() {
        let field = gf16();
        let probe = field.zero();
        let mut seen = std::collections::HashSet::new();
        for index in 0..field.order() {
            let a = probe.from_index(index);
            seen.insert(a.value().to_string());
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_mismatched_fields_error() {
        let a = gf9().one();
        let b = gf16().one();
        assert!(matches!(
            a.checked_add(&b),
            Err(RingError::IncompatibleDomain { .. })
        ));
    }

    #[test]
    fn test_element_reduces_input() {
        let field = gf9();
        let f = field.base();
        // x^3 reduces to -x = 2x.
        let x_cubed = Polynomial::monomial(f.one(), 3);
        let reduced = field.element(&x_cubed).unwrap();
        assert_eq!(
            reduced.value(),
            &Polynomial::new(vec![f.zero(), f.element(2)]).unwrap()
        );
    }
}
