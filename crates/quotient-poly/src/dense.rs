//! Dense univariate polynomials.
//!
//! Coefficients are stored low degree first; index `i` holds the coefficient
//! of `x^i`. The vector never holds trailing zeros and is never empty: the
//! zero polynomial is the single zero coefficient, which also keeps a handle
//! to the coefficient ring alive.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use quotient_rings::{EuclideanDomain, Field, Ring, RingError};

/// A dense univariate polynomial over the ring `R`.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> Polynomial<R> {
    /// Builds a polynomial from coefficients, low degree first.
    ///
    /// Trailing zeros are trimmed away.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when no coefficients are given; `IncompatibleDomain`
    /// when the coefficients come from different rings.
    pub fn new(coeffs: Vec<R>) -> Result<Self, RingError> {
        let first = coeffs.first().ok_or(RingError::EmptyInput)?;
        for c in &coeffs {
            first.require_same_ring(c)?;
        }
        Ok(Self::from_vec(coeffs))
    }

    /// Trims trailing zeros, always leaving at least the constant term.
    fn from_vec(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial over the same ring as `probe`.
    #[must_use]
    pub fn zero_poly(probe: &R) -> Self {
        Self {
            coeffs: vec![probe.zero_like()],
        }
    }

    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The monomial `x` over the same ring as `probe`.
    #[must_use]
    pub fn x_poly(probe: &R) -> Self {
        Self {
            coeffs: vec![probe.zero_like(), probe.one_like()],
        }
    }

    /// The monomial `c * x^degree`.
    #[must_use]
    pub fn monomial(c: R, degree: usize) -> Self {
        if Ring::is_zero(&c) {
            return Self::constant(c);
        }
        let zero = c.zero_like();
        let mut coeffs = vec![zero; degree];
        coeffs.push(c);
        Self { coeffs }
    }

    /// The degree; the zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficients, low degree first, trailing zeros trimmed.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// The coefficient of `x^i`, zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.coeffs[0].zero_like())
    }

    /// The leading coefficient; zero only for the zero polynomial.
    #[must_use]
    pub fn leading_coefficient(&self) -> &R {
        self.coeffs.last().unwrap_or(&self.coeffs[0])
    }

    /// Evaluates at `x` by Horner's scheme.
    ///
    /// # Panics
    ///
    /// Panics when `x` comes from a different ring than the coefficients.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut acc = self.coeffs[self.coeffs.len() - 1].clone();
        for c in self.coeffs.iter().rev().skip(1) {
            acc = acc.mul(x).add(c);
        }
        acc
    }

    /// The formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero_poly(&self.coeffs[0]);
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();
        Self::from_vec(coeffs)
    }

    /// Applies `f` to each coefficient, producing a polynomial over another
    /// ring. Trailing zeros of the image are trimmed.
    pub fn map<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> Polynomial<S> {
        Polynomial::from_vec(self.coeffs.iter().map(|c| f(c)).collect())
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        self.map(|a| a.mul(c))
    }

    /// Multiplies by `x^k`.
    #[must_use]
    pub fn shifted(&self, k: usize) -> Self {
        if Ring::is_zero(self) || k == 0 {
            return self.clone();
        }
        let zero = self.coeffs[0].zero_like();
        let mut coeffs = vec![zero; k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }
}

impl<F: Field> Polynomial<F> {
    /// The monic associate; the zero polynomial maps to itself.
    #[must_use]
    pub fn monic(&self) -> Self {
        EuclideanDomain::normal_form(self)
    }
}

impl<R: Ring> Ring for Polynomial<R> {
    fn zero_like(&self) -> Self {
        Self::zero_poly(&self.coeffs[0])
    }

    fn one_like(&self) -> Self {
        Self::constant(self.coeffs[0].one_like())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn same_ring(&self, other: &Self) -> bool {
        self.coeffs[0].same_ring(&other.coeffs[0])
    }

    fn ring_name(&self) -> String {
        format!("{}[x]", self.coeffs[0].ring_name())
    }

    fn add(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        let n = self.coeffs.len().max(other.coeffs.len());
        let zero = self.coeffs[0].zero_like();
        let coeffs = (0..n)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                a.add(b)
            })
            .collect();
        Self::from_vec(coeffs)
    }

    fn sub(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        let n = self.coeffs.len().max(other.coeffs.len());
        let zero = self.coeffs[0].zero_like();
        let coeffs = (0..n)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = other.coeffs.get(i).unwrap_or(&zero);
                a.sub(b)
            })
            .collect();
        Self::from_vec(coeffs)
    }

    fn mul(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        if Ring::is_zero(self) || Ring::is_zero(other) {
            return self.zero_like();
        }
        let zero = self.coeffs[0].zero_like();
        let mut coeffs = vec![zero; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].add(&a.mul(b));
            }
        }
        Self::from_vec(coeffs)
    }

    fn neg(&self) -> Self {
        self.map(Ring::neg)
    }

    fn mul_by_scalar(&self, scalar: i64) -> Self {
        self.map(|c| c.mul_by_scalar(scalar))
    }
}

impl<R: Ring> Polynomial<R> {
    fn assert_compatible(&self, other: &Self) {
        assert!(
            self.same_ring(other),
            "incompatible domains: {} vs {}",
            self.ring_name(),
            other.ring_name()
        );
    }
}

impl<F: Field> EuclideanDomain for Polynomial<F> {
    /// Polynomial long division; a constant divisor scales termwise with a
    /// zero remainder.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        self.require_same_ring(other)?;
        if Ring::is_zero(other) {
            return Err(RingError::DivisionByZero);
        }
        if Ring::is_zero(self) || self.coeffs.len() < other.coeffs.len() {
            return Ok((self.zero_like(), self.clone()));
        }

        let lc_inv = other
            .leading_coefficient()
            .inv()
            .ok_or(RingError::DivisionByZero)?;
        let zero = self.coeffs[0].zero_like();
        let shift = self.coeffs.len() - other.coeffs.len();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![zero; shift + 1];

        for k in (0..=shift).rev() {
            let c = rem[other.degree() + k].mul(&lc_inv);
            if c.is_zero() {
                continue;
            }
            for (i, oc) in other.coeffs.iter().enumerate() {
                rem[i + k] = rem[i + k].sub(&c.mul(oc));
            }
            quot[k] = c;
        }

        rem.truncate(other.coeffs.len() - 1);
        if rem.is_empty() {
            rem.push(self.coeffs[0].zero_like());
        }
        Ok((Self::from_vec(quot), Self::from_vec(rem)))
    }

    fn unit(&self) -> Self {
        if Ring::is_zero(self) {
            self.one_like()
        } else {
            Self::constant(self.leading_coefficient().clone())
        }
    }

    fn unit_inv(&self) -> Self {
        match self.leading_coefficient().inv() {
            Some(inv) => Self::constant(inv),
            None => self.one_like(),
        }
    }
}

impl<R: Ring> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Ring::is_zero(self) {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 if c.is_one() => write!(f, "x")?,
                1 => write!(f, "{c}*x")?,
                _ if c.is_one() => write!(f, "x^{i}")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
        }
        Ok(())
    }
}

impl<R: Ring> Add for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: Self) -> Self::Output {
        Ring::add(self, rhs)
    }
}

impl<R: Ring> Sub for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        Ring::sub(self, rhs)
    }
}

impl<R: Ring> Mul for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Ring::mul(self, rhs)
    }
}

impl<R: Ring> Neg for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Self::Output {
        Ring::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotient_rings::{PrimeField, PrimeFieldElement};

    fn poly(field: PrimeField, coeffs: &[i64]) -> Polynomial<PrimeFieldElement> {
        Polynomial::new(coeffs.iter().map(|&c| field.element(c)).collect()).unwrap()
    }

    #[test]
    fn test_construction_and_trim() {
        let f = PrimeField::new(7).unwrap();
        let p = poly(f, &[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coeffs().len(), 2);

        let z = poly(f, &[0, 0, 0]);
        assert!(Ring::is_zero(&z));
        assert_eq!(z.degree(), 0);

        assert_eq!(
            Polynomial::<PrimeFieldElement>::new(vec![]).unwrap_err(),
            RingError::EmptyInput
        );
    }

    #[test]
    fn test_mixed_domains_rejected() {
        let f7 = PrimeField::new(7).unwrap();
        let f11 = PrimeField::new(11).unwrap();
        let err = Polynomial::new(vec![f7.element(1), f11.element(1)]).unwrap_err();
        assert!(matches!(err, RingError::IncompatibleDomain { .. }));
    }

    #[test]
    fn test_add_mul() {
        let f = PrimeField::new(7).unwrap();
        let a = poly(f, &[1, 2, 3]); // 3x^2 + 2x + 1
        let b = poly(f, &[6, 5]); // 5x + 6

        assert_eq!(Ring::add(&a, &b), poly(f, &[0, 0, 3]));
        assert_eq!(Ring::mul(&a, &b), poly(f, &[6, 3, 0, 1]));
        assert_eq!(Ring::mul(&a, &a.zero_like()), a.zero_like());
    }

    #[test]
    fn test_cancellation_trims() {
        let f = PrimeField::new(7).unwrap();
        let a = poly(f, &[1, 0, 3]);
        let b = poly(f, &[2, 0, 4]); // 3x^2 + 4x^2 = 0 mod 7
        assert_eq!(Ring::add(&a, &b).degree(), 0);
    }

    #[test]
    fn test_div_rem() {
        let f = PrimeField::new(5).unwrap();
        let a = poly(f, &[2, 0, 3, 1]); // x^3 + 3x^2 + 2
        let b = poly(f, &[1, 1]); // x + 1

        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r.degree() < b.degree() || Ring::is_zero(&r));
        assert_eq!(Ring::add(&Ring::mul(&q, &b), &r), a);
    }

    #[test]
    fn test_div_by_constant() {
        let f = PrimeField::new(5).unwrap();
        let a = poly(f, &[2, 4, 1]);
        let c = poly(f, &[2]);
        let (q, r) = a.div_rem(&c).unwrap();
        assert!(Ring::is_zero(&r));
        assert_eq!(q, poly(f, &[1, 2, 3]));
    }

    #[test]
    fn test_div_by_zero() {
        let f = PrimeField::new(5).unwrap();
        let a = poly(f, &[1, 1]);
        assert_eq!(
            a.div_rem(&a.zero_like()).unwrap_err(),
            RingError::DivisionByZero
        );
    }

    #[test]
    fn test_eval() {
        let f = PrimeField::new(11).unwrap();
        let p = poly(f, &[1, 2, 1]); // (x + 1)^2
        assert_eq!(p.eval(&f.element(3)), f.element(16 % 11));
        assert_eq!(p.eval(&f.element(-1)), f.zero());
    }

    #[test]
    fn test_derivative() {
        let f = PrimeField::new(7).unwrap();
        let p = poly(f, &[5, 3, 0, 2]); // 2x^3 + 3x + 5
        assert_eq!(p.derivative(), poly(f, &[3, 0, 6]));
        assert!(Ring::is_zero(&poly(f, &[4]).derivative()));

        // x^7 has zero derivative in characteristic 7.
        let frob = Polynomial::monomial(f.one(), 7);
        assert!(Ring::is_zero(&frob.derivative()));
    }

    #[test]
    fn test_monic() {
        let f = PrimeField::new(7).unwrap();
        let p = poly(f, &[2, 4]); // 4x + 2
        let m = p.monic();
        assert!(m.leading_coefficient().is_one());
        assert_eq!(m, poly(f, &[4, 1])); // 4^-1 = 2, so x + 4
    }

    #[test]
    fn test_shift_and_monomial() {
        let f = PrimeField::new(7).unwrap();
        let p = poly(f, &[1, 1]);
        assert_eq!(p.shifted(2), poly(f, &[0, 0, 1, 1]));
        assert_eq!(Polynomial::monomial(f.element(3), 2), poly(f, &[0, 0, 3]));
        assert!(Ring::is_zero(&Polynomial::monomial(f.zero(), 5)));
    }

    #[test]
    fn test_display() {
        let f = PrimeField::new(7).unwrap();
        assert_eq!(poly(f, &[5, 0, 1]).to_string(), "x^2 + 5");
        assert_eq!(poly(f, &[0]).to_string(), "0");
        assert_eq!(poly(f, &[1, 2]).to_string(), "2*x + 1");
    }
}
