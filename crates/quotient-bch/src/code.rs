//! BCH code construction, encoding, and syndrome decoding.
//!
//! A code is built from a primitive polynomial defining GF(p^(nm)), a length
//! l coprime to p, a root offset c, and a designed distance d. The generator
//! polynomial's roots are the consecutive powers alpha^c..alpha^(c+d-2) of a
//! primitive l-th root of unity together with their Frobenius conjugates, so
//! every codeword kills d-1 consecutive syndromes and up to
//! t = (d-1)/2 symbol errors are correctable.

use std::collections::BTreeSet;
use std::fmt;

use quotient_arith::{factorize, gcd_u64, mod_mul};
use quotient_fields::{ExtensionField, ExtensionFieldElement};
use quotient_poly::Polynomial;
use quotient_rings::{EuclideanDomain, PrimeFieldElement, Ring};

use crate::berlekamp_massey::berlekamp_massey;
use crate::error::BchError;
use crate::linsolve::solve_square_system;

/// A BCH code over GF(p^n), realized inside the splitting field GF(p^(nm)).
///
/// All parameters are validated in [`BchCode::new`] and immutable afterwards;
/// `encode` and `decode` never re-validate.
#[derive(Debug, Clone)]
pub struct BchCode {
    field: ExtensionField,
    alpha: ExtensionFieldElement,
    generator: Polynomial<ExtensionFieldElement>,
    length: u64,
    dimension: usize,
    designed_distance: u64,
    radius: u64,
    offset: u64,
}

impl BchCode {
    /// Builds the code from a primitive polynomial over GF(p), the symbol
    /// extension degree `n` (symbols live in GF(p^n)), the code length, the
    /// root offset, and the designed distance.
    ///
    /// # Errors
    ///
    /// `NotIrreducible` when the primitive polynomial is reducible, and
    /// `BadInitialization` when the parameters are inconsistent: distance
    /// outside `2..=length`, length sharing a factor with p, polynomial
    /// degree not a multiple of `n`, or the multiplicative order of p^n
    /// modulo the length differing from m.
    pub fn new(
        primitive_poly: Polynomial<PrimeFieldElement>,
        n: usize,
        length: u64,
        offset: u64,
        distance: u64,
    ) -> Result<Self, BchError> {
        if distance < 2 || distance > length {
            return Err(BchError::BadInitialization(format!(
                "designed distance {distance} outside 2..={length}"
            )));
        }

        let field = ExtensionField::new(primitive_poly)?;
        let p = field.characteristic();
        if gcd_u64(length, p) != 1 {
            return Err(BchError::BadInitialization(format!(
                "length {length} shares a factor with the characteristic {p}"
            )));
        }

        let degree = field.degree();
        if n == 0 || degree % n != 0 {
            return Err(BchError::BadInitialization(format!(
                "primitive polynomial degree {degree} is not a multiple of {n}"
            )));
        }
        let m = degree / n;
        let n_exp = u32::try_from(n).map_err(|_| {
            BchError::BadInitialization(format!("symbol extension degree {n} is too large"))
        })?;
        let symbol_order = p.checked_pow(n_exp).ok_or_else(|| {
            BchError::BadInitialization(format!("symbol field order p^{n} overflows"))
        })?;
        if multiplicative_order(symbol_order, length) != Some(m as u64) {
            return Err(BchError::BadInitialization(format!(
                "the order of {symbol_order} modulo {length} is not {m}"
            )));
        }

        // ord_l(q) = m forces l | q^m - 1, so the quotient is exact.
        let exponent = (field.order() - 1) / length;
        let alpha = Ring::pow(&field.generator(), u128::from(exponent));
        for (r, _) in factorize(length) {
            if Ring::pow(&alpha, u128::from(length / r)).is_one() {
                return Err(BchError::BadInitialization(format!(
                    "no primitive {length}-th root of unity in {field}"
                )));
            }
        }

        // Close the designed roots under the Frobenius x -> x^q so the
        // generator has symbol-field coefficients.
        let mut exponents = BTreeSet::new();
        let mut frontier: Vec<u64> = (0..distance - 1)
            .map(|j| ((offset % length) + j) % length)
            .collect();
        while let Some(e) = frontier.pop() {
            if exponents.insert(e) {
                frontier.push(mod_mul(e, symbol_order % length, length));
            }
        }

        let one = field.one();
        let mut generator = Polynomial::constant(one.clone());
        for &e in &exponents {
            let root = Ring::pow(&alpha, u128::from(e));
            let factor = Polynomial::new(vec![Ring::neg(&root), one.clone()])?;
            generator = Ring::mul(&generator, &factor);
        }

        let code_length = usize::try_from(length).map_err(|_| {
            BchError::BadInitialization(format!("length {length} does not fit in memory"))
        })?;
        let dimension = code_length
            .checked_sub(generator.degree() + 1)
            .ok_or_else(|| {
                BchError::BadInitialization(format!(
                    "generator of degree {} leaves no message space in length {length}",
                    generator.degree()
                ))
            })?;

        Ok(Self {
            field,
            alpha,
            generator,
            length,
            dimension,
            designed_distance: distance,
            radius: (distance - 1) / 2,
            offset,
        })
    }

    /// The splitting field GF(p^(nm)).
    #[must_use]
    pub fn field(&self) -> &ExtensionField {
        &self.field
    }

    /// The primitive l-th root of unity defining the code.
    #[must_use]
    pub fn alpha(&self) -> &ExtensionFieldElement {
        &self.alpha
    }

    /// The generator polynomial.
    #[must_use]
    pub fn generator_poly(&self) -> &Polynomial<ExtensionFieldElement> {
        &self.generator
    }

    /// The code length l.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// The message dimension k.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The designed distance d.
    #[must_use]
    pub fn designed_distance(&self) -> u64 {
        self.designed_distance
    }

    /// The correction radius t = (d - 1) / 2.
    #[must_use]
    pub fn correction_radius(&self) -> u64 {
        self.radius
    }

    /// Lifts a base-field word into the splitting field coefficient-wise.
    ///
    /// # Errors
    ///
    /// `IncompatibleDomain` when the word is over a different prime field.
    pub fn embed(
        &self,
        word: &Polynomial<PrimeFieldElement>,
    ) -> Result<Polynomial<ExtensionFieldElement>, BchError> {
        let coeffs = word
            .coeffs()
            .iter()
            .map(|c| self.field.element(&Polynomial::constant(*c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial::new(coeffs)?)
    }

    /// Projects a splitting-field word back onto the prime field, or `None`
    /// when some coefficient lies outside it.
    #[must_use]
    pub fn to_base_field(
        &self,
        word: &Polynomial<ExtensionFieldElement>,
    ) -> Option<Polynomial<PrimeFieldElement>> {
        let mut coeffs = Vec::with_capacity(word.degree() + 1);
        for c in word.coeffs() {
            if c.value().degree() > 0 {
                return None;
            }
            coeffs.push(c.value().coeff(0));
        }
        Polynomial::new(coeffs).ok()
    }

    /// Encodes a message as `generator * message`.
    ///
    /// # Errors
    ///
    /// `MessageTooLong` when the message has more than k symbols.
    pub fn encode(
        &self,
        message: &Polynomial<PrimeFieldElement>,
    ) -> Result<Polynomial<ExtensionFieldElement>, BchError> {
        if message.degree() + 1 > self.dimension {
            return Err(BchError::MessageTooLong {
                dimension: self.dimension,
            });
        }
        let lifted = self.embed(message)?;
        Ok(Ring::mul(&self.generator, &lifted))
    }

    /// Corrects up to t symbol errors in a received word and returns the
    /// nearest codeword.
    ///
    /// Syndromes are the word's values at alpha^c..alpha^(c+d-2);
    /// Berlekamp–Massey turns them into the error locator, whose roots are
    /// scanned exhaustively over alpha^1..alpha^l; magnitudes come from a
    /// linear solve against the located positions.
    ///
    /// # Errors
    ///
    /// `TooManyErrors` when the locator degree exceeds t, the root count
    /// disagrees with it, the magnitude system is singular, or the corrected
    /// word still has a nonzero syndrome.
    pub fn decode(
        &self,
        word: &Polynomial<ExtensionFieldElement>,
    ) -> Result<Polynomial<ExtensionFieldElement>, BchError> {
        if word.degree() as u64 >= self.length {
            return Err(BchError::TooManyErrors);
        }

        let syndromes = self.syndromes(word);
        if syndromes.iter().all(Ring::is_zero) {
            return Ok(word.clone());
        }

        let recurrence = berlekamp_massey(&syndromes)?;
        let locator = recurrence.connection;
        let errors = recurrence.length;
        if errors as u64 > self.radius || locator.degree() != errors {
            return Err(BchError::TooManyErrors);
        }

        // sigma(x) = prod(1 - X_i x), so a root at alpha^j marks the
        // position l - j.
        let mut positions: Vec<u64> = Vec::new();
        let mut point = self.alpha.clone();
        for j in 1..=self.length {
            if Ring::is_zero(&locator.eval(&point)) {
                positions.push((self.length - j) % self.length);
            }
            point = Ring::mul(&point, &self.alpha);
        }
        if positions.len() != errors {
            return Err(BchError::TooManyErrors);
        }

        let locators: Vec<ExtensionFieldElement> = positions
            .iter()
            .map(|&pos| Ring::pow(&self.alpha, u128::from(pos)))
            .collect();
        let matrix: Vec<Vec<ExtensionFieldElement>> = (0..errors)
            .map(|j| {
                locators
                    .iter()
                    .map(|x| Ring::pow(x, u128::from(self.offset) + j as u128))
                    .collect()
            })
            .collect();
        let magnitudes = solve_square_system(&matrix, &syndromes[..errors])
            .ok_or(BchError::TooManyErrors)?;

        let mut corrected = word.clone();
        for (pos, magnitude) in positions.iter().zip(&magnitudes) {
            let term = Polynomial::monomial(magnitude.clone(), *pos as usize);
            corrected = Ring::sub(&corrected, &term);
        }

        if self.syndromes(&corrected).iter().any(|s| !Ring::is_zero(s)) {
            return Err(BchError::TooManyErrors);
        }
        Ok(corrected)
    }

    /// Strips the generator from a codeword, recovering the message.
    ///
    /// # Errors
    ///
    /// `NotACodeword` when the word is not a generator multiple or its
    /// message does not project onto the prime field.
    pub fn unencode(
        &self,
        codeword: &Polynomial<ExtensionFieldElement>,
    ) -> Result<Polynomial<PrimeFieldElement>, BchError> {
        let (quotient, remainder) = codeword.div_rem(&self.generator)?;
        if !Ring::is_zero(&remainder) {
            return Err(BchError::NotACodeword);
        }
        self.to_base_field(&quotient).ok_or(BchError::NotACodeword)
    }

    fn syndromes(&self, word: &Polynomial<ExtensionFieldElement>) -> Vec<ExtensionFieldElement> {
        (0..self.designed_distance - 1)
            .map(|j| {
                let e = ((self.offset % self.length) + j) % self.length;
                word.eval(&Ring::pow(&self.alpha, u128::from(e)))
            })
            .collect()
    }
}

impl fmt::Display for BchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BCH(length={}, dimension={}, distance={}) over {}",
            self.length, self.dimension, self.designed_distance, self.field
        )
    }
}

/// The multiplicative order of `q` modulo `l`, or `None` when they share a
/// factor.
fn multiplicative_order(q: u64, l: u64) -> Option<u64> {
    if l < 2 || gcd_u64(q, l) != 1 {
        return None;
    }
    let mut acc = q % l;
    for order in 1..=l {
        if acc == 1 {
            return Some(order);
        }
        acc = mod_mul(acc, q % l, l);
    }
    None
}
