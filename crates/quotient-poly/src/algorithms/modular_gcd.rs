//! Gcd of integer polynomials by modular images.
//!
//! Coefficient growth makes the direct Euclidean algorithm on `Z[x]`
//! impractical, so the gcd is assembled from monic gcds modulo a schedule of
//! large primes, combined coefficient-wise by Chinese remaindering, and
//! verified by exact trial division. Primes dividing a leading coefficient
//! are skipped; primes whose image gcd has too large a degree are unlucky
//! and discarded.

use std::cmp::Ordering;

use num_traits::Zero;
use quotient_arith::{next_prime, Integer};
use quotient_rings::{
    extended_euclidean, FiniteFieldElement, PrimeField, PrimeFieldElement, Ring, RingError,
};

use crate::algorithms::gcd::{content, poly_gcd, primitive_part, try_div_exact};
use crate::dense::Polynomial;

/// Primes start above 2^31 so a handful of images pins down any reasonable
/// coefficient size.
const PRIME_FLOOR: u64 = 1 << 31;

/// Reduces an integer polynomial modulo the field's characteristic.
///
/// The degree can drop when the prime divides the leading coefficient.
#[must_use]
pub fn reduce_mod(p: &Polynomial<Integer>, field: PrimeField) -> Polynomial<PrimeFieldElement> {
    let m = Integer::from(field.modulus());
    let probe = field.zero();
    p.map(|c| probe.from_index(c.rem_euclid(&m).to_u64().unwrap_or(0)))
}

/// Lifts a mod-p polynomial back to `Z[x]` using symmetric representatives
/// in `(-p/2, p/2]`.
#[must_use]
pub fn lift_symmetric(p: &Polynomial<PrimeFieldElement>) -> Polynomial<Integer> {
    let modulus = p.leading_coefficient().order();
    let half = modulus / 2;
    p.map(|c| {
        let v = c.value();
        if v > half {
            Integer::from(v) - Integer::from(modulus)
        } else {
            Integer::from(v)
        }
    })
}

/// Greatest common divisor in `Z[x]`, with positive leading coefficient.
///
/// # Errors
///
/// `IncompatibleDomain` is impossible over `Z`; division errors from the
/// underlying arithmetic propagate but do not occur for valid inputs.
pub fn modular_gcd(
    a: &Polynomial<Integer>,
    b: &Polynomial<Integer>,
) -> Result<Polynomial<Integer>, RingError> {
    if Ring::is_zero(a) {
        return Ok(sign_normal(b));
    }
    if Ring::is_zero(b) {
        return Ok(sign_normal(a));
    }

    let c = content(a).gcd(&content(b));
    let pa = primitive_part(a);
    let pb = primitive_part(b);

    // The true gcd's leading coefficient divides d; scaling each image to
    // lc = d makes images CRT-compatible across primes.
    let d = pa.leading_coefficient().gcd(pb.leading_coefficient());

    let mut prime = PRIME_FLOOR;
    let mut acc: Option<(Polynomial<Integer>, Integer)> = None;

    loop {
        prime = next_prime(prime);
        let p_int = Integer::from(prime);
        if Zero::is_zero(&pa.leading_coefficient().rem_euclid(&p_int))
            || Zero::is_zero(&pb.leading_coefficient().rem_euclid(&p_int))
        {
            continue;
        }

        let field = PrimeField::new(prime)?;
        let g = poly_gcd(&reduce_mod(&pa, field), &reduce_mod(&pb, field))?;

        if g.degree() == 0 {
            // Coprime primitive parts; only the content survives.
            return Ok(Polynomial::constant(c));
        }

        let d_image = field
            .zero()
            .from_index(d.rem_euclid(&p_int).to_u64().unwrap_or(0));
        let lifted = lift_symmetric(&g.scale(&d_image));

        let (combined, modulus) = match acc.take() {
            None => (lifted, p_int),
            Some((prev, m)) => match g.degree().cmp(&prev.degree()) {
                // This prime's image is too big: unlucky, discard it.
                Ordering::Greater => {
                    acc = Some((prev, m));
                    continue;
                }
                // Every earlier prime was unlucky: start over from this one.
                Ordering::Less => (lifted, p_int),
                Ordering::Equal => {
                    let mut coeffs = Vec::with_capacity(prev.degree() + 1);
                    for i in 0..=prev.degree() {
                        coeffs.push(crt_pair(&prev.coeff(i), &m, &lifted.coeff(i), &p_int)?);
                    }
                    (Polynomial::new(coeffs)?, &m * &p_int)
                }
            },
        };

        let candidate = sign_normal(&primitive_part(&combined));
        if try_div_exact(&pa, &candidate).is_some() && try_div_exact(&pb, &candidate).is_some() {
            return Ok(candidate.scale(&c));
        }
        acc = Some((combined, modulus));
    }
}

fn sign_normal(p: &Polynomial<Integer>) -> Polynomial<Integer> {
    if p.leading_coefficient().is_negative() {
        Ring::neg(p)
    } else {
        p.clone()
    }
}

/// Combines `x = a (mod m)`, `x = b (mod p)` into the symmetric
/// representative modulo `m * p`. The moduli must be coprime.
fn crt_pair(a: &Integer, m: &Integer, b: &Integer, p: &Integer) -> Result<Integer, RingError> {
    let (_, inv, _) = extended_euclidean(&m.rem_euclid(p), p)?;
    let digit = ((b - a) * inv).rem_euclid(p);
    let product = m * p;
    let mut result = a + &(digit * m.clone());

    let half = &product / &Integer::new(2);
    if result > half {
        result = result - product;
    }
    Ok(result)
}
