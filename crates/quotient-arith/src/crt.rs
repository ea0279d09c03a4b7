//! Chinese remaindering by Garner's mixed-radix algorithm.

use num_traits::{One, Zero};

use crate::error::ArithError;
use crate::Integer;

/// Reconstructs the integer congruent to `residues[i]` modulo `moduli[i]`,
/// returned as the symmetric representative in (-M/2, M/2] where M is the
/// product of the moduli.
///
/// The moduli must be pairwise coprime; residues may be negative.
///
/// # Errors
///
/// `LengthMismatch` when the slices differ in length or are empty;
/// `NotCoprime` when a Garner inversion step fails.
pub fn integer_crt(moduli: &[Integer], residues: &[Integer]) -> Result<Integer, ArithError> {
    if moduli.is_empty() || moduli.len() != residues.len() {
        return Err(ArithError::LengthMismatch {
            moduli: moduli.len(),
            residues: residues.len(),
        });
    }

    let mut result = residues[0].rem_euclid(&moduli[0]);
    let mut product = moduli[0].clone();

    for (m, r) in moduli.iter().zip(residues).skip(1) {
        let prod_mod_m = product.rem_euclid(m);
        let inv = mod_inv(&prod_mod_m, m).ok_or_else(|| {
            ArithError::NotCoprime(product.to_string(), m.to_string())
        })?;

        // Mixed-radix digit: (r - result) / product mod m.
        let digit = ((r - &result) * inv).rem_euclid(m);
        result = result + digit * product.clone();
        product = product * m.clone();
    }

    // Symmetric representative.
    let half = &product / &Integer::new(2);
    if result > half {
        result = result - product;
    }

    Ok(result)
}

/// Modular inverse over `Integer`, `None` when gcd(a, m) != 1.
fn mod_inv(a: &Integer, m: &Integer) -> Option<Integer> {
    let mut old_r = a.rem_euclid(m);
    let mut r = m.clone();
    let mut old_s = Integer::one();
    let mut s = Integer::zero();

    while !r.is_zero() {
        let (q, new_r) = old_r.div_rem(&r);
        old_r = r;
        r = new_r;

        let new_s = old_s - q * s.clone();
        old_s = s;
        s = new_s;
    }

    if old_r.is_one() {
        Some(old_s.rem_euclid(m))
    } else {
        None
    }
}
