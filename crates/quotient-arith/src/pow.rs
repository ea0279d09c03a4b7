//! Machine-word modular arithmetic.
//!
//! Square-and-multiply exponentiation at u64 width, with u128 widening to
//! avoid overflow. The generic ring version lives on the `Ring` trait in
//! `quotient-rings`; these are the hot-path primitives Miller-Rabin and
//! Pollard rho run on.

/// Computes `a * b mod m` without overflow.
#[must_use]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Computes `base^exp mod m` by square-and-multiply.
///
/// Uses O(log exp) multiplications.
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut base = base % m;
    let mut result = 1u64;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }
        base = mod_mul(base, base, m);
        exp >>= 1;
    }

    result
}

/// Computes the modular inverse of `a` modulo `m`.
///
/// Returns `None` when gcd(a, m) != 1.
#[must_use]
pub fn mod_inv(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }

    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = m as i128;
    let mut new_r = (a % m) as i128;

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r != 1 {
        return None;
    }

    Some(t.rem_euclid(m as i128) as u64)
}

/// Greatest common divisor of two u64s.
#[must_use]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
