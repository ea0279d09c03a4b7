//! Miller-Rabin probabilistic primality testing.
//!
//! Every field construction funnels through this test, so it takes an
//! explicit randomness source for reproducibility; `is_prime` is the
//! fixed-seed convenience wrapper.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pow::{mod_mul, mod_pow};

/// Default witness count; false-positive probability is at most 4^-35.
pub const DEFAULT_ROUNDS: u32 = 35;

/// Miller-Rabin primality test with `rounds` random witnesses.
///
/// Returns `false` for 0, 1, and even numbers above 2; `true` for 2 and 3
/// without sampling witnesses.
pub fn miller_rabin<R: Rng + ?Sized>(n: u64, rounds: u32, rng: &mut R) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    // n - 1 = d * 2^r with d odd
    let mut d = n - 1;
    let mut r = 0u32;
    while d % 2 == 0 {
        d /= 2;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_range(2..=n - 2);
        let mut x = mod_pow(a, d, n);

        if x == 1 || x == n - 1 {
            continue;
        }

        for _ in 0..r - 1 {
            x = mod_mul(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Primality check with the default round count and a fixed-seed generator.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(0x6d72_7362);
    miller_rabin(n, DEFAULT_ROUNDS, &mut rng)
}

/// Returns the smallest prime strictly greater than `n`.
#[must_use]
pub fn next_prime(n: u64) -> u64 {
    let mut candidate = if n < 2 { 2 } else { n + 1 };
    if candidate > 2 && candidate % 2 == 0 {
        candidate += 1;
    }

    loop {
        if is_prime(candidate) {
            return candidate;
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
}
