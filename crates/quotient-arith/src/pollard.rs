//! Pollard's rho: integer factorization and discrete logarithms.
//!
//! Both routines are probabilistic and iteration-bounded; they take an
//! explicit randomness source and return `None` only when the budget runs
//! out, never an incorrect answer.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::pow::{gcd_u64, mod_inv, mod_mul, mod_pow};
use crate::primality::is_prime;

const RHO_RESTARTS: u32 = 64;

/// Finds a nontrivial factor of a composite `n` by Pollard's rho.
///
/// Returns `None` when `n < 4`, when `n` is prime, or (very unlikely) when
/// every restart degenerates. Even `n` short-circuits to 2.
pub fn pollard_rho_factor<R: Rng + ?Sized>(n: u64, rng: &mut R) -> Option<u64> {
    if n < 4 || is_prime(n) {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }

    for _ in 0..RHO_RESTARTS {
        let c = rng.gen_range(1..n);
        let mut x = rng.gen_range(2..n);
        let mut y = x;

        // Floyd cycle detection on x -> x^2 + c mod n.
        loop {
            x = mod_mul(x, x, n).wrapping_add(c) % n;
            y = mod_mul(y, y, n).wrapping_add(c) % n;
            y = mod_mul(y, y, n).wrapping_add(c) % n;

            let diff = x.abs_diff(y);
            if diff == 0 {
                break; // degenerate cycle, re-seed
            }

            let g = gcd_u64(diff, n);
            if g > 1 && g < n {
                return Some(g);
            }
            if g == n {
                break;
            }
        }
    }

    None
}

/// Full factorization of `n` into (prime, multiplicity) pairs, ascending.
///
/// Trial division handles small factors; Pollard rho splits the rest.
/// Returns an empty list for `n <= 1`.
#[must_use]
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    for p in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
        if n == 1 {
            break;
        }
        let mut mult = 0;
        while n % p == 0 {
            n /= p;
            mult += 1;
        }
        if mult > 0 {
            factors.push((p, mult));
        }
    }

    if n > 1 {
        let mut rng = ChaCha8Rng::seed_from_u64(0x726f_6821);
        let mut stack = vec![n];
        let mut primes = Vec::new();

        while let Some(m) = stack.pop() {
            if is_prime(m) {
                primes.push(m);
            } else if let Some(d) = pollard_rho_factor(m, &mut rng) {
                stack.push(d);
                stack.push(m / d);
            } else {
                // Budget exhausted; record the cofactor rather than loop.
                primes.push(m);
            }
        }

        primes.sort_unstable();
        for p in primes {
            match factors.iter_mut().find(|(q, _)| *q == p) {
                Some((_, mult)) => *mult += 1,
                None => factors.push((p, 1)),
            }
        }
    }

    factors.sort_unstable_by_key(|&(p, _)| p);
    factors
}

/// Pollard's rho for discrete logarithms.
///
/// Finds `x` with `base^x = target (mod modulus)` where `base` generates a
/// subgroup of the given `order`. Returns `None` if no collision yields a
/// solvable congruence within the restart budget (in particular when no
/// logarithm exists).
pub fn pollard_rho_log<R: Rng + ?Sized>(
    base: u64,
    target: u64,
    modulus: u64,
    order: u64,
    rng: &mut R,
) -> Option<u64> {
    if target == 1 || base == target {
        return Some(if target == 1 { 0 } else { 1 });
    }

    for _ in 0..RHO_RESTARTS {
        let a0 = rng.gen_range(0..order);
        let b0 = rng.gen_range(0..order);
        let x0 = mod_mul(mod_pow(base, a0, modulus), mod_pow(target, b0, modulus), modulus);

        let step = |x: u64, a: u64, b: u64| -> (u64, u64, u64) {
            match x % 3 {
                0 => (mod_mul(x, x, modulus), mod_mul(a, 2, order), mod_mul(b, 2, order)),
                1 => (mod_mul(x, target, modulus), a, (b + 1) % order),
                _ => (mod_mul(x, base, modulus), (a + 1) % order, b),
            }
        };

        let (mut x, mut a, mut b) = (x0, a0, b0);
        let (mut x2, mut a2, mut b2) = step(x0, a0, b0);

        for _ in 0..4 * order.max(64) {
            (x, a, b) = step(x, a, b);
            (x2, a2, b2) = step(x2, a2, b2);
            (x2, a2, b2) = step(x2, a2, b2);

            if x == x2 {
                // base^a * target^b = base^a2 * target^b2
                // => (b - b2) * log = a2 - a (mod order)
                let db = (b + order - b2) % order;
                let da = (a2 + order - a) % order;
                if db == 0 {
                    break;
                }

                let g = gcd_u64(db, order);
                if da % g != 0 {
                    break;
                }

                let reduced_order = order / g;
                let inv = mod_inv(db / g, reduced_order)?;
                let base_sol = mod_mul(inv, (da / g) % reduced_order, reduced_order);

                for k in 0..g {
                    let candidate = base_sol + k * reduced_order;
                    if mod_pow(base, candidate, modulus) == target {
                        return Some(candidate);
                    }
                }
                break;
            }
        }
    }

    None
}
