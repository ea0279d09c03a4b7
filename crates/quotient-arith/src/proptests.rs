//! Property-based tests for the arithmetic primitives.

use proptest::prelude::*;

use crate::integer::Integer;
use crate::pow::{gcd_u64, mod_inv, mod_mul, mod_pow};
use crate::primality::is_prime;
use crate::{factorize, integer_crt};

fn trial_division_is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

proptest! {
    #[test]
    fn prop_mod_pow_matches_naive(base in 0u64..1000, exp in 0u64..20, m in 2u64..1000) {
        let mut naive = 1u64;
        for _ in 0..exp {
            naive = mod_mul(naive, base % m, m);
        }
        prop_assert_eq!(mod_pow(base, exp, m), naive);
    }

    #[test]
    fn prop_mod_pow_fermat(a in 1u64..101, e in 0u64..10_000) {
        // a^e = a^(e mod 100) mod 101 since 101 is prime.
        prop_assert_eq!(mod_pow(a, e, 101), mod_pow(a, e % 100, 101));
    }

    #[test]
    fn prop_mod_inv_inverts(a in 1u64..10_000, m in 2u64..10_000) {
        if let Some(inv) = mod_inv(a, m) {
            prop_assert_eq!(mod_mul(a % m, inv, m), 1);
        } else {
            prop_assert!(gcd_u64(a, m) != 1);
        }
    }

    #[test]
    fn prop_miller_rabin_matches_trial_division(n in 0u64..10_000) {
        prop_assert_eq!(is_prime(n), trial_division_is_prime(n));
    }

    #[test]
    fn prop_factorize_reassembles(n in 2u64..100_000) {
        let factors = factorize(n);
        let mut product = 1u64;
        for (p, mult) in &factors {
            prop_assert!(is_prime(*p));
            product *= p.pow(*mult);
        }
        prop_assert_eq!(product, n);
    }

    #[test]
    fn prop_integer_gcd_divides_both(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let g = Integer::new(a).gcd(&Integer::new(b));
        prop_assert!(!g.is_negative());
        if a != 0 || b != 0 {
            let g = g.to_i64().unwrap();
            prop_assert!(g > 0);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }

    #[test]
    fn prop_crt_round_trip(r1 in -100i64..100, r2 in -100i64..100, r3 in -100i64..100) {
        let moduli = [Integer::new(101), Integer::new(103), Integer::new(107)];
        let residues = [Integer::new(r1), Integer::new(r2), Integer::new(r3)];
        let u = integer_crt(&moduli, &residues).unwrap();

        for (m, r) in moduli.iter().zip(&residues) {
            prop_assert_eq!(u.rem_euclid(m), r.rem_euclid(m));
        }

        // Symmetric representative stays inside (-M/2, M/2].
        let half = Integer::new(101 * 103 * 107 / 2);
        prop_assert!(u.clone() <= half);
        prop_assert!(-u > -half - Integer::new(1));
    }
}
