//! Property-based tests for the ring traits and prime fields.

use proptest::prelude::*;
use quotient_arith::Integer;

use crate::euclid::{euclidean_gcd, extended_euclidean};
use crate::prime_field::PrimeField;
use crate::traits::{Field, Ring};

proptest! {
    #[test]
    fn prop_eea_bezout_identity(a in -5000i64..5000, b in -5000i64..5000) {
        prop_assume!(a != 0 || b != 0);
        let (a, b) = (Integer::new(a), Integer::new(b));
        let (g, s, t) = extended_euclidean(&a, &b).unwrap();

        prop_assert_eq!(s.mul(&a).add(&t.mul(&b)), g.clone());
        prop_assert!(!g.is_negative());
        prop_assert_eq!(g, a.gcd(&b));
    }

    #[test]
    fn prop_gcd_divides_both(a in -5000i64..5000, b in -5000i64..5000) {
        let (a, b) = (Integer::new(a), Integer::new(b));
        let g = euclidean_gcd(&a, &b).unwrap();
        if !Ring::is_zero(&g) {
            prop_assert!(Ring::is_zero(&(&a % &g)));
            prop_assert!(Ring::is_zero(&(&b % &g)));
        }
    }

    #[test]
    fn prop_field_axioms(a in 0i64..97, b in 0i64..97, c in 0i64..97) {
        let f = PrimeField::new(97).unwrap();
        let (a, b, c) = (f.element(a), f.element(b), f.element(c));

        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a + (-a), f.zero());
    }

    #[test]
    fn prop_field_inverse(a in 1i64..97) {
        let f = PrimeField::new(97).unwrap();
        let a = f.element(a);
        prop_assert_eq!(a * a.inv().unwrap(), f.one());
    }

    #[test]
    fn prop_pow_additive_in_exponent(a in 1i64..97, e1 in 0u128..50, e2 in 0u128..50) {
        let f = PrimeField::new(97).unwrap();
        let a = f.element(a);
        prop_assert_eq!(
            Ring::pow(&a, e1 + e2),
            Ring::pow(&a, e1) * Ring::pow(&a, e2)
        );
    }
}
