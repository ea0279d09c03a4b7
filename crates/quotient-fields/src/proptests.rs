//! Property-based tests for extension field arithmetic.

use proptest::prelude::*;
use quotient_poly::Polynomial;
use quotient_rings::{Field, FiniteFieldElement, PrimeField, Ring};

use crate::extension::ExtensionField;

/// GF(25) = GF(5)[x] / (x^2 + 2).
fn gf25() -> ExtensionField {
    let f = PrimeField::new(5).unwrap();
    let modulus = Polynomial::new(vec![f.element(2), f.element(0), f.element(1)]).unwrap();
    ExtensionField::new(modulus).unwrap()
}

proptest! {
    #[test]
    fn prop_field_axioms(i in 0u64..25, j in 0u64..25, k in 0u64..25) {
        let field = gf25();
        let probe = field.zero();
        let (a, b, c) = (probe.from_index(i), probe.from_index(j), probe.from_index(k));

        prop_assert_eq!(Ring::add(&a, &b), Ring::add(&b, &a));
        prop_assert_eq!(Ring::mul(&a, &b), Ring::mul(&b, &a));
        prop_assert_eq!(
            Ring::mul(&a, &Ring::add(&b, &c)),
            Ring::add(&Ring::mul(&a, &b), &Ring::mul(&a, &c))
        );
        prop_assert_eq!(Ring::add(&a, &Ring::neg(&a)), field.zero());
    }

    #[test]
    fn prop_inverse_round_trip(i in 1u64..25) {
        let field = gf25();
        let a = field.zero().from_index(i);
        let inv = a.inv().unwrap();
        prop_assert!(Ring::mul(&a, &inv).is_one());
    }

    #[test]
    fn prop_multiplicative_order_divides_group_order(i in 1u64..25) {
        let field = gf25();
        let a = field.zero().from_index(i);
        prop_assert!(Ring::pow(&a, 24).is_one());
    }

    #[test]
    fn prop_frobenius_is_additive(i in 0u64..25, j in 0u64..25) {
        let field = gf25();
        let probe = field.zero();
        let (a, b) = (probe.from_index(i), probe.from_index(j));

        // (a + b)^5 = a^5 + b^5 in characteristic 5.
        prop_assert_eq!(
            Ring::pow(&Ring::add(&a, &b), 5),
            Ring::add(&Ring::pow(&a, 5), &Ring::pow(&b, 5))
        );
    }
}
