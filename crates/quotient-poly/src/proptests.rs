//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;
use quotient_arith::Integer;
use quotient_rings::{EuclideanDomain, PrimeField, PrimeFieldElement, Ring};

use crate::algorithms::{modular_gcd, poly_gcd, try_div_exact};
use crate::dense::Polynomial;

fn fpoly(coeffs: &[i64]) -> Polynomial<PrimeFieldElement> {
    let field = PrimeField::new(13).unwrap();
    Polynomial::new(coeffs.iter().map(|&c| field.element(c)).collect()).unwrap()
}

fn zpoly(coeffs: &[i64]) -> Polynomial<Integer> {
    Polynomial::new(coeffs.iter().map(|&c| Integer::new(c)).collect()).unwrap()
}

fn coeff_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 1..6)
}

proptest! {
    #[test]
    fn prop_ring_laws(a in coeff_vec(), b in coeff_vec(), c in coeff_vec()) {
        let (a, b, c) = (fpoly(&a), fpoly(&b), fpoly(&c));

        prop_assert_eq!(Ring::add(&a, &b), Ring::add(&b, &a));
        prop_assert_eq!(Ring::mul(&a, &b), Ring::mul(&b, &a));
        prop_assert_eq!(
            Ring::mul(&a, &Ring::add(&b, &c)),
            Ring::add(&Ring::mul(&a, &b), &Ring::mul(&a, &c))
        );
    }

    #[test]
    fn prop_division_invariant(a in coeff_vec(), b in coeff_vec()) {
        let (a, b) = (fpoly(&a), fpoly(&b));
        prop_assume!(!Ring::is_zero(&b));

        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(Ring::add(&Ring::mul(&q, &b), &r), a);
        prop_assert!(Ring::is_zero(&r) || r.degree() < b.degree());
    }

    #[test]
    fn prop_gcd_divides_both(a in coeff_vec(), b in coeff_vec()) {
        let (a, b) = (fpoly(&a), fpoly(&b));
        let g = poly_gcd(&a, &b).unwrap();
        prop_assume!(!Ring::is_zero(&g));

        let (_, r) = a.div_rem(&g).unwrap();
        prop_assert!(Ring::is_zero(&r));
        let (_, r) = b.div_rem(&g).unwrap();
        prop_assert!(Ring::is_zero(&r));
        prop_assert!(g.leading_coefficient().is_one());
    }

    #[test]
    fn prop_eval_is_homomorphism(a in coeff_vec(), b in coeff_vec(), x in -12i64..13) {
        let field = PrimeField::new(13).unwrap();
        let x = field.element(x);
        let (a, b) = (fpoly(&a), fpoly(&b));

        prop_assert_eq!(Ring::mul(&a, &b).eval(&x), a.eval(&x).mul(&b.eval(&x)));
        prop_assert_eq!(Ring::add(&a, &b).eval(&x), a.eval(&x).add(&b.eval(&x)));
    }

    #[test]
    fn prop_modular_gcd_divides(a in coeff_vec(), b in coeff_vec(), g in coeff_vec()) {
        let g = zpoly(&g);
        prop_assume!(!Ring::is_zero(&g));
        let a = Ring::mul(&zpoly(&a), &g);
        let b = Ring::mul(&zpoly(&b), &g);
        prop_assume!(!Ring::is_zero(&a) || !Ring::is_zero(&b));

        let d = modular_gcd(&a, &b).unwrap();
        // The planted factor divides the gcd, and the gcd divides both.
        prop_assert!(try_div_exact(&a, &d).is_some());
        prop_assert!(try_div_exact(&b, &d).is_some());
        prop_assert!(!d.leading_coefficient().is_negative());
    }
}
