//! Property-based tests for the factorization algorithms.

use proptest::prelude::*;
use quotient_arith::Integer;
use quotient_poly::Polynomial;
use quotient_rings::{PrimeField, PrimeFieldElement, Ring};

use crate::berlekamp::berlekamp_factor;
use crate::distinct_degree::distinct_degree_factor;
use crate::squarefree::squarefree_decompose;
use crate::zassenhaus::hensel_factor;

fn fpoly(prime: u64, coeffs: &[i64]) -> Polynomial<PrimeFieldElement> {
    let field = PrimeField::new(prime).unwrap();
    Polynomial::new(coeffs.iter().map(|&c| field.element(c)).collect()).unwrap()
}

fn zpoly(coeffs: &[i64]) -> Polynomial<Integer> {
    Polynomial::new(coeffs.iter().map(|&c| Integer::new(c)).collect()).unwrap()
}

fn coeff_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-10i64..10, 1..5)
}

fn small_prime() -> impl Strategy<Value = u64> {
    prop::sample::select(vec![2u64, 3, 5, 7])
}

proptest! {
    #[test]
    fn prop_berlekamp_factors_multiply_back(prime in small_prime(), c in coeff_vec()) {
        let p = fpoly(prime, &c);
        prop_assume!(p.degree() >= 1);

        let result = berlekamp_factor(&p).unwrap();
        prop_assert_eq!(result.factors.len(), result.nullity);

        let mut acc = p.one_like();
        for f in &result.factors {
            prop_assert!(f.leading_coefficient().is_one());
            acc = Ring::mul(&acc, f);
        }
        prop_assert_eq!(acc, p.monic());
    }

    #[test]
    fn prop_distinct_degree_partitions(prime in small_prime(), c in coeff_vec()) {
        let p = fpoly(prime, &c);
        prop_assume!(p.degree() >= 1);
        // The chain needs square-free input; filter through Berlekamp's
        // nullity check instead of deriving, to keep the strategy simple.
        let factors = berlekamp_factor(&p).unwrap().factors;
        let mut squarefree = p.one_like();
        let mut seen: Vec<Polynomial<PrimeFieldElement>> = Vec::new();
        for f in factors {
            if !seen.contains(&f) {
                squarefree = Ring::mul(&squarefree, &f);
                seen.push(f);
            }
        }
        prop_assume!(squarefree.degree() >= 1);

        let parts = distinct_degree_factor(&squarefree).unwrap();
        let mut acc = squarefree.one_like();
        let mut last_degree = 0;
        for (part, degree) in &parts {
            prop_assert!(*degree > last_degree);
            prop_assert_eq!(part.degree() % degree, 0);
            last_degree = *degree;
            acc = Ring::mul(&acc, part);
        }
        prop_assert_eq!(acc, squarefree);
    }

    #[test]
    fn prop_squarefree_reassembles(c in coeff_vec(), m in 1u32..4) {
        let base = zpoly(&c);
        prop_assume!(!Ring::is_zero(&base));
        let p = Ring::pow(&base, u128::from(m));

        let d = squarefree_decompose(&p).unwrap();
        let mut acc = Polynomial::constant(d.content.clone());
        for (part, mult) in &d.parts {
            prop_assert!(!part.leading_coefficient().is_negative());
            acc = Ring::mul(&acc, &Ring::pow(part, u128::from(*mult)));
        }
        prop_assert_eq!(acc, p);
    }

    #[test]
    fn prop_hensel_factor_reassembles(a in coeff_vec(), b in coeff_vec()) {
        let p = Ring::mul(&zpoly(&a), &zpoly(&b));
        prop_assume!(!Ring::is_zero(&p));

        let factors = hensel_factor(&p).unwrap();
        let mut acc = Polynomial::constant(Integer::new(1));
        for (f, m) in &factors {
            acc = Ring::mul(&acc, &Ring::pow(f, u128::from(*m)));
        }
        prop_assert_eq!(acc, p);
    }
}
