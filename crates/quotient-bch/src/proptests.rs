//! Property-based tests for the BCH pipeline.

use proptest::prelude::*;
use quotient_poly::Polynomial;
use quotient_rings::{PrimeField, PrimeFieldElement, Ring};

use crate::berlekamp_massey::berlekamp_massey;
use crate::code::BchCode;

fn gf2_poly(coeffs: &[i64]) -> Polynomial<PrimeFieldElement> {
    let f = PrimeField::new(2).unwrap();
    Polynomial::new(coeffs.iter().map(|&c| f.element(c)).collect()).unwrap()
}

fn bch15() -> BchCode {
    BchCode::new(gf2_poly(&[1, 1, 0, 0, 1]), 1, 15, 1, 5).unwrap()
}

fn message_bits() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..2, 1..=6)
}

fn error_positions() -> impl Strategy<Value = Vec<usize>> {
    prop::sample::subsequence((0..15usize).collect::<Vec<_>>(), 0..=2)
}

proptest! {
    #[test]
    fn prop_bch_round_trip(bits in message_bits(), positions in error_positions()) {
        let code = bch15();
        let message = gf2_poly(&bits);
        let codeword = code.encode(&message).unwrap();

        let mut error_bits = vec![0i64; 15];
        for &pos in &positions {
            error_bits[pos] = 1;
        }
        let error = code.embed(&gf2_poly(&error_bits)).unwrap();
        let received = Ring::add(&codeword, &error);

        let decoded = code.decode(&received).unwrap();
        prop_assert_eq!(&decoded, &codeword);
        prop_assert_eq!(code.unencode(&decoded).unwrap(), message);
    }

    #[test]
    fn prop_berlekamp_massey_recurrence(
        init in prop::collection::vec(0i64..11, 3),
        taps in prop::collection::vec(0i64..11, 3),
        extra in 4usize..10,
    ) {
        let f = PrimeField::new(11).unwrap();
        let mut values = init;
        for i in values.len()..values.len() + extra {
            let next: i64 = (1..=taps.len())
                .map(|j| taps[j - 1] * values[i - j])
                .sum();
            values.push(next.rem_euclid(11));
        }
        let s: Vec<PrimeFieldElement> = values.iter().map(|&v| f.element(v)).collect();

        let result = berlekamp_massey(&s).unwrap();
        prop_assert!(result.length <= 3);
        prop_assert!(result.connection.coeff(0).is_one());

        // The recovered relation regenerates the tail of the sequence.
        for i in result.length..s.len() {
            let mut acc = s[i];
            for j in 1..=result.connection.degree() {
                acc = Ring::add(&acc, &Ring::mul(&result.connection.coeff(j), &s[i - j]));
            }
            prop_assert!(Ring::is_zero(&acc));
        }
    }
}
