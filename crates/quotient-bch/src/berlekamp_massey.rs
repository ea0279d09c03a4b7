//! Berlekamp–Massey: the shortest linear recurrence satisfying a sequence.

use quotient_poly::Polynomial;
use quotient_rings::{Field, Ring, RingError};

/// The shortest linear-feedback relation found for a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BerlekampMasseyResult<F: Field> {
    /// Connection polynomial C with C(0) = 1: the sequence satisfies
    /// `s[i] + C[1] s[i-1] + ... + C[L] s[i-L] = 0` for all i >= L. For
    /// syndrome input this is the error-locator polynomial, so the
    /// constant term is left at 1 rather than renormalized to monic.
    pub connection: Polynomial<F>,
    /// The recurrence length L.
    pub length: usize,
}

/// Runs Berlekamp–Massey over any field.
///
/// # Errors
///
/// `EmptyInput` when the sequence is empty.
pub fn berlekamp_massey<F: Field>(
    sequence: &[F],
) -> Result<BerlekampMasseyResult<F>, RingError> {
    let Some(probe) = sequence.first() else {
        return Err(RingError::EmptyInput);
    };
    let one = probe.one_like();

    let mut connection = Polynomial::constant(one.clone());
    let mut previous = connection.clone();
    let mut length = 0usize;
    // Shift since the last length change, and the discrepancy back then.
    let mut gap = 1usize;
    let mut last_discrepancy = one;

    for (i, s) in sequence.iter().enumerate() {
        let mut discrepancy = s.clone();
        for j in 1..=length {
            discrepancy = discrepancy.add(&connection.coeff(j).mul(&sequence[i - j]));
        }
        if Ring::is_zero(&discrepancy) {
            gap += 1;
            continue;
        }

        let inv = last_discrepancy
            .inv()
            .ok_or(RingError::DivisionByZero)?;
        let correction = previous.shifted(gap).scale(&discrepancy.mul(&inv));

        if 2 * length <= i {
            let stashed = connection.clone();
            connection = Ring::sub(&connection, &correction);
            length = i + 1 - length;
            previous = stashed;
            last_discrepancy = discrepancy;
            gap = 1;
        } else {
            connection = Ring::sub(&connection, &correction);
            gap += 1;
        }
    }

    Ok(BerlekampMasseyResult { connection, length })
}
