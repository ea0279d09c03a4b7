//! Dense Gaussian elimination over any field.

use quotient_rings::Field;

/// Solves the square system `matrix * x = rhs` by Gauss–Jordan elimination
/// with first-nonzero pivoting. Returns `None` when the matrix is singular
/// or the dimensions disagree; the empty system solves trivially.
#[must_use]
pub fn solve_square_system<F: Field>(matrix: &[Vec<F>], rhs: &[F]) -> Option<Vec<F>> {
    let n = matrix.len();
    if rhs.len() != n || matrix.iter().any(|row| row.len() != n) {
        return None;
    }
    if n == 0 {
        return Some(Vec::new());
    }

    let mut a: Vec<Vec<F>> = matrix
        .iter()
        .zip(rhs)
        .map(|(row, b)| {
            let mut augmented = row.clone();
            augmented.push(b.clone());
            augmented
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n).find(|&r| !a[r][col].is_zero())?;
        a.swap(col, pivot_row);

        let inv = a[col][col].inv()?;
        for j in col..=n {
            a[col][j] = a[col][j].mul(&inv);
        }
        for r in 0..n {
            if r != col && !a[r][col].is_zero() {
                let factor = a[r][col].clone();
                for j in col..=n {
                    a[r][j] = a[r][j].sub(&factor.mul(&a[col][j]));
                }
            }
        }
    }

    Some(a.into_iter().map(|row| row[n].clone()).collect())
}
