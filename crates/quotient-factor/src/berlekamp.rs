//! Berlekamp's kernel method for factoring square-free polynomials over
//! finite fields.
//!
//! The Frobenius map v -> v^q is linear over GF(q); its fixed space modulo f
//! has dimension equal to the number of irreducible factors of f. Each basis
//! vector v of that space splits the factor pool through gcds with v - s for
//! field constants s, and the splitting is exhaustive: every pool entry ends
//! up irreducible once the pool size reaches the kernel dimension.

use rayon::prelude::*;

use quotient_poly::{poly_gcd, Polynomial};
use quotient_rings::{EuclideanDomain, FiniteFieldElement, Ring};

use crate::error::FactorError;

/// Outcome of a Berlekamp factorization.
#[derive(Debug, Clone)]
pub struct BerlekampResult<F: FiniteFieldElement> {
    /// Monic irreducible factors, ascending by degree.
    pub factors: Vec<Polynomial<F>>,
    /// Dimension of the Frobenius fixed space; the number of factors.
    pub nullity: usize,
    /// Number of gcds computed during splitting.
    pub gcd_count: usize,
}

/// Builds the n x n matrix whose row i is the coefficient vector of
/// `x^(iq) mod f`. Each row comes from the previous by q multiply-by-x
/// reduction steps, each O(n).
fn form_frobenius_matrix<F: FiniteFieldElement>(f: &Polynomial<F>) -> Vec<Vec<F>> {
    let n = f.degree();
    let q = f.leading_coefficient().order();
    let zero = f.leading_coefficient().zero_like();
    let one = f.leading_coefficient().one_like();

    // f is monic here, so reduction subtracts c * (f - x^n).
    let mut row = vec![zero.clone(); n];
    row[0] = one;
    let mut matrix = Vec::with_capacity(n);

    for _ in 0..n {
        matrix.push(row.clone());
        for _ in 0..q {
            let carry = row[n - 1].clone();
            for i in (1..n).rev() {
                row[i] = row[i - 1].sub(&carry.mul(&f.coeff(i)));
            }
            row[0] = zero.sub(&carry.mul(&f.coeff(0)));
        }
    }

    matrix
}

/// Null space of `matrix - identity`, transposed so the kernel vectors are
/// the Frobenius-fixed polynomials.
fn kernel_basis<F: FiniteFieldElement>(matrix: &[Vec<F>]) -> Vec<Vec<F>> {
    let n = matrix.len();
    let probe = &matrix[0][0];
    let zero = probe.zero_like();
    let one = probe.one_like();

    // a = (matrix - I)^T; kernel vectors v satisfy v * (matrix - I) = 0.
    let mut a: Vec<Vec<F>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        matrix[j][i].sub(&one)
                    } else {
                        matrix[j][i].clone()
                    }
                })
                .collect()
        })
        .collect();

    let mut pivot_of_col: Vec<Option<usize>> = vec![None; n];
    let mut rank = 0;

    for col in 0..n {
        let Some(pivot_row) = (rank..n).find(|&r| !a[r][col].is_zero()) else {
            continue;
        };
        a.swap(rank, pivot_row);

        let Some(inv) = a[rank][col].inv() else {
            continue;
        };
        for j in 0..n {
            a[rank][j] = a[rank][j].mul(&inv);
        }
        for r in 0..n {
            if r != rank && !a[r][col].is_zero() {
                let factor = a[r][col].clone();
                for j in 0..n {
                    a[r][j] = a[r][j].sub(&factor.mul(&a[rank][j]));
                }
            }
        }
        pivot_of_col[col] = Some(rank);
        rank += 1;
    }

    let mut basis = Vec::with_capacity(n - rank);
    for (free_col, pivot) in pivot_of_col.iter().enumerate() {
        if pivot.is_some() {
            continue;
        }
        let mut v = vec![zero.clone(); n];
        v[free_col] = one.clone();
        for (col, pivot) in pivot_of_col.iter().enumerate() {
            if let Some(row) = pivot {
                v[col] = a[*row][free_col].neg();
            }
        }
        basis.push(v);
    }

    basis
}

/// Factors a square-free polynomial over its finite coefficient field into
/// monic irreducible factors.
///
/// The splitting sweep is deterministic: every kernel basis vector is tried
/// against every pool entry for every field constant, so no randomness
/// source is needed. The trivial constant kernel vector is kept; its sweep
/// contributes no splits and costs one gcd per pool entry.
///
/// # Errors
///
/// `ZeroPolynomial` when `f` is zero. Constants factor into nothing.
pub fn berlekamp_factor<F: FiniteFieldElement>(
    f: &Polynomial<F>,
) -> Result<BerlekampResult<F>, FactorError> {
    if Ring::is_zero(f) {
        return Err(FactorError::ZeroPolynomial);
    }
    if f.degree() == 0 {
        return Ok(BerlekampResult {
            factors: Vec::new(),
            nullity: 0,
            gcd_count: 0,
        });
    }

    let f = f.monic();
    if f.degree() == 1 {
        return Ok(BerlekampResult {
            factors: vec![f],
            nullity: 1,
            gcd_count: 0,
        });
    }

    let matrix = form_frobenius_matrix(&f);
    let basis = kernel_basis(&matrix);
    let nullity = basis.len();
    let probe = f.leading_coefficient().clone();
    let q = probe.order();

    let mut pool = vec![f];
    let mut gcd_count = 0;

    for v in &basis {
        if pool.len() >= nullity {
            break;
        }
        let v_poly = Polynomial::new(v.clone())?;

        let mut next_pool = Vec::with_capacity(pool.len());
        for g in pool {
            if g.degree() <= 1 {
                next_pool.push(g);
                continue;
            }

            let mut remaining = g;
            for s_index in 0..q {
                if remaining.degree() == 0 {
                    break;
                }
                let s = probe.from_index(s_index);
                let shifted = Ring::sub(&v_poly, &Polynomial::constant(s));
                let h = poly_gcd(&shifted, &remaining)?;
                gcd_count += 1;

                if h.degree() >= 1 {
                    let (quotient, _) = remaining.div_rem(&h)?;
                    next_pool.push(h);
                    remaining = quotient;
                }
            }
            if remaining.degree() >= 1 {
                next_pool.push(remaining);
            }
        }
        pool = next_pool;
    }

    pool.sort_by(|a, b| a.degree().cmp(&b.degree()).then_with(|| {
        a.to_string().cmp(&b.to_string())
    }));

    Ok(BerlekampResult {
        factors: pool,
        nullity,
        gcd_count,
    })
}

/// Factors several polynomials in parallel.
///
/// # Errors
///
/// The first `ZeroPolynomial` among the inputs.
pub fn berlekamp_factor_batch<F>(
    polys: &[Polynomial<F>],
) -> Result<Vec<BerlekampResult<F>>, FactorError>
where
    F: FiniteFieldElement + Send + Sync,
{
    polys.par_iter().map(berlekamp_factor).collect()
}
