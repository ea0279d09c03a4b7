//! Integer polynomial factorization: squarefree split, multi-prime modular
//! factorization, subset pruning, and Hensel lifting.

use rayon::prelude::*;

use quotient_arith::{next_prime, Integer};
use quotient_poly::{poly_gcd, reduce_mod, Polynomial};
use quotient_rings::{EuclideanDomain, PrimeField, Ring};

use crate::berlekamp::berlekamp_factor;
use crate::error::FactorError;
use crate::hensel::hensel_lift;
use crate::squarefree::squarefree_decompose;
use crate::subsets::HenselSubsets;

/// Primes fed into the subsets accumulator per squarefree part. More primes
/// prune harder but cost a Berlekamp run each.
const PRIME_BUDGET: usize = 3;

/// Candidate primes examined before giving up on the schedule. Only primes
/// dividing the leading coefficient or the discriminant are rejected, so
/// this is never reached for valid input.
const PRIME_SCAN_LIMIT: usize = 128;

/// Counters from one `hensel_factor` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HenselStats {
    /// Modular factorizations fed into the subset search.
    pub primes_used: usize,
    /// Candidate groupings handed to the lifter.
    pub lift_attempts: usize,
    /// Liftings that produced a true integer factor.
    pub factors_extracted: usize,
}

/// Factors an integer polynomial into content and irreducible factors with
/// multiplicities.
///
/// Factors carry positive leading coefficients; the sign and integer
/// content come back as a degree-0 factor when they are not 1. The product
/// of `factor^multiplicity` over the result reassembles the input.
///
/// # Errors
///
/// `ZeroPolynomial` for the zero polynomial; `PrimeBudgetExhausted` when no
/// usable prime is found (not reachable for valid inputs).
pub fn hensel_factor(
    p: &Polynomial<Integer>,
) -> Result<Vec<(Polynomial<Integer>, u32)>, FactorError> {
    hensel_factor_with_stats(p).map(|(factors, _)| factors)
}

/// `hensel_factor`, also reporting search statistics.
///
/// # Errors
///
/// As for [`hensel_factor`].
pub fn hensel_factor_with_stats(
    p: &Polynomial<Integer>,
) -> Result<(Vec<(Polynomial<Integer>, u32)>, HenselStats), FactorError> {
    let decomposition = squarefree_decompose(p)?;
    let mut stats = HenselStats::default();
    let mut out = Vec::new();

    if decomposition.content != Integer::new(1) {
        out.push((Polynomial::constant(decomposition.content), 1));
    }

    for (part, multiplicity) in &decomposition.parts {
        for factor in factor_squarefree(part, &mut stats)? {
            out.push((factor, *multiplicity));
        }
    }

    out.sort_by(|a, b| {
        a.0.degree()
            .cmp(&b.0.degree())
            .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
    });
    Ok((out, stats))
}

/// Factors many polynomials in parallel.
///
/// # Errors
///
/// The first error among the inputs.
pub fn hensel_factor_batch(
    polys: &[Polynomial<Integer>],
) -> Result<Vec<Vec<(Polynomial<Integer>, u32)>>, FactorError> {
    polys.par_iter().map(hensel_factor).collect()
}

/// Factors a primitive squarefree polynomial with positive leading
/// coefficient into irreducibles.
fn factor_squarefree(
    q: &Polynomial<Integer>,
    stats: &mut HenselStats,
) -> Result<Vec<Polynomial<Integer>>, FactorError> {
    let mut out = Vec::new();
    let mut remaining = q.clone();

    if remaining.degree() <= 1 {
        out.push(remaining);
        return Ok(out);
    }

    let mut subsets = HenselSubsets::new(remaining.degree());
    let mut prime = 1u64;
    let mut scanned = 0;

    while subsets.primes_used() < PRIME_BUDGET && scanned < PRIME_SCAN_LIMIT {
        prime = next_prime(prime);
        scanned += 1;

        let field = PrimeField::new(prime)?;
        let image = reduce_mod(&remaining, field);
        if image.degree() != remaining.degree() {
            continue; // prime divides the leading coefficient
        }
        let derivative = image.derivative();
        if Ring::is_zero(&derivative) {
            continue;
        }
        if poly_gcd(&image, &derivative)?.degree() != 0 {
            continue; // not squarefree mod this prime
        }

        let modular = berlekamp_factor(&image)?;
        if modular.factors.len() == 1 {
            // Irreducible mod one good prime means irreducible over Z.
            out.push(remaining);
            return Ok(out);
        }
        subsets.insert(prime, modular.factors);
        stats.primes_used += 1;
    }

    if subsets.primes_used() == 0 {
        return Err(FactorError::PrimeBudgetExhausted);
    }

    while let Some(option) = subsets.best_option() {
        stats.lift_attempts += 1;

        let field = PrimeField::new(option.prime)?;
        let image = reduce_mod(&remaining, field).monic();
        let (cofactor, residue) = image.div_rem(&option.product)?;
        if !Ring::is_zero(&residue) {
            continue;
        }

        if let Some(lift) = hensel_lift(&remaining, option.prime, &option.product, &cofactor)? {
            out.push(lift.u);
            remaining = lift.w;
            stats.factors_extracted += 1;
            subsets.commit(&option);
        }
    }

    if remaining.degree() >= 1 {
        out.push(remaining);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zpoly(coeffs: &[i64]) -> Polynomial<Integer> {
        Polynomial::new(coeffs.iter().map(|&c| Integer::new(c)).collect()).unwrap()
    }

    fn reassemble(factors: &[(Polynomial<Integer>, u32)]) -> Polynomial<Integer> {
        let mut acc = Polynomial::constant(Integer::new(1));
        for (f, m) in factors {
            acc = Ring::mul(&acc, &Ring::pow(f, u128::from(*m)));
        }
        acc
    }

    #[test]
    fn test_distinct_factors() {
        // (x + 1)(x + 2)(x^2 + x + 1)
        let p = Ring::mul(
            &Ring::mul(&zpoly(&[1, 1]), &zpoly(&[2, 1])),
            &zpoly(&[1, 1, 1]),
        );
        let factors = hensel_factor(&p).unwrap();

        assert_eq!(factors.len(), 3);
        assert!(factors.contains(&(zpoly(&[1, 1]), 1)));
        assert!(factors.contains(&(zpoly(&[2, 1]), 1)));
        assert!(factors.contains(&(zpoly(&[1, 1, 1]), 1)));
        assert_eq!(reassemble(&factors), p);
    }

    #[test]
    fn test_non_monic_factors() {
        // (2x + 3)(3x + 5) = 6x^2 + 19x + 15
        let p = Ring::mul(&zpoly(&[3, 2]), &zpoly(&[5, 3]));
        let factors = hensel_factor(&p).unwrap();

        assert_eq!(factors.len(), 2);
        assert!(factors.contains(&(zpoly(&[3, 2]), 1)));
        assert!(factors.contains(&(zpoly(&[5, 3]), 1)));
    }

    #[test]
    fn test_repeated_factors() {
        // (x + 1)^2 (x - 2)
        let p = Ring::mul(
            &Ring::pow(&zpoly(&[1, 1]), 2),
            &zpoly(&[-2, 1]),
        );
        let factors = hensel_factor(&p).unwrap();

        assert!(factors.contains(&(zpoly(&[1, 1]), 2)));
        assert!(factors.contains(&(zpoly(&[-2, 1]), 1)));
        assert_eq!(reassemble(&factors), p);
    }

    #[test]
    fn test_irreducible_quartic() {
        // x^4 + 1 splits mod every prime but is irreducible over Z; only
        // the degree-sum pruning (or exhausted lifts) can conclude that.
        let p = zpoly(&[1, 0, 0, 0, 1]);
        let (factors, stats) = hensel_factor_with_stats(&p).unwrap();

        assert_eq!(factors, vec![(p, 1)]);
        assert_eq!(stats.factors_extracted, 0);
        assert!(stats.primes_used >= 1);
    }

    #[test]
    fn test_content_and_sign() {
        // -6(x + 1)
        let p = Ring::mul(&zpoly(&[-6]), &zpoly(&[1, 1]));
        let factors = hensel_factor(&p).unwrap();

        assert_eq!(factors.len(), 2);
        assert_eq!(factors[0], (zpoly(&[-6]), 1));
        assert_eq!(factors[1], (zpoly(&[1, 1]), 1));
    }

    #[test]
    fn test_constant_and_zero() {
        assert_eq!(
            hensel_factor(&zpoly(&[7])).unwrap(),
            vec![(zpoly(&[7]), 1)]
        );
        assert!(hensel_factor(&zpoly(&[1])).unwrap().is_empty());
        assert_eq!(
            hensel_factor(&zpoly(&[0])).unwrap_err(),
            FactorError::ZeroPolynomial
        );
    }

    #[test]
    fn test_cyclotomic_like_product() {
        // (x^2 + 1)(x^2 + x + 1): both irreducible over Z.
        let p = Ring::mul(&zpoly(&[1, 0, 1]), &zpoly(&[1, 1, 1]));
        let factors = hensel_factor(&p).unwrap();

        assert_eq!(factors.len(), 2);
        assert!(factors.contains(&(zpoly(&[1, 0, 1]), 1)));
        assert!(factors.contains(&(zpoly(&[1, 1, 1]), 1)));
    }

    #[test]
    fn test_batch_matches_serial() {
        let inputs = vec![
            Ring::mul(&zpoly(&[1, 1]), &zpoly(&[2, 1])),
            zpoly(&[1, 0, 1]),
        ];
        let batch = hensel_factor_batch(&inputs).unwrap();
        for (input, result) in inputs.iter().zip(&batch) {
            assert_eq!(result, &hensel_factor(input).unwrap());
        }
    }
}
