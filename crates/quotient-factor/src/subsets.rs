//! Cross-prime combinatorial search over modular factorizations.
//!
//! One prime's factorization of an integer polynomial may over-split a true
//! integer factor, so candidate factors are subsets of the mod-p factors.
//! Feeding several primes in narrows the search: a degree is only worth
//! trying if it is an achievable factor-degree sum under every prime.
//! Candidates are enumerated lazily in ascending degree, which guarantees
//! the first candidate that lifts is irreducible over the integers.

use quotient_poly::Polynomial;
use quotient_rings::{PrimeFieldElement, Ring};

/// One prime's modular factorization of the current polynomial.
#[derive(Debug, Clone)]
struct PrimeSet {
    prime: u64,
    factors: Vec<Polynomial<PrimeFieldElement>>,
}

/// A candidate grouping: a subset of one prime's factors whose product
/// might reduce from a true integer factor.
#[derive(Debug, Clone)]
pub struct SubsetOption {
    /// The prime whose factorization the subset came from.
    pub prime: u64,
    /// Product of the chosen factors, mod that prime.
    pub product: Polynomial<PrimeFieldElement>,
    /// Indices of the chosen factors, ascending.
    pub indices: Vec<usize>,
    /// Total degree of the candidate.
    pub degree: usize,
}

/// Accumulator over several primes' factorizations of one polynomial.
///
/// Single-owner and explicitly mutable: `insert` feeds a prime in,
/// `best_option` walks candidate subsets, `commit` removes an extracted
/// factor and restarts the search on the cofactor.
#[derive(Debug, Clone)]
pub struct HenselSubsets {
    total_degree: usize,
    half: usize,
    /// Intersection of achievable degree sums across all inserted primes.
    achievable: Vec<bool>,
    primes: Vec<PrimeSet>,
    /// Index of the prime with the fewest factors; subsets enumerate there.
    active: Option<usize>,
    // Backtracking state: chosen indices, running products (one per chosen
    // factor, reused incrementally), and the next index to try.
    target: usize,
    path: Vec<usize>,
    products: Vec<Polynomial<PrimeFieldElement>>,
    cursor: usize,
}

impl HenselSubsets {
    /// Creates an empty accumulator for a polynomial of the given degree.
    #[must_use]
    pub fn new(total_degree: usize) -> Self {
        let half = total_degree / 2;
        Self {
            total_degree,
            half,
            achievable: vec![true; half + 1],
            primes: Vec::new(),
            active: None,
            target: 1,
            path: Vec::new(),
            products: Vec::new(),
            cursor: 0,
        }
    }

    /// The degree of the polynomial the search currently covers.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.total_degree
    }

    /// How many primes have been fed in since the last commit.
    #[must_use]
    pub fn primes_used(&self) -> usize {
        self.primes.len()
    }

    /// Whether some subset of every prime's factors sums to `degree`.
    #[must_use]
    pub fn achievable(&self, degree: usize) -> bool {
        degree <= self.half && self.achievable[degree]
    }

    /// Feeds one prime's factorization in, intersecting its achievable
    /// degree sums with the accumulated set and restarting enumeration.
    pub fn insert(&mut self, prime: u64, factors: Vec<Polynomial<PrimeFieldElement>>) {
        let sums = degree_sums(&factors, self.half);
        if self.primes.is_empty() {
            self.achievable = sums;
        } else {
            for (acc, s) in self.achievable.iter_mut().zip(&sums) {
                *acc = *acc && *s;
            }
        }

        self.primes.push(PrimeSet { prime, factors });
        self.active = self
            .primes
            .iter()
            .enumerate()
            .min_by_key(|(_, set)| set.factors.len())
            .map(|(i, _)| i);
        self.reset_search();
    }

    /// The next candidate grouping, ascending by degree; `None` when the
    /// pruned search space is exhausted (the cofactor is irreducible).
    pub fn best_option(&mut self) -> Option<SubsetOption> {
        let active = self.active?;

        while self.target <= self.half {
            if !self.achievable[self.target] {
                self.advance_target();
                continue;
            }

            loop {
                if self.cursor >= self.primes[active].factors.len() {
                    // Backtrack a level; an empty path means this target is done.
                    match self.path.pop() {
                        None => break,
                        Some(i) => {
                            self.products.pop();
                            self.cursor = i + 1;
                        }
                    }
                    continue;
                }

                let chosen_degree = self.products.last().map_or(0, Polynomial::degree);
                let step = self.primes[active].factors[self.cursor].degree();
                if chosen_degree + step > self.target {
                    self.cursor += 1;
                    continue;
                }

                let factor = &self.primes[active].factors[self.cursor];
                let product = match self.products.last() {
                    Some(prev) => Ring::mul(prev, factor),
                    None => factor.clone(),
                };
                self.path.push(self.cursor);
                self.products.push(product);

                if chosen_degree + step == self.target {
                    let option = SubsetOption {
                        prime: self.primes[active].prime,
                        product: self.products[self.products.len() - 1].clone(),
                        indices: self.path.clone(),
                        degree: self.target,
                    };
                    // Leave the state one step back so the next call
                    // resumes after this subset.
                    if let Some(i) = self.path.pop() {
                        self.products.pop();
                        self.cursor = i + 1;
                    }
                    return Some(option);
                }

                self.cursor += 1;
            }

            self.advance_target();
        }

        None
    }

    /// Commits an extracted factor: its indices leave the active prime's
    /// pool, the other primes' stale factorizations are dropped, and the
    /// search restarts on the cofactor.
    pub fn commit(&mut self, option: &SubsetOption) {
        if let Some(active) = self.active {
            let set = self.primes.swap_remove(active);
            let factors: Vec<Polynomial<PrimeFieldElement>> = set
                .factors
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !option.indices.contains(i))
                .map(|(_, f)| f)
                .collect();

            self.total_degree = self.total_degree.saturating_sub(option.degree);
            self.half = self.total_degree / 2;
            self.achievable = degree_sums(&factors, self.half);
            self.primes = vec![PrimeSet {
                prime: set.prime,
                factors,
            }];
            self.active = Some(0);
        }
        self.reset_search();
    }

    fn reset_search(&mut self) {
        self.target = 1;
        self.path.clear();
        self.products.clear();
        self.cursor = 0;
    }

    fn advance_target(&mut self) {
        self.target += 1;
        self.path.clear();
        self.products.clear();
        self.cursor = 0;
    }
}

/// Achievable subset degree sums, capped at `half`; sums past the midpoint
/// are redundant because their cofactors mirror them.
fn degree_sums(factors: &[Polynomial<PrimeFieldElement>], half: usize) -> Vec<bool> {
    let mut can = vec![false; half + 1];
    can[0] = true;
    for f in factors {
        let d = f.degree();
        for s in (0..=half).rev() {
            if can[s] && s + d <= half {
                can[s + d] = true;
            }
        }
    }
    can
}
