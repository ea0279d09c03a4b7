//! # quotient-factor
//!
//! Polynomial factorization: Berlekamp's kernel method and distinct-degree
//! splitting over finite fields, square-free decomposition, and Hensel
//! lifting with a multi-prime combinatorial search for integer polynomials.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod berlekamp;
pub mod distinct_degree;
pub mod error;
pub mod hensel;
pub mod squarefree;
pub mod subsets;
pub mod zassenhaus;

#[cfg(test)]
mod proptests;

pub use berlekamp::{berlekamp_factor, berlekamp_factor_batch, BerlekampResult};
pub use distinct_degree::distinct_degree_factor;
pub use error::FactorError;
pub use hensel::{hensel_lift, HenselLift};
pub use squarefree::{squarefree_decompose, SquarefreeFactorization};
pub use subsets::{HenselSubsets, SubsetOption};
pub use zassenhaus::{
    hensel_factor, hensel_factor_batch, hensel_factor_with_stats, HenselStats,
};
