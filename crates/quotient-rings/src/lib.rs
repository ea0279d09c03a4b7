//! # quotient-rings
//!
//! The algebraic tower's trait layer: `Ring`, `EuclideanDomain`, `Field`,
//! and `FiniteFieldElement`, together with the extended Euclidean algorithm
//! and prime fields `GF(p)`.
//!
//! Elements are value types that carry their domain, so the same generic
//! code runs over `GF(p)`, extension fields, and polynomial rings without
//! const-generic moduli.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod euclid;
pub mod prime_field;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::RingError;
pub use euclid::{euclidean_gcd, extended_euclidean};
pub use prime_field::{PrimeField, PrimeFieldElement};
pub use traits::{EuclideanDomain, Field, FiniteFieldElement, Ring};
