//! # quotient-bch
//!
//! BCH error-correcting codes over finite fields: generator construction
//! from a primitive polynomial, polynomial encoding, and syndrome decoding
//! via Berlekamp–Massey, exhaustive root search, and a linear magnitude
//! solve.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod berlekamp_massey;
pub mod code;
pub mod error;
pub mod linsolve;

#[cfg(test)]
mod proptests;

pub use berlekamp_massey::{berlekamp_massey, BerlekampMasseyResult};
pub use code::BchCode;
pub use error::BchError;
pub use linsolve::solve_square_system;
