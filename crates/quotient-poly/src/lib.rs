//! # quotient-poly
//!
//! Dense univariate polynomials over any `Ring`, with Euclidean division
//! over fields, gcd machinery, irreducibility testing over finite fields,
//! and a modular gcd for integer polynomials.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::{
    content, is_irreducible, lift_symmetric, modular_gcd, poly_eea, poly_gcd, pow_mod,
    primitive_part, reduce_mod, try_div_exact,
};
pub use dense::Polynomial;
