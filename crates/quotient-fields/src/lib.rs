//! # quotient-fields
//!
//! Extension fields `GF(p^m)` built as polynomial quotient rings over a
//! prime field, with irreducibility-checked construction, a deterministic
//! randomized modulus search, and multiplicative-group generators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extension;

#[cfg(test)]
mod proptests;

pub use extension::{ExtensionField, ExtensionFieldElement};
