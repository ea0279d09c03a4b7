//! # quotient-arith
//!
//! Exact-arithmetic primitives underlying the quotient algebra stack:
//! - Arbitrary precision integers (`Integer`, wrapping `dashu`)
//! - Modular u64 arithmetic (`mod_mul`, `mod_pow`, `mod_inv`)
//! - Miller-Rabin primality testing with explicit randomness
//! - Pollard's rho factorization and discrete logarithms
//! - Integer Chinese remaindering (Garner)
//!
//! Everything randomized takes a seedable `rand::Rng`, so runs are
//! reproducible under test.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crt;
pub mod error;
pub mod integer;
pub mod pollard;
pub mod pow;
pub mod primality;

#[cfg(test)]
mod proptests;

pub use crt::integer_crt;
pub use error::ArithError;
pub use integer::Integer;
pub use pollard::{factorize, pollard_rho_factor, pollard_rho_log};
pub use pow::{gcd_u64, mod_inv, mod_mul, mod_pow};
pub use primality::{is_prime, miller_rabin, next_prime, DEFAULT_ROUNDS};
