//! Polynomial algorithms: gcds, modular exponentiation, irreducibility
//! testing, and the modular integer-polynomial gcd.

pub mod gcd;
pub mod irreducible;
pub mod modular_gcd;

pub use gcd::{content, poly_eea, poly_gcd, pow_mod, primitive_part, try_div_exact};
pub use irreducible::is_irreducible;
pub use modular_gcd::{lift_symmetric, modular_gcd, reduce_mod};
