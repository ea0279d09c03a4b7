//! # Quotient
//!
//! Exact computer algebra over finite fields and polynomial rings.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary-precision integers, modular
//!   exponentiation, Miller–Rabin, Pollard's rho, Garner CRT
//! - **Algebraic tower**: prime fields, extension fields from irreducible
//!   moduli, dense polynomials over any ring
//! - **Factorization**: Berlekamp's kernel method and distinct-degree
//!   splitting over finite fields, Hensel lifting with multi-prime subset
//!   search over the integers
//! - **Coding**: BCH construction, encoding, and syndrome decoding
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quotient::prelude::*;
//!
//! let field = PrimeField::new(5)?;
//! let p = Polynomial::new(vec![field.element(-1), field.element(0), field.element(1)])?;
//! let factors = berlekamp_factor(&p)?.factors;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_arith as arith;
pub use quotient_bch as bch;
pub use quotient_factor as factor;
pub use quotient_fields as fields;
pub use quotient_poly as poly;
pub use quotient_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_arith::{integer_crt, is_prime, pollard_rho_factor, Integer};
    pub use quotient_bch::{berlekamp_massey, BchCode, BchError};
    pub use quotient_factor::{
        berlekamp_factor, distinct_degree_factor, hensel_factor, FactorError,
    };
    pub use quotient_fields::{ExtensionField, ExtensionFieldElement};
    pub use quotient_poly::{is_irreducible, modular_gcd, Polynomial};
    pub use quotient_rings::{
        EuclideanDomain, Field, FiniteFieldElement, PrimeField, PrimeFieldElement, Ring,
        RingError,
    };
}
