//! Errors for ring and field construction and arithmetic.

use thiserror::Error;

/// Errors raised by ring constructors and fallible ring operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A prime field was requested with a composite or unit modulus.
    #[error("{0} is not prime")]
    NotPrime(u64),

    /// An extension field was requested over a reducible modulus polynomial.
    #[error("the modulus polynomial is not irreducible")]
    NotIrreducible,

    /// Two elements from different domains met in one operation.
    #[error("incompatible domains: {left} vs {right}")]
    IncompatibleDomain {
        /// Domain of the left operand.
        left: String,
        /// Domain of the right operand.
        right: String,
    },

    /// Division by the zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// No Bezout witness exists: extended gcd of two zeros.
    #[error("extended gcd of (0, 0) is undefined")]
    DivisionUndefined,

    /// A construction needed at least one element and got none.
    #[error("empty input")]
    EmptyInput,
}
