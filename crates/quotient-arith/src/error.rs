//! Error types for the arithmetic primitives.

use thiserror::Error;

/// Failures of the exact-arithmetic primitives.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Division by zero in a Euclidean domain.
    #[error("division by zero")]
    DivisionByZero,

    /// The extended Euclidean algorithm has no Bezout witness for (0, 0).
    #[error("extended gcd of (0, 0) is undefined")]
    DivisionUndefined,

    /// CRT input slices have different lengths (or are empty).
    #[error("CRT expects equally many moduli and residues, got {moduli} and {residues}")]
    LengthMismatch {
        /// Number of moduli supplied.
        moduli: usize,
        /// Number of residues supplied.
        residues: usize,
    },

    /// CRT moduli are not pairwise coprime.
    #[error("CRT moduli {0} and {1} are not coprime")]
    NotCoprime(String, String),
}
