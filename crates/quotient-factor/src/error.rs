//! Errors for the factorization algorithms.

use quotient_rings::RingError;
use thiserror::Error;

/// Errors raised by the factorization entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorError {
    /// An underlying ring or field operation failed.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// The zero polynomial has no factorization.
    #[error("cannot factor the zero polynomial")]
    ZeroPolynomial,

    /// The prime schedule ran out before a usable prime was found.
    #[error("prime schedule exhausted without a usable prime")]
    PrimeBudgetExhausted,
}
