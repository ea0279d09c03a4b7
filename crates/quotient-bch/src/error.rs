//! Errors for BCH code construction and use.

use quotient_rings::RingError;
use thiserror::Error;

/// Errors raised by `BchCode` and its helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BchError {
    /// An underlying ring or field operation failed.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// The code parameters are inconsistent; the reason names the failed
    /// constraint. All validation happens in the constructor.
    #[error("bad code parameters: {0}")]
    BadInitialization(String),

    /// The message has more symbols than the code dimension.
    #[error("message does not fit in {dimension} symbols")]
    MessageTooLong {
        /// The code dimension k.
        dimension: usize,
    },

    /// The received word carries more errors than the correction radius,
    /// or its degree reaches the code length.
    #[error("error weight exceeds the correction radius")]
    TooManyErrors,

    /// The word is not a multiple of the generator polynomial.
    #[error("word is not a codeword")]
    NotACodeword,
}
