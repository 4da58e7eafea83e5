//! Crate-wide error types.

use thiserror::Error;

use crate::hexstr::HexInvalidReason;
use crate::ser::{RangeError, SerError};

/// Input rejected at construction time.
///
/// The caller should drop the offending input; retrying with the same bytes
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fixed-length key material of the wrong size.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Name of the value being constructed.
        what: &'static str,
        /// Length required by the algorithm.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// Malformed hex string.
    #[error("invalid hex: {reason}")]
    InvalidHex {
        /// What was wrong with the string.
        reason: HexInvalidReason,
    },
    /// Scheme index with no matching variant.
    #[error("unknown {what} scheme index {index}")]
    UnknownScheme {
        /// Family the index was read for.
        what: &'static str,
        /// Offending index.
        index: u32,
    },
}

impl ValidationError {
    /// Wrong-size key material for `what`.
    pub fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        ValidationError::InvalidLength {
            what,
            expected,
            actual,
        }
    }

    /// Malformed hex text.
    pub fn invalid_hex(reason: HexInvalidReason) -> Self {
        ValidationError::InvalidHex { reason }
    }
}

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input was well formed but not acceptable.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Wire bytes were truncated or malformed.
    #[error(transparent)]
    Deserialization(#[from] SerError),
    /// A value did not fit its declared integer width.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
