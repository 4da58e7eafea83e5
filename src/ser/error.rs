use core::fmt;
use thiserror::Error;

use super::ints::IntWidth;

/// Context markers used when reporting serialization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerKind {
    /// Fixed-width integers and booleans.
    Primitive,
    /// Length-prefixed or fixed-length byte payloads.
    Bytes,
    /// Length-prefixed UTF-8 strings.
    Str,
    /// Element count and items of a sequence.
    Sequence,
    /// Presence tag of an optional value.
    Option,
    /// Fields of a composite value.
    Struct,
    /// Public key payload.
    PublicKey,
    /// Private key payload.
    PrivateKey,
    /// Signature payload.
    Signature,
    /// Scheme index preceding a key or signature variant.
    Scheme,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Primitive => write!(f, "primitive"),
            SerKind::Bytes => write!(f, "bytes"),
            SerKind::Str => write!(f, "string"),
            SerKind::Sequence => write!(f, "sequence"),
            SerKind::Option => write!(f, "option"),
            SerKind::Struct => write!(f, "struct"),
            SerKind::PublicKey => write!(f, "public key"),
            SerKind::PrivateKey => write!(f, "private key"),
            SerKind::Signature => write!(f, "signature"),
            SerKind::Scheme => write!(f, "scheme"),
        }
    }
}

/// Why a ULEB128 prefix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UlebReason {
    /// The continuation bit was still set after the maximum number of bytes.
    Unterminated,
    /// The decoded value does not fit into a `u32`.
    Overflow,
    /// A shorter encoding of the same value exists.
    NonCanonical,
}

impl fmt::Display for UlebReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UlebReason::Unterminated => write!(f, "continuation bit never cleared"),
            UlebReason::Overflow => write!(f, "value exceeds u32::MAX"),
            UlebReason::NonCanonical => write!(f, "non-minimal encoding"),
        }
    }
}

/// Canonical decoding error, surfaced whenever a wire payload is truncated or
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerError {
    /// Input ended before the expected number of bytes were read.
    #[error("unexpected end of input reading {kind} `{field}`: need {need} bytes, have {have}")]
    UnexpectedEnd {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Bytes required by the read.
        need: usize,
        /// Bytes left in the input.
        have: usize,
    },
    /// A length prefix exceeded the remaining buffer.
    #[error("{kind} `{field}` declares {declared} bytes but only {remaining} remain")]
    InvalidLength {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Length announced by the prefix.
        declared: usize,
        /// Bytes left after the prefix.
        remaining: usize,
    },
    /// A ULEB128 length or index could not be decoded.
    #[error("invalid uleb128 in {kind} `{field}`: {reason}")]
    InvalidUleb128 {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Decoder failure detail.
        reason: UlebReason,
    },
    /// Encountered a tag or flag byte outside its allowed range.
    #[error("invalid value {value:#04x} for {kind} `{field}`")]
    InvalidValue {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Offending byte.
        value: u8,
    },
    /// String payload was not valid UTF-8.
    #[error("{kind} `{field}` is not valid utf-8")]
    InvalidUtf8 {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
    },
    /// Additional bytes remained after consuming the expected payload.
    #[error("{remaining} trailing bytes after {kind} at offset {consumed}")]
    TrailingBytes {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
}

impl SerError {
    /// Creates an unexpected-end error helper.
    pub fn unexpected_end(kind: SerKind, field: &'static str, need: usize, have: usize) -> Self {
        SerError::UnexpectedEnd {
            kind,
            field,
            need,
            have,
        }
    }

    /// Creates an invalid-length error helper.
    pub fn invalid_length(
        kind: SerKind,
        field: &'static str,
        declared: usize,
        remaining: usize,
    ) -> Self {
        SerError::InvalidLength {
            kind,
            field,
            declared,
            remaining,
        }
    }

    /// Creates an invalid-uleb128 error helper.
    pub fn invalid_uleb128(kind: SerKind, field: &'static str, reason: UlebReason) -> Self {
        SerError::InvalidUleb128 {
            kind,
            field,
            reason,
        }
    }

    /// Creates an invalid-value error helper.
    pub fn invalid_value(kind: SerKind, field: &'static str, value: u8) -> Self {
        SerError::InvalidValue { kind, field, value }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Returns the serialization context associated with the error.
    pub fn kind(&self) -> SerKind {
        match *self {
            SerError::UnexpectedEnd { kind, .. }
            | SerError::InvalidLength { kind, .. }
            | SerError::InvalidUleb128 { kind, .. }
            | SerError::InvalidValue { kind, .. }
            | SerError::InvalidUtf8 { kind, .. }
            | SerError::TrailingBytes { kind, .. } => kind,
        }
    }
}

/// Convenient alias for decoding results.
pub type SerResult<T> = core::result::Result<T, SerError>;

/// Why an integer did not fit its declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeReason {
    /// The input was below zero.
    Negative,
    /// The input exceeded the width's maximum.
    Overflow,
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeReason::Negative => write!(f, "negative"),
            RangeReason::Overflow => write!(f, "too large"),
        }
    }
}

/// Raised at encode time when a value cannot be represented in its declared
/// integer width. This always indicates a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("value is {reason} for {width}")]
pub struct RangeError {
    /// Declared width of the value.
    pub width: IntWidth,
    /// Which bound was violated.
    pub reason: RangeReason,
}

impl RangeError {
    /// Creates a range error for the given width.
    pub fn new(width: IntWidth, reason: RangeReason) -> Self {
        Self { width, reason }
    }
}

/// Convenient alias for encoding results.
pub type RangeResult<T> = core::result::Result<T, RangeError>;
