//! Strict `0x` hex interchange for byte values.
//!
//! A [`Hex`] always holds validated bytes; malformed strings are rejected at
//! construction so no partial value can exist.

use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ValidationError};
use crate::ser::{self, Deserializable, RangeResult, Serializable};

/// Prefix used by every rendered hex string.
pub const HEX_PREFIX: &str = "0x";

/// Why a hex string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexInvalidReason {
    /// Nothing followed the optional `0x` prefix.
    TooShort,
    /// The body has an odd number of characters.
    InvalidLength,
    /// The body contains a character outside `[0-9a-fA-F]`.
    InvalidHexChars,
}

impl fmt::Display for HexInvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexInvalidReason::TooShort => write!(f, "hex string is too short"),
            HexInvalidReason::InvalidLength => write!(f, "hex string has an odd length"),
            HexInvalidReason::InvalidHexChars => {
                write!(f, "hex string contains non-hex characters")
            }
        }
    }
}

/// Either textual or raw input accepted by [`Hex::from_hex_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexInput<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(value: &'a str) -> Self {
        HexInput::Str(value)
    }
}

impl<'a> From<&'a String> for HexInput<'a> {
    fn from(value: &'a String) -> Self {
        HexInput::Str(value)
    }
}

impl<'a> From<&'a [u8]> for HexInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        HexInput::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for HexInput<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        HexInput::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HexInput<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        HexInput::Bytes(value)
    }
}

/// Immutable byte value with a `0x`-prefixed lowercase rendering.
///
/// Equality, ordering and hashing are defined on the bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    bytes: Vec<u8>,
}

impl Hex {
    /// Wraps raw bytes. Never fails.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Parses a hex string with an optional `0x` prefix.
    pub fn from_hex_string(input: &str) -> core::result::Result<Self, ValidationError> {
        let body = input.strip_prefix(HEX_PREFIX).unwrap_or(input);
        if body.is_empty() {
            return Err(ValidationError::invalid_hex(HexInvalidReason::TooShort));
        }
        if body.len() % 2 != 0 {
            return Err(ValidationError::invalid_hex(HexInvalidReason::InvalidLength));
        }
        let bytes = hex::decode(body)
            .map_err(|_| ValidationError::invalid_hex(HexInvalidReason::InvalidHexChars))?;
        Ok(Self { bytes })
    }

    /// Builds a value from either representation.
    pub fn from_hex_input<'a>(
        input: impl Into<HexInput<'a>>,
    ) -> core::result::Result<Self, ValidationError> {
        match input.into() {
            HexInput::Str(text) => Self::from_hex_string(text),
            HexInput::Bytes(bytes) => Ok(Self::from_bytes(bytes)),
        }
    }

    /// Borrows the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies the underlying bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Unwraps the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes, not hex characters.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes are held.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_string_without_prefix(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HEX_PREFIX}{}", hex::encode(&self.bytes))
    }
}

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex({self})")
    }
}

impl FromStr for Hex {
    type Err = ValidationError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::from_hex_string(s)
    }
}

impl AsRef<[u8]> for Hex {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Hex {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Hex {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hex> for Vec<u8> {
    fn from(value: Hex) -> Self {
        value.bytes
    }
}

/// Encoded as a length-prefixed byte sequence.
impl Serializable for Hex {
    fn serialize(&self, serializer: &mut ser::Serializer) -> RangeResult<()> {
        serializer.serialize_bytes(&self.bytes)?;
        Ok(())
    }
}

impl Deserializable for Hex {
    fn deserialize(deserializer: &mut ser::Deserializer<'_>) -> Result<Self> {
        Ok(Self::from_bytes(deserializer.deserialize_bytes()?))
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = <String as Deserialize>::deserialize(deserializer)?;
        Hex::from_hex_string(&text).map_err(de::Error::custom)
    }
}
