use super::bytes;
use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};
use super::ints;
use super::traits::Deserializable;
use super::U256;
use super::uleb128;
use crate::error::Result;

/// Left-to-right canonical decoder over a borrowed input.
///
/// Each read consumes exactly the bytes the matching [`super::Serializer`]
/// operation emits. Primitive reads fail without moving the cursor. Trailing
/// input is tolerated unless the caller asks for [`Deserializer::ensure_consumed`].
#[derive(Debug, Clone, Copy)]
pub struct Deserializer<'a> {
    reader: ByteReader<'a>,
}

impl<'a> Deserializer<'a> {
    /// Starts decoding at the first byte of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(bytes),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Gives in-crate codecs access to the underlying cursor so they can attach
    /// their own error context.
    pub(crate) fn reader_mut(&mut self) -> &mut ByteReader<'a> {
        &mut self.reader
    }

    /// Reads a little-endian `u8`.
    pub fn deserialize_u8(&mut self) -> SerResult<u8> {
        ints::read_u8(&mut self.reader, SerKind::Primitive, "u8")
    }

    /// Reads a little-endian `u16`.
    pub fn deserialize_u16(&mut self) -> SerResult<u16> {
        ints::read_u16(&mut self.reader, SerKind::Primitive, "u16")
    }

    /// Reads a little-endian `u32`.
    pub fn deserialize_u32(&mut self) -> SerResult<u32> {
        ints::read_u32(&mut self.reader, SerKind::Primitive, "u32")
    }

    /// Reads a little-endian `u64`.
    pub fn deserialize_u64(&mut self) -> SerResult<u64> {
        ints::read_u64(&mut self.reader, SerKind::Primitive, "u64")
    }

    /// Reads a little-endian `u128`.
    pub fn deserialize_u128(&mut self) -> SerResult<u128> {
        ints::read_u128(&mut self.reader, SerKind::Primitive, "u128")
    }

    /// Reads a 32-byte little-endian `u256`.
    pub fn deserialize_u256(&mut self) -> SerResult<U256> {
        ints::read_u256(&mut self.reader, SerKind::Primitive, "u256")
    }

    /// Reads a boolean; any byte other than `0` or `1` is rejected.
    pub fn deserialize_bool(&mut self) -> SerResult<bool> {
        ints::read_bool(&mut self.reader, SerKind::Primitive, "bool")
    }

    /// Reads a bare ULEB128 value.
    pub fn deserialize_uleb128_as_u32(&mut self) -> SerResult<u32> {
        uleb128::read_uleb128_u32(&mut self.reader, SerKind::Primitive, "uleb128")
    }

    /// Reads a length-prefixed byte sequence.
    ///
    /// A prefix larger than the remaining input fails before any payload byte
    /// is consumed.
    pub fn deserialize_bytes(&mut self) -> SerResult<Vec<u8>> {
        bytes::read_prefixed_bytes(&mut self.reader, SerKind::Bytes, "bytes")
    }

    /// Reads exactly `len` bytes with no prefix.
    pub fn deserialize_fixed_bytes(&mut self, len: usize) -> SerResult<&'a [u8]> {
        bytes::read_exact_bytes(&mut self.reader, SerKind::Bytes, "fixed bytes", len)
    }

    /// Reads `N` bytes with no prefix.
    pub fn deserialize_fixed_array<const N: usize>(&mut self) -> SerResult<[u8; N]> {
        self.reader.read_array::<N>(SerKind::Bytes, "fixed bytes")
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn deserialize_str(&mut self) -> SerResult<String> {
        bytes::read_str(&mut self.reader, SerKind::Str, "string")
    }

    /// Reads an element count followed by that many elements, preserving order.
    ///
    /// Every element occupies at least one byte, so a count above the unread
    /// input fails before any element is decoded.
    pub fn deserialize_vector<T: Deserializable>(&mut self) -> Result<Vec<T>> {
        self.transaction(|ahead| {
            let count =
                uleb128::read_uleb128_u32(&mut ahead.reader, SerKind::Sequence, "length")? as usize;
            let remaining = ahead.remaining();
            if count > remaining {
                return Err(
                    SerError::invalid_length(SerKind::Sequence, "length", count, remaining).into(),
                );
            }
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(T::deserialize(ahead)?);
            }
            Ok(items)
        })
    }

    /// Reads a presence tag followed by the value when the tag is `1`.
    pub fn deserialize_option<T: Deserializable>(&mut self) -> Result<Option<T>> {
        self.transaction(|ahead| match ints::read_u8(&mut ahead.reader, SerKind::Option, "tag")? {
            0 => Ok(None),
            1 => Ok(Some(T::deserialize(ahead)?)),
            other => Err(SerError::invalid_value(SerKind::Option, "tag", other).into()),
        })
    }

    /// Delegates to the type's own [`Deserializable`] implementation.
    ///
    /// The position only moves when the whole value decodes.
    pub fn deserialize<T: Deserializable>(&mut self) -> Result<T> {
        self.transaction(T::deserialize)
    }

    /// Runs `read` against a copy and commits the copy's position on success.
    pub(crate) fn transaction<T>(
        &mut self,
        read: impl FnOnce(&mut Deserializer<'a>) -> Result<T>,
    ) -> Result<T> {
        let mut ahead = *self;
        let value = read(&mut ahead)?;
        *self = ahead;
        Ok(value)
    }

    /// Fails with a trailing-bytes error unless the whole input was consumed.
    pub fn ensure_consumed(&self, kind: SerKind) -> SerResult<()> {
        bytes::ensure_consumed(&self.reader, kind)
    }
}

impl<'a> From<&'a [u8]> for Deserializer<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Deserializer::new(bytes)
    }
}
