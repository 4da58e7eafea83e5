use super::bytes;
use super::error::RangeResult;
use super::ints::{self, IntWidth, UintInput};
use super::traits::Serializable;
use super::U256;
use super::uleb128;

/// Append-only canonical encoder.
///
/// Every append lands at the end of the buffer. [`Serializer::finish`] takes
/// the serializer by value, so nothing can be appended once the bytes have
/// been handed out. Operations that emit a length prefix return a
/// [`RangeResult`] because the prefix is capped at `u32::MAX`.
///
/// ```
/// use chainbytes::ser::Serializer;
///
/// let mut serializer = Serializer::new();
/// serializer.serialize_u8(7).serialize_bool(true);
/// serializer.serialize_str("hi")?;
/// assert_eq!(serializer.finish(), [0x07, 0x01, 0x02, b'h', b'i']);
/// # Ok::<(), chainbytes::ser::RangeError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Serializer {
    buffer: Vec<u8>,
}

impl Serializer {
    /// Creates an empty serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer whose buffer can hold `capacity` bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrows the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Appends one byte.
    pub fn serialize_u8(&mut self, value: u8) -> &mut Self {
        ints::write_u8(&mut self.buffer, value);
        self
    }

    /// Appends a little-endian `u16`.
    pub fn serialize_u16(&mut self, value: u16) -> &mut Self {
        ints::write_u16(&mut self.buffer, value);
        self
    }

    /// Appends a little-endian `u32`.
    pub fn serialize_u32(&mut self, value: u32) -> &mut Self {
        ints::write_u32(&mut self.buffer, value);
        self
    }

    /// Appends a little-endian `u64`.
    pub fn serialize_u64(&mut self, value: u64) -> &mut Self {
        ints::write_u64(&mut self.buffer, value);
        self
    }

    /// Appends a little-endian `u128`.
    pub fn serialize_u128(&mut self, value: u128) -> &mut Self {
        ints::write_u128(&mut self.buffer, value);
        self
    }

    /// Appends the 32 little-endian bytes of `value`.
    pub fn serialize_u256(&mut self, value: &U256) -> &mut Self {
        ints::write_u256(&mut self.buffer, value);
        self
    }

    /// Encodes `value` at the declared `width`.
    ///
    /// Fails with [`super::RangeError`] if `value` is negative or larger than
    /// the width allows. Nothing is written on failure.
    pub fn serialize_uint<V: UintInput>(
        &mut self,
        width: IntWidth,
        value: V,
    ) -> RangeResult<&mut Self> {
        ints::write_uint(&mut self.buffer, width, value)?;
        Ok(self)
    }

    /// Appends `1` for `true` and `0` for `false`.
    pub fn serialize_bool(&mut self, value: bool) -> &mut Self {
        ints::write_bool(&mut self.buffer, value);
        self
    }

    /// Appends a bare ULEB128 value, as used for lengths and variant indices.
    pub fn serialize_uleb128_as_u32(&mut self, value: u32) -> &mut Self {
        uleb128::write_uleb128_u32(&mut self.buffer, value);
        self
    }

    /// Appends a ULEB128 length followed by `bytes`.
    pub fn serialize_bytes(&mut self, bytes: &[u8]) -> RangeResult<&mut Self> {
        bytes::write_prefixed_bytes(&mut self.buffer, bytes)?;
        Ok(self)
    }

    /// Appends `bytes` with no length prefix.
    ///
    /// The reader must already know the length, so the caller is responsible
    /// for passing exactly that many bytes.
    pub fn serialize_fixed_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        bytes::write_bytes(&mut self.buffer, bytes);
        self
    }

    /// Appends a length-prefixed UTF-8 string.
    pub fn serialize_str(&mut self, value: &str) -> RangeResult<&mut Self> {
        bytes::write_str(&mut self.buffer, value)?;
        Ok(self)
    }

    /// Appends the element count followed by each element in slice order.
    pub fn serialize_vector<T: Serializable>(&mut self, items: &[T]) -> RangeResult<&mut Self> {
        uleb128::write_length(&mut self.buffer, items.len())?;
        for item in items {
            item.serialize(self)?;
        }
        Ok(self)
    }

    /// Appends a presence tag (`0` or `1`) and the value when present.
    pub fn serialize_option<T: Serializable>(
        &mut self,
        value: Option<&T>,
    ) -> RangeResult<&mut Self> {
        match value {
            Some(inner) => {
                ints::write_u8(&mut self.buffer, 1);
                inner.serialize(self)?;
            }
            None => ints::write_u8(&mut self.buffer, 0),
        }
        Ok(self)
    }

    /// Delegates to the value's own [`Serializable`] implementation.
    pub fn serialize<T: Serializable + ?Sized>(&mut self, value: &T) -> RangeResult<&mut Self> {
        value.serialize(self)?;
        Ok(self)
    }

    /// Consumes the serializer and returns the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}
