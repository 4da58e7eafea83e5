//! ULEB128 prefixes for lengths, element counts and variant indices.
//!
//! Each byte carries seven value bits, least significant group first; bit 7
//! is set on every byte except the last. Decoding is strict: the prefix must
//! fit in a `u32`, must terminate within [`MAX_ULEB128_U32_BYTES`] bytes and
//! must be the shortest encoding of its value.

use super::cursor::ByteReader;
use super::error::{
    RangeError, RangeReason, RangeResult, SerError, SerKind, SerResult, UlebReason,
};
use super::ints::{self, IntWidth};

/// Maximum number of bytes a `u32` occupies once ULEB128 encoded.
pub const MAX_ULEB128_U32_BYTES: usize = 5;

const CONTINUATION: u8 = 0x80;
const VALUE_MASK: u8 = 0x7f;

/// Appends the ULEB128 encoding of `value`.
pub fn write_uleb128_u32(out: &mut Vec<u8>, value: u32) {
    let mut remaining = value;
    while remaining >= u32::from(CONTINUATION) {
        ints::write_u8(out, (remaining as u8 & VALUE_MASK) | CONTINUATION);
        remaining >>= 7;
    }
    ints::write_u8(out, remaining as u8);
}

/// Writes a `usize` length or count as a ULEB128 `u32` prefix.
pub fn write_length(out: &mut Vec<u8>, len: usize) -> RangeResult<()> {
    let len =
        u32::try_from(len).map_err(|_| RangeError::new(IntWidth::U32, RangeReason::Overflow))?;
    write_uleb128_u32(out, len);
    Ok(())
}

/// Reads a ULEB128 encoded `u32`.
///
/// On failure the cursor is left where it was.
pub fn read_uleb128_u32(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<u32> {
    let mut ahead = *cursor;
    let mut value: u64 = 0;
    for index in 0..MAX_ULEB128_U32_BYTES {
        let byte = ints::read_u8(&mut ahead, kind, field)?;
        value |= u64::from(byte & VALUE_MASK) << (7 * index);
        if byte & CONTINUATION == 0 {
            if index > 0 && byte == 0 {
                return Err(SerError::invalid_uleb128(kind, field, UlebReason::NonCanonical));
            }
            let value = u32::try_from(value)
                .map_err(|_| SerError::invalid_uleb128(kind, field, UlebReason::Overflow))?;
            *cursor = ahead;
            return Ok(value);
        }
    }
    Err(SerError::invalid_uleb128(kind, field, UlebReason::Unterminated))
}

/// Reads a ULEB128 length prefix and checks it against the remaining input.
///
/// Used for byte payloads, where every declared unit is one byte.
pub fn read_length(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<usize> {
    let mut ahead = *cursor;
    let len = read_uleb128_u32(&mut ahead, kind, field)? as usize;
    let remaining = ahead.remaining();
    if len > remaining {
        return Err(SerError::invalid_length(kind, field, len, remaining));
    }
    *cursor = ahead;
    Ok(len)
}
