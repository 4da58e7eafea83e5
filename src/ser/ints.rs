use core::fmt;

use super::cursor::ByteReader;
use super::error::{RangeError, RangeReason, RangeResult, SerError, SerKind, SerResult};
use super::U256;

/// Declared widths of the canonical unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
}

impl IntWidth {
    /// Number of bits in the encoding.
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::U8 => 8,
            IntWidth::U16 => 16,
            IntWidth::U32 => 32,
            IntWidth::U64 => 64,
            IntWidth::U128 => 128,
            IntWidth::U256 => 256,
        }
    }

    /// Number of bytes in the encoding.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Largest value the width can carry.
    pub fn max_value(self) -> U256 {
        U256::MAX >> (256 - self.bits() as usize)
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

/// Integer inputs accepted by the checked [`write_uint`] path.
///
/// Signed, pointer-sized and 256-bit values land here when the caller's value
/// type is wider than, or differently signed from, the declared wire width.
pub trait UintInput: Copy {
    /// Widens to `U256`, rejecting negatives.
    fn to_u256(self) -> Result<U256, RangeReason>;
}

macro_rules! impl_uint_input_unsigned {
    ($($ty:ty),*) => {
        $(impl UintInput for $ty {
            fn to_u256(self) -> Result<U256, RangeReason> {
                Ok(U256::from(self))
            }
        })*
    };
}

macro_rules! impl_uint_input_signed {
    ($($ty:ty),*) => {
        $(impl UintInput for $ty {
            fn to_u256(self) -> Result<U256, RangeReason> {
                u128::try_from(self)
                    .map(U256::from)
                    .map_err(|_| RangeReason::Negative)
            }
        })*
    };
}

impl_uint_input_unsigned!(u8, u16, u32, u64, u128, usize);
impl_uint_input_signed!(i8, i16, i32, i64, i128, isize);

impl UintInput for U256 {
    fn to_u256(self) -> Result<U256, RangeReason> {
        Ok(self)
    }
}

/// Encodes a `u8` into the output buffer.
pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Encodes a `u16` in little-endian order.
pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u32` in little-endian order.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u64` in little-endian order.
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u128` in little-endian order.
pub fn write_u128(out: &mut Vec<u8>, value: u128) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u256` in little-endian order.
pub fn write_u256(out: &mut Vec<u8>, value: &U256) {
    out.extend_from_slice(&value.to_le_bytes::<32>());
}

/// Writes a boolean flag as a single byte (`0` or `1`).
pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    write_u8(out, value as u8);
}

/// Writes `value` zero-padded to `width`, failing if it does not fit.
pub fn write_uint<V: UintInput>(out: &mut Vec<u8>, width: IntWidth, value: V) -> RangeResult<()> {
    let value = value
        .to_u256()
        .map_err(|reason| RangeError::new(width, reason))?;
    if value.bit_len() > width.bits() as usize {
        return Err(RangeError::new(width, RangeReason::Overflow));
    }
    out.extend_from_slice(&value.to_le_bytes::<32>()[..width.bytes()]);
    Ok(())
}

/// Reads a `u8` from the cursor.
pub fn read_u8(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u8> {
    Ok(cursor.read_array::<1>(kind, field)?[0])
}

/// Reads a `u16` in little-endian order.
pub fn read_u16(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u16> {
    let bytes = cursor.read_array::<2>(kind, field)?;
    Ok(u16::from_le_bytes(bytes))
}

/// Reads a `u32` in little-endian order.
pub fn read_u32(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u32> {
    let bytes = cursor.read_array::<4>(kind, field)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Reads a `u64` in little-endian order.
pub fn read_u64(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u64> {
    let bytes = cursor.read_array::<8>(kind, field)?;
    Ok(u64::from_le_bytes(bytes))
}

/// Reads a `u128` in little-endian order.
pub fn read_u128(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<u128> {
    let bytes = cursor.read_array::<16>(kind, field)?;
    Ok(u128::from_le_bytes(bytes))
}

/// Reads a `u256` in little-endian order.
pub fn read_u256(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<U256> {
    let bytes = cursor.read_array::<32>(kind, field)?;
    Ok(U256::from_le_bytes(bytes))
}

/// Reads a boolean flag encoded as `0` or `1`.
pub fn read_bool(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<bool> {
    let mut ahead = *cursor;
    let value = match read_u8(&mut ahead, kind, field)? {
        0 => false,
        1 => true,
        other => return Err(SerError::invalid_value(kind, field, other)),
    };
    *cursor = ahead;
    Ok(value)
}
