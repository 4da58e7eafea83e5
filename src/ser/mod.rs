//! Canonical binary serialization.
//!
//! The wire rules are fixed so that independent implementations derive the
//! same bytes for the same logical value:
//!
//! | Shape | Encoding |
//! |-------|----------|
//! | `u8` … `u256` | little-endian, zero-padded to the width |
//! | `bool` | one byte, `0` or `1` |
//! | byte sequence | ULEB128 length, then the raw bytes |
//! | fixed-length bytes | raw bytes, no prefix |
//! | string | ULEB128 length, then the UTF-8 bytes |
//! | sequence | ULEB128 element count, then each element in order |
//! | option | tag `0` (absent) or `1` followed by the value |
//! | struct | fields in declaration order, no padding |
//!
//! [`Serializer`] and [`Deserializer`] are the typed façade; the free
//! functions underneath operate on a `Vec<u8>` and a [`ByteReader`] and carry
//! a [`SerKind`] plus field name into every error.

mod bytes;
mod cursor;
mod deserializer;
mod error;
mod ints;
mod serializer;
mod traits;
mod uleb128;

pub use alloy_primitives::U256;
pub use bytes::{
    ensure_consumed, read_exact_bytes, read_prefixed_bytes, read_prefixed_slice, read_str,
    write_bytes, write_prefixed_bytes, write_str,
};
pub use cursor::ByteReader;
pub use deserializer::Deserializer;
pub use error::{
    RangeError, RangeReason, RangeResult, SerError, SerKind, SerResult, UlebReason,
};
pub use ints::{
    read_bool, read_u128, read_u16, read_u256, read_u32, read_u64, read_u8, write_bool,
    write_u128, write_u16, write_u256, write_u32, write_u64, write_u8, write_uint, IntWidth,
    UintInput,
};
pub use serializer::Serializer;
pub use traits::{Deserializable, Serializable};
pub use uleb128::{
    read_length, read_uleb128_u32, write_length, write_uleb128_u32, MAX_ULEB128_U32_BYTES,
};
