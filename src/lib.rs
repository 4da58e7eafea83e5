//! Canonical binary serialization and Ed25519 key material for on-chain values.
//!
//! Everything that leaves a client for a validator must encode to exactly one
//! byte sequence, because the remote side re-derives the bytes and hashes or
//! verifies them independently. This crate provides that encoding ([`ser`]),
//! the key and signature family that signs over it ([`crypto`]), strict hex
//! interchange ([`hexstr`]) and the request shape the encoded bytes are
//! handed to ([`client`]).
//!
//! ```
//! use chainbytes::crypto::{Ed25519PrivateKey, KeyMaterial};
//!
//! let key = Ed25519PrivateKey::generate();
//! let message = chainbytes::serialize(&(7u64, "transfer".to_string()))?;
//! let signature = key.sign(&message);
//! assert!(key.public_key().verify_signature(&message, &signature));
//!
//! let bytes = chainbytes::serialize(&key.public_key())?;
//! assert_eq!(bytes[0] as usize, Ed25519PrivateKey::LENGTH);
//! # Ok::<(), chainbytes::Error>(())
//! ```
//!
//! All operations are synchronous and allocate only their own buffers.

pub mod client;
pub mod crypto;
pub mod error;
pub mod hexstr;
pub mod ser;

pub use error::{Error, Result, ValidationError};
pub use hexstr::{Hex, HexInput};
pub use ser::{Deserializable, Deserializer, RangeError, SerError, Serializable, Serializer};

/// Encodes `value` into its canonical bytes.
pub fn serialize<T: Serializable + ?Sized>(value: &T) -> ser::RangeResult<Vec<u8>> {
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.finish())
}

/// Decodes a `T` from the front of `bytes`.
///
/// Bytes left over after the value are ignored; use [`deserialize_exact`]
/// when the payload must contain nothing else.
pub fn deserialize<T: Deserializable>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = Deserializer::new(bytes);
    T::deserialize(&mut deserializer)
}

/// Decodes a `T` and rejects any trailing bytes.
pub fn deserialize_exact<T: Deserializable>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = Deserializer::new(bytes);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.ensure_consumed(ser::SerKind::Struct)?;
    Ok(value)
}
