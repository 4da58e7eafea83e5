//! Ed25519 keys and signatures.
//!
//! Key derivation, signing and verification are delegated to `ed25519-dalek`.
//! Signing is deterministic: the same key and message always produce the same
//! 64-byte signature.
//!
//! [`Ed25519PublicKey`] only checks its length when constructed. Whether the
//! 32 bytes decode to a curve point is discovered at verification time, where
//! an undecodable key simply fails to verify. Existing wire payloads carry
//! keys that were never point-checked, so construction stays permissive.

use core::fmt;

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use tracing::{debug, trace};

use super::{deserialize_key_material, fixed_bytes, serialize_key_material, KeyMaterial};
use crate::error::{Result, ValidationError};
use crate::ser::{Deserializable, Deserializer, RangeResult, SerKind, Serializable, Serializer};

/// Length of an Ed25519 public key in bytes.
pub const ED25519_PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;
/// Length of an Ed25519 private key seed in bytes.
pub const ED25519_PRIVATE_KEY_LENGTH: usize = ed25519_dalek::SECRET_KEY_LENGTH;
/// Length of an Ed25519 signature in bytes.
pub const ED25519_SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey {
    bytes: [u8; ED25519_PUBLIC_KEY_LENGTH],
}

impl Ed25519PublicKey {
    /// Borrows the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Checks `signature` over `message`.
    ///
    /// Never fails: a key that is not a valid curve point, a non-canonical
    /// signature and a plain mismatch all yield `false`.
    pub fn verify_signature(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let key = match VerifyingKey::from_bytes(&self.bytes) {
            Ok(key) => key,
            Err(err) => {
                trace!(%err, public_key = %self, "public key is not a curve point");
                return false;
            }
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature.bytes);
        match key.verify(message, &signature) {
            Ok(()) => true,
            Err(err) => {
                trace!(%err, public_key = %self, "ed25519 signature rejected");
                false
            }
        }
    }
}

impl KeyMaterial for Ed25519PublicKey {
    const LENGTH: usize = ED25519_PUBLIC_KEY_LENGTH;
    const NAME: &'static str = "Ed25519 public key";

    fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, ValidationError> {
        Ok(Self {
            bytes: fixed_bytes::<Self, ED25519_PUBLIC_KEY_LENGTH>(bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey({self})")
    }
}

impl Serializable for Ed25519PublicKey {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serialize_key_material(self, serializer)
    }
}

impl Deserializable for Ed25519PublicKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserialize_key_material(deserializer, SerKind::PublicKey)
    }
}

/// A 32-byte Ed25519 private key seed plus its cached public key.
///
/// The public key is derived once in the constructor; the secret scalar is
/// re-expanded from the seed on every signature. The value is immutable, so a
/// key can be shared (for example behind an `Arc`) across threads that sign
/// concurrently.
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519PrivateKey {
    signing_key: SigningKey,
}

impl Ed25519PrivateKey {
    /// Generates a key from the operating system's secure random source.
    pub fn generate() -> Self {
        let key = Self {
            signing_key: SigningKey::generate(&mut OsRng),
        };
        debug!(public_key = %key.public_key(), "generated ed25519 private key");
        key
    }

    /// Derives the key pair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; ED25519_PRIVATE_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Returns the matching public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Signs `message`.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature {
            bytes: self.signing_key.sign(message).to_bytes(),
        }
    }
}

impl KeyMaterial for Ed25519PrivateKey {
    const LENGTH: usize = ED25519_PRIVATE_KEY_LENGTH;
    const NAME: &'static str = "Ed25519 private key";

    fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, ValidationError> {
        let seed = fixed_bytes::<Self, ED25519_PRIVATE_KEY_LENGTH>(bytes)?;
        Ok(Self::from_seed(&seed))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.signing_key.to_bytes().to_vec()
    }
}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

impl Serializable for Ed25519PrivateKey {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serialize_key_material(self, serializer)
    }
}

impl Deserializable for Ed25519PrivateKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserialize_key_material(deserializer, SerKind::PrivateKey)
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature {
    bytes: [u8; ED25519_SIGNATURE_LENGTH],
}

impl Ed25519Signature {
    /// Borrows the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_SIGNATURE_LENGTH] {
        &self.bytes
    }
}

impl KeyMaterial for Ed25519Signature {
    const LENGTH: usize = ED25519_SIGNATURE_LENGTH;
    const NAME: &'static str = "Ed25519 signature";

    fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, ValidationError> {
        Ok(Self {
            bytes: fixed_bytes::<Self, ED25519_SIGNATURE_LENGTH>(bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signature({self})")
    }
}

impl Serializable for Ed25519Signature {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serialize_key_material(self, serializer)
    }
}

impl Deserializable for Ed25519Signature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserialize_key_material(deserializer, SerKind::Signature)
    }
}

super::impl_hex_text!(Ed25519PublicKey, Ed25519Signature);
