//! Asymmetric key and signature family.
//!
//! Every concrete algorithm provides three [`KeyMaterial`] types (public key,
//! private key, signature) with compile-time lengths. The closed enums
//! [`PublicKey`], [`PrivateKey`] and [`Signature`] gather the algorithms
//! behind one tagged type so that callers match exhaustively when a scheme is
//! added.
//!
//! Concrete key types encode as a length-prefixed byte sequence even though
//! their length is fixed, which keeps the wire layout identical across
//! algorithms of different sizes. The enums prepend the ULEB128 scheme index.

macro_rules! impl_hex_text {
    ($($ty:ty),*) => {$(
        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&$crate::crypto::KeyMaterial::to_hex(self), f)
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
                <$ty as $crate::crypto::KeyMaterial>::from_hex(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

pub(crate) use impl_hex_text;

pub mod ed25519;

use core::fmt;

use tracing::trace;

pub use ed25519::{
    Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature, ED25519_PRIVATE_KEY_LENGTH,
    ED25519_PUBLIC_KEY_LENGTH, ED25519_SIGNATURE_LENGTH,
};

use crate::error::{Result, ValidationError};
use crate::hexstr::Hex;
use crate::ser::{
    read_prefixed_slice, read_uleb128_u32, Deserializable, Deserializer, RangeResult, SerKind,
    Serializable, Serializer,
};

/// Shared capability of fixed-length keys and signatures.
pub trait KeyMaterial: Sized {
    /// Exact length of the raw bytes.
    const LENGTH: usize;
    /// Name used in validation errors.
    const NAME: &'static str;

    /// Builds the value from raw bytes, rejecting any other length.
    fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, ValidationError>;

    /// Returns the raw bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Parses a `0x`-prefixed (or bare) hex string.
    fn from_hex(input: &str) -> core::result::Result<Self, ValidationError> {
        let hex = Hex::from_hex_string(input)?;
        Self::from_bytes(hex.as_bytes())
    }

    /// Renders the raw bytes as hex.
    fn to_hex(&self) -> Hex {
        Hex::from_bytes(self.to_bytes())
    }
}

/// Copies `bytes` into a fixed array, failing unless the length is exactly `N`.
pub(crate) fn fixed_bytes<K: KeyMaterial, const N: usize>(
    bytes: &[u8],
) -> core::result::Result<[u8; N], ValidationError> {
    <[u8; N]>::try_from(bytes)
        .map_err(|_| ValidationError::invalid_length(K::NAME, N, bytes.len()))
}

pub(crate) fn serialize_key_material<K: KeyMaterial>(
    key: &K,
    serializer: &mut Serializer,
) -> RangeResult<()> {
    serializer.serialize_bytes(&key.to_bytes())?;
    Ok(())
}

pub(crate) fn deserialize_key_material<K: KeyMaterial>(
    deserializer: &mut Deserializer<'_>,
    kind: SerKind,
) -> Result<K> {
    deserializer.transaction(|ahead| {
        let bytes = read_prefixed_slice(ahead.reader_mut(), kind, K::NAME)?;
        K::from_bytes(bytes).map_err(|err| {
            trace!(%err, %kind, "decoded key material has the wrong length");
            err.into()
        })
    })
}

/// Signature algorithms known to this crate, with their wire indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    Ed25519,
}

impl SignatureScheme {
    /// ULEB128 index written ahead of a tagged key or signature.
    pub const fn index(self) -> u32 {
        match self {
            SignatureScheme::Ed25519 => 0,
        }
    }

    /// Lowercase algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ed25519",
        }
    }

    /// Maps a wire index back to a scheme. `what` names the family being
    /// decoded for the error message.
    pub fn from_index(
        what: &'static str,
        index: u32,
    ) -> core::result::Result<Self, ValidationError> {
        match index {
            0 => Ok(SignatureScheme::Ed25519),
            _ => Err(ValidationError::UnknownScheme { what, index }),
        }
    }

    fn read(deserializer: &mut Deserializer<'_>, what: &'static str) -> Result<Self> {
        deserializer.transaction(|ahead| {
            let index = read_uleb128_u32(ahead.reader_mut(), SerKind::Scheme, what)?;
            Ok(Self::from_index(what, index)?)
        })
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Public key of any supported scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
}

impl PublicKey {
    /// Scheme of the wrapped key.
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            PublicKey::Ed25519(_) => SignatureScheme::Ed25519,
        }
    }

    /// Checks `signature` over `message`; never fails.
    pub fn verify_signature(&self, message: &[u8], signature: &Signature) -> bool {
        match (self, signature) {
            (PublicKey::Ed25519(key), Signature::Ed25519(signature)) => {
                key.verify_signature(message, signature)
            }
        }
    }

    /// Checks `signature` over the canonical bytes of `value`.
    pub fn verify_serializable<T: Serializable + ?Sized>(
        &self,
        value: &T,
        signature: &Signature,
    ) -> RangeResult<bool> {
        let message = crate::serialize(value)?;
        Ok(self.verify_signature(&message, signature))
    }

    /// Raw key bytes without the scheme index.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.to_bytes(),
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicKey::Ed25519(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl Serializable for PublicKey {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_uleb128_as_u32(self.scheme().index());
        match self {
            PublicKey::Ed25519(key) => key.serialize(serializer),
        }
    }
}

impl Deserializable for PublicKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserializer.transaction(|ahead| match SignatureScheme::read(ahead, "public key")? {
            SignatureScheme::Ed25519 => {
                Ok(PublicKey::Ed25519(Ed25519PublicKey::deserialize(ahead)?))
            }
        })
    }
}

/// Private key of any supported scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKey {
    Ed25519(Ed25519PrivateKey),
}

impl PrivateKey {
    /// Generates a fresh key for `scheme`.
    pub fn generate(scheme: SignatureScheme) -> Self {
        match scheme {
            SignatureScheme::Ed25519 => PrivateKey::Ed25519(Ed25519PrivateKey::generate()),
        }
    }

    /// Scheme of the wrapped key.
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            PrivateKey::Ed25519(_) => SignatureScheme::Ed25519,
        }
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Ed25519(key) => PublicKey::Ed25519(key.public_key()),
        }
    }

    /// Signs `message` with the wrapped key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            PrivateKey::Ed25519(key) => Signature::Ed25519(key.sign(message)),
        }
    }

    /// Signs the canonical bytes of `value`.
    pub fn sign_serializable<T: Serializable + ?Sized>(&self, value: &T) -> RangeResult<Signature> {
        let message = crate::serialize(value)?;
        Ok(self.sign(&message))
    }
}

impl From<Ed25519PrivateKey> for PrivateKey {
    fn from(key: Ed25519PrivateKey) -> Self {
        PrivateKey::Ed25519(key)
    }
}

impl Serializable for PrivateKey {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_uleb128_as_u32(self.scheme().index());
        match self {
            PrivateKey::Ed25519(key) => key.serialize(serializer),
        }
    }
}

impl Deserializable for PrivateKey {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserializer.transaction(|ahead| match SignatureScheme::read(ahead, "private key")? {
            SignatureScheme::Ed25519 => {
                Ok(PrivateKey::Ed25519(Ed25519PrivateKey::deserialize(ahead)?))
            }
        })
    }
}

/// Signature of any supported scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    Ed25519(Ed25519Signature),
}

impl Signature {
    /// Scheme that produced the signature.
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            Signature::Ed25519(_) => SignatureScheme::Ed25519,
        }
    }

    /// Raw signature bytes without the scheme index.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Signature::Ed25519(signature) => signature.to_bytes(),
        }
    }
}

impl From<Ed25519Signature> for Signature {
    fn from(signature: Ed25519Signature) -> Self {
        Signature::Ed25519(signature)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::Ed25519(signature) => fmt::Display::fmt(signature, f),
        }
    }
}

impl Serializable for Signature {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_uleb128_as_u32(self.scheme().index());
        match self {
            Signature::Ed25519(signature) => signature.serialize(serializer),
        }
    }
}

impl Deserializable for Signature {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserializer.transaction(|ahead| match SignatureScheme::read(ahead, "signature")? {
            SignatureScheme::Ed25519 => {
                Ok(Signature::Ed25519(Ed25519Signature::deserialize(ahead)?))
            }
        })
    }
}
