use super::deserializer::Deserializer;
use super::error::RangeResult;
use super::serializer::Serializer;
use super::U256;
use crate::error::Result;

/// A value with a canonical byte encoding.
///
/// Composite types append their fields one after another in a fixed,
/// type-defined order with no padding:
///
/// ```
/// use chainbytes::ser::{Deserializable, Deserializer, RangeResult, Serializable, Serializer};
///
/// #[derive(Debug, PartialEq)]
/// struct Transfer {
///     amount: u64,
///     memo: Option<String>,
/// }
///
/// impl Serializable for Transfer {
///     fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
///         serializer.serialize_u64(self.amount);
///         serializer.serialize_option(self.memo.as_ref())?;
///         Ok(())
///     }
/// }
///
/// impl Deserializable for Transfer {
///     fn deserialize(deserializer: &mut Deserializer<'_>) -> chainbytes::Result<Self> {
///         Ok(Transfer {
///             amount: deserializer.deserialize_u64()?,
///             memo: deserializer.deserialize_option()?,
///         })
///     }
/// }
///
/// let value = Transfer { amount: 5, memo: None };
/// let bytes = chainbytes::serialize(&value)?;
/// assert_eq!(bytes, [5, 0, 0, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(chainbytes::deserialize::<Transfer>(&bytes)?, value);
/// # Ok::<(), chainbytes::Error>(())
/// ```
pub trait Serializable {
    /// Appends the canonical encoding of `self`.
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()>;
}

/// A value that can be rebuilt from its canonical byte encoding.
///
/// Construction always goes through this factory; there is no way to decode
/// into an existing instance.
pub trait Deserializable: Sized {
    /// Reads one value, advancing the deserializer past its bytes.
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Serializable for $ty {
                fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
                    serializer.$write(*self);
                    Ok(())
                }
            }

            impl Deserializable for $ty {
                fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
                    Ok(deserializer.$read()?)
                }
            }
        )*
    };
}

impl_fixed_width! {
    u8 => serialize_u8, deserialize_u8;
    u16 => serialize_u16, deserialize_u16;
    u32 => serialize_u32, deserialize_u32;
    u64 => serialize_u64, deserialize_u64;
    u128 => serialize_u128, deserialize_u128;
    bool => serialize_bool, deserialize_bool;
}

impl Serializable for U256 {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_u256(self);
        Ok(())
    }
}

impl Deserializable for U256 {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        Ok(deserializer.deserialize_u256()?)
    }
}

impl Serializable for str {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_str(self)?;
        Ok(())
    }
}

impl Serializable for String {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_str(self)?;
        Ok(())
    }
}

impl Deserializable for String {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        Ok(deserializer.deserialize_str()?)
    }
}

impl<T: Serializable> Serializable for [T] {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_vector(self)?;
        Ok(())
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_vector(self)?;
        Ok(())
    }
}

impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserializer.deserialize_vector()
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_option(self.as_ref())?;
        Ok(())
    }
}

impl<T: Deserializable> Deserializable for Option<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        deserializer.deserialize_option()
    }
}

/// Fixed-length byte arrays are written raw, without a length prefix.
impl<const N: usize> Serializable for [u8; N] {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        serializer.serialize_fixed_bytes(self);
        Ok(())
    }
}

impl<const N: usize> Deserializable for [u8; N] {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        Ok(deserializer.deserialize_fixed_array::<N>()?)
    }
}

impl<T: Serializable + ?Sized> Serializable for &T {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        (**self).serialize(serializer)
    }
}

impl<T: Serializable + ?Sized> Serializable for Box<T> {
    fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
        (**self).serialize(serializer)
    }
}

impl<T: Deserializable> Deserializable for Box<T> {
    fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
        T::deserialize(deserializer).map(Box::new)
    }
}

macro_rules! impl_tuple {
    ($($name:ident $var:ident),+) => {
        impl<$($name: Serializable),+> Serializable for ($($name,)+) {
            fn serialize(&self, serializer: &mut Serializer) -> RangeResult<()> {
                let ($($var,)+) = self;
                $($var.serialize(serializer)?;)+
                Ok(())
            }
        }

        impl<$($name: Deserializable),+> Deserializable for ($($name,)+) {
            fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
                Ok(($($name::deserialize(deserializer)?,)+))
            }
        }
    };
}

impl_tuple!(A a);
impl_tuple!(A a, B b);
impl_tuple!(A a, B b, C c);
impl_tuple!(A a, B b, C c, D d);
