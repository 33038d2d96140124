//! types for working with raw big-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
/// Readers fill a zeroed [`Scalar::Raw`] from the source and then call
/// [`Scalar::from_raw`]; test builders go the other way with
/// [`Scalar::to_raw`].
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// The size of the raw type, in bytes.
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self::Raw>();

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;
}

/// An internal macro for implementing the `Scalar` trait for newtypes.
#[macro_export]
#[doc(hidden)]
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl $crate::Scalar for $name {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                $crate::Scalar::to_raw(self.0)
            }

            fn from_raw(raw: $raw) -> Self {
                Self($crate::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn big_endian_layout() {
        assert_eq!(0x0102u16.to_raw(), [1, 2]);
        assert_eq!(u32::from_raw([0x4F, 0x54, 0x54, 0x4F]), crate::CFF_SFNT_VERSION);
        assert_eq!(i16::from_raw([0xFF, 0xB5]), -75);
        assert_eq!(<u32 as Scalar>::RAW_BYTE_LEN, 4);
    }
}
