//! Byte order selection and fixed-width integer conversions.
//!
//! [`ByteOrder`] is the only format parameter a reader carries. The
//! [`Primitive`] trait ties each supported integer type to its width and to
//! the byte-order aware conversions the readers use to reassemble values.

/// Byte order used to reassemble multi-byte values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// The library default, network order (big-endian).
    pub const DEFAULT: ByteOrder = ByteOrder::Big;

    /// Short lowercase name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self { ByteOrder::DEFAULT }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer that can be decoded from a byte stream.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64` and `i64`.
/// The trait is sealed; decode custom layouts with
/// [`BinaryRead::read_fixed`](crate::BinaryRead::read_fixed) instead.
///
/// # Examples
///
/// ```
/// use binaryio::{ByteOrder, Primitive};
///
/// assert_eq!(u16::from_order_bytes(&[0x12, 0x34], ByteOrder::Big), 0x1234);
/// assert_eq!(u16::from_order_bytes(&[0x12, 0x34], ByteOrder::Little), 0x3412);
/// ```
pub trait Primitive: sealed::Sealed + Copy + Sized {
    /// Number of bytes the value occupies on the wire.
    const WIDTH: usize;

    /// Reassemble a value from exactly [`Self::WIDTH`] bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly [`Self::WIDTH`] long.
    fn from_order_bytes(bytes: &[u8], order: ByteOrder) -> Self;

    /// Append the encoding of `self` in `order` to `out`.
    fn write_order_bytes(self, order: ByteOrder, out: &mut Vec<u8>);
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn from_order_bytes(bytes: &[u8], order: ByteOrder) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    match order {
                        ByteOrder::Big => <$ty>::from_be_bytes(raw),
                        ByteOrder::Little => <$ty>::from_le_bytes(raw),
                    }
                }

                fn write_order_bytes(self, order: ByteOrder, out: &mut Vec<u8>) {
                    match order {
                        ByteOrder::Big => out.extend_from_slice(&self.to_be_bytes()),
                        ByteOrder::Little => out.extend_from_slice(&self.to_le_bytes()),
                    }
                }
            }
        )*
    };
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64);
