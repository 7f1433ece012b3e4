//! Traits for interpreting raw glyph data

/// A scalar that can be read from big-endian bytes.
///
/// All multi-byte values in TrueType and Type 1 data are stored big-endian.
pub trait ReadScalar: Sized {
    /// The number of bytes occupied by the raw value.
    const RAW_BYTE_LEN: usize;

    /// Decodes the value from exactly `RAW_BYTE_LEN` bytes.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_read_scalar {
    ($($ty:ty),*) => {
        $(
            impl ReadScalar for $ty {
                const RAW_BYTE_LEN: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$ty>::from_be_bytes)
                }
            }
        )*
    };
}

impl_read_scalar!(u8, i32);

/// An error that occurs when reading raw glyph data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    /// An index referred to an element that does not exist.
    InvalidIndex(usize),
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidIndex(ix) => write!(f, "Index {ix} is out of range"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
