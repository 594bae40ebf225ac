//! Fixed-width scalar encoding.
//!
//! All scalars are stored little-endian.

/// A fixed-width value that can be stored in the arena.
pub trait Scalar: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Writes the value into `buf`, which is exactly `SIZE` bytes long.
    fn encode(self, buf: &mut [u8]);

    /// Reads a value from `buf`, which is exactly `SIZE` bytes long.
    fn decode(buf: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn encode(self, buf: &mut [u8]) {
                    buf.copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn decode(buf: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(buf);
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, i16, i32, i64, u64, f32, f64);

impl Scalar for bool {
    const SIZE: usize = 1;

    #[inline]
    fn encode(self, buf: &mut [u8]) {
        buf[0] = self as u8;
    }

    #[inline]
    fn decode(buf: &[u8]) -> Self {
        buf[0] != 0
    }
}

/// Largest `Scalar::SIZE` of any implementation.
pub const MAX_SCALAR_SIZE: usize = 8;
