//! Byte-order codec for the fixed-width numeric types.
//!
//! The wire is big-endian regardless of host. Conversion is a pure per-type
//! transform over `to_be_bytes`/`from_be_bytes`; nothing here keeps state.

/// A fixed-width scalar with a big-endian wire representation.
pub trait Primitive: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Decode from exactly `SIZE` bytes. Callers slice the input first.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Store the big-endian encoding into the first `SIZE` bytes of `out`.
    fn store_be(self, out: &mut [u8]);
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_be_bytes(raw)
                }

                fn store_be(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, u16, f32, f64);

/// Widest `Primitive::SIZE`; sinks use it to size a stack buffer.
pub const MAX_PRIMITIVE_SIZE: usize = 8;
