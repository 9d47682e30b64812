// src/codec/converter.rs
use crate::codec::{ByteCodec, Word};
use crate::endian::{self, Endianness};
use crate::error::{BitconvError, Result};
use std::mem;

/// Encodes and decodes numeric values in one fixed byte order.
///
/// The byte order is chosen once, when the converter is built, and every
/// call afterwards reads it. A converter is a small `Copy` value and can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use bitconv_rs::BitConverter;
///
/// let converter = BitConverter::big_endian();
/// let bytes = converter.get_bytes(-2.5f64);
/// assert_eq!(bytes[0], 0xC0);
///
/// let value: f64 = converter.to_value(&bytes);
/// assert_eq!(value, -2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitConverter {
    endianness: Endianness,
}

impl BitConverter {
    /// Create a converter for the given byte order
    pub const fn new(endianness: Endianness) -> Self {
        BitConverter { endianness }
    }

    /// Create a converter for the byte order of the running machine
    pub fn detect() -> Self {
        Self::new(Endianness::detect())
    }

    /// Create a converter for the process-wide default byte order
    /// (see [`crate::endian::init`])
    pub fn host() -> Self {
        Self::new(endian::host())
    }

    pub const fn little_endian() -> Self {
        Self::new(Endianness::Little)
    }

    pub const fn big_endian() -> Self {
        Self::new(Endianness::Big)
    }

    /// The byte order this converter writes and reads
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Encode `value` into a caller-provided buffer.
    ///
    /// Byte `i` of the value, counted from the least significant end, lands
    /// at index `i` for little-endian and at `width - 1 - i` for big-endian.
    pub fn write_bytes<T: ByteCodec>(&self, value: T, bytes: &mut T::Bytes) {
        let word = value.to_word();
        let bytes = bytes.as_mut();
        let width = bytes.len();

        for i in 0..width {
            let byte = word.byte_at(i);
            match self.endianness {
                Endianness::Little => bytes[i] = byte,
                Endianness::Big => bytes[width - 1 - i] = byte,
            }
        }
    }

    /// Encode `value` into a new byte array
    pub fn get_bytes<T: ByteCodec>(&self, value: T) -> T::Bytes {
        let mut bytes = T::Bytes::default();
        self.write_bytes(value, &mut bytes);
        bytes
    }

    /// Decode a value from its byte representation.
    ///
    /// Exact inverse of [`BitConverter::get_bytes`] for the same byte order.
    pub fn to_value<T: ByteCodec>(&self, bytes: &T::Bytes) -> T {
        self.decode(bytes.as_ref())
    }

    /// Decode a value from a slice that must be exactly as long as `T`
    ///
    /// # Example
    ///
    /// ```
    /// use bitconv_rs::BitConverter;
    ///
    /// let converter = BitConverter::little_endian();
    /// let value: u16 = converter.to_value_from_slice(&[0x34, 0x12]).unwrap();
    /// assert_eq!(value, 0x1234);
    ///
    /// assert!(converter.to_value_from_slice::<u32>(&[0x34, 0x12]).is_err());
    /// ```
    pub fn to_value_from_slice<T: ByteCodec>(&self, bytes: &[u8]) -> Result<T> {
        let expected = mem::size_of::<T>();
        if bytes.len() != expected {
            return Err(BitconvError::LengthMismatch {
                expected,
                found: bytes.len(),
            });
        }
        Ok(self.decode(bytes))
    }

    /// Rewrite an encoded value from this converter's byte order into the
    /// byte order of `target`
    pub fn transcode<T: ByteCodec>(&self, bytes: &T::Bytes, target: &BitConverter) -> T::Bytes {
        target.get_bytes(self.to_value::<T>(bytes))
    }

    /// Callers guarantee `bytes.len() == size_of::<T>()`.
    pub(crate) fn decode<T: ByteCodec>(&self, bytes: &[u8]) -> T {
        let width = bytes.len();
        let mut word = T::Word::default();

        for i in 0..width {
            let byte = match self.endianness {
                Endianness::Little => bytes[i],
                Endianness::Big => bytes[width - 1 - i],
            };
            word = word.with_byte_at(byte, i);
        }

        T::from_word(word)
    }
}

/// Same as [`BitConverter::host`]; agrees with `Endianness::default()`
impl Default for BitConverter {
    fn default() -> Self {
        Self::host()
    }
}

impl From<Endianness> for BitConverter {
    fn from(endianness: Endianness) -> Self {
        Self::new(endianness)
    }
}
