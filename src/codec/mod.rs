// src/codec/mod.rs
//! Endianness-aware conversion between numeric values and raw bytes
//!
//! This module provides the byte codec for every numeric type of 16 bits and
//! above:
//!
//! - [`ByteCodec`] - Per-type description of the unsigned word and byte array
//!   a value is encoded through
//! - [`BitConverter`] - Encodes and decodes values in a fixed byte order
//! - [`ValueBuffer`] - Accumulates encoded values of one kind (feature `buffer`)
//! - [`stream`] - Slice and `Read`/`Write` helpers built on the converter
//!
//! Values are split into bytes with shifts and masks, so the produced layout
//! depends only on the converter's byte order and never on how the running
//! machine stores the value. Floats are reinterpreted as their IEEE 754 bit
//! pattern first, which keeps NaN payloads intact.
//!
//! # Examples
//!
//! ```
//! use bitconv_rs::{BitConverter, Endianness};
//!
//! let converter = BitConverter::new(Endianness::Little);
//! assert_eq!(converter.get_bytes(0x0102_0304u32), [0x04, 0x03, 0x02, 0x01]);
//!
//! let value: i16 = converter.to_value(&[0xFE, 0xFF]);
//! assert_eq!(value, -2);
//! ```

#[cfg(feature = "buffer")]
mod buffer;
mod converter;
pub mod stream;

#[cfg(feature = "buffer")]
pub use buffer::ValueBuffer;
pub use converter::BitConverter;

use crate::bits;
use crate::types::Numeric;
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer that a codec value is reinterpreted as before being
/// split into bytes
pub trait Word: sealed::Sealed + Copy + Default + PartialEq + Debug {
    /// Byte `index` counted from the least significant end
    fn byte_at(self, index: usize) -> u8;

    /// OR `byte` into position `index` counted from the least significant end
    fn with_byte_at(self, byte: u8, index: usize) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Word for $ty {
            #[inline]
            fn byte_at(self, index: usize) -> u8 {
                ((self >> (index * 8)) & 0xFF) as u8
            }

            #[inline]
            fn with_byte_at(self, byte: u8, index: usize) -> Self {
                self | ((byte as $ty) << (index * 8))
            }
        }
    )*};
}

impl_word!(u16, u32, u64);

/// A numeric type with a dedicated byte codec.
///
/// Implemented for `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `f32` and `f64`.
/// 8-bit integers are already a single byte and have no codec.
pub trait ByteCodec: Numeric {
    /// Unsigned integer of the same width
    type Word: Word;

    /// Fixed-size byte buffer of the same width
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + Debug + PartialEq + Eq + Send + Sync;

    /// Reinterpret as the same-width unsigned word
    fn to_word(self) -> Self::Word;

    /// Inverse of [`ByteCodec::to_word`]
    fn from_word(word: Self::Word) -> Self;
}

macro_rules! impl_codec_int {
    ($($ty:ty => $word:ty, $width:expr);* $(;)?) => {$(
        impl ByteCodec for $ty {
            type Word = $word;
            type Bytes = [u8; $width];

            #[inline]
            fn to_word(self) -> $word {
                self as $word
            }

            #[inline]
            fn from_word(word: $word) -> Self {
                word as $ty
            }
        }
    )*};
}

impl_codec_int! {
    i16 => u16, 2;
    u16 => u16, 2;
    i32 => u32, 4;
    u32 => u32, 4;
    i64 => u64, 8;
    u64 => u64, 8;
}

impl ByteCodec for f32 {
    type Word = u32;
    type Bytes = [u8; 4];

    #[inline]
    fn to_word(self) -> u32 {
        bits::u32_from_f32(self)
    }

    #[inline]
    fn from_word(word: u32) -> Self {
        bits::f32_from_u32(word)
    }
}

impl ByteCodec for f64 {
    type Word = u64;
    type Bytes = [u8; 8];

    #[inline]
    fn to_word(self) -> u64 {
        bits::u64_from_f64(self)
    }

    #[inline]
    fn from_word(word: u64) -> Self {
        bits::f64_from_u64(word)
    }
}

/// Encode `value` in the process-wide host byte order.
///
/// Call [`crate::endian::init`] first; before that the host order is assumed
/// to be little-endian.
pub fn get_bytes<T: ByteCodec>(value: T) -> T::Bytes {
    BitConverter::host().get_bytes(value)
}

/// Decode a value in the process-wide host byte order
pub fn to_value<T: ByteCodec>(bytes: &T::Bytes) -> T {
    BitConverter::host().to_value(bytes)
}
