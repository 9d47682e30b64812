// src/reverse.rs
//! Byte-order reversal of buffers and single values.
//!
//! Reversal ignores the host byte order entirely: it always mirrors the
//! bytes of the value, which is what converting between a little-endian and
//! a big-endian representation requires.

use crate::bits;
use crate::codec::ByteCodec;
use crate::endian::Endianness;

/// Reverse a byte buffer in place.
///
/// Byte `i` is swapped with byte `len - 1 - i` for every `i < len / 2`, so an
/// odd-length buffer keeps its middle byte where it is.
pub fn reverse_bytes(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
}

/// A value whose bytes can be mirrored
pub trait Reverse: ByteCodec {
    /// Return the value with its byte order reversed
    fn reverse(self) -> Self;
}

impl Reverse for u16 {
    #[inline]
    fn reverse(self) -> Self {
        (self >> 8) | (self << 8)
    }
}

impl Reverse for u32 {
    #[inline]
    fn reverse(self) -> Self {
        ((self >> 24) & 0xFF)
            | ((self >> 8) & 0xFF00)
            | ((self << 8) & 0x00FF_0000)
            | ((self << 24) & 0xFF00_0000)
    }
}

impl Reverse for u64 {
    #[inline]
    fn reverse(self) -> Self {
        let mut result = 0u64;
        for i in 0..8 {
            result |= ((self >> (i * 8)) & 0xFF) << ((7 - i) * 8);
        }
        result
    }
}

macro_rules! impl_reverse_via_unsigned {
    ($($ty:ty => $unsigned:ty),*) => {$(
        impl Reverse for $ty {
            #[inline]
            fn reverse(self) -> Self {
                (self as $unsigned).reverse() as $ty
            }
        }
    )*};
}

impl_reverse_via_unsigned!(i16 => u16, i32 => u32, i64 => u64);

impl Reverse for f32 {
    #[inline]
    fn reverse(self) -> Self {
        bits::f32_from_u32(bits::u32_from_f32(self).reverse())
    }
}

impl Reverse for f64 {
    #[inline]
    fn reverse(self) -> Self {
        bits::f64_from_u64(bits::u64_from_f64(self).reverse())
    }
}

/// Reverse the byte order of a value
#[inline]
pub fn reverse<T: Reverse>(value: T) -> T {
    value.reverse()
}

/// Reverse the byte order of every element of a slice in place
pub fn reverse_each<T: Reverse>(values: &mut [T]) {
    for value in values.iter_mut() {
        *value = value.reverse();
    }
}

/// Convert a value read in `from` byte order into `to` byte order.
///
/// The bytes are mirrored only when the two orders differ.
#[inline]
pub fn to_order<T: Reverse>(value: T, from: Endianness, to: Endianness) -> T {
    if from == to {
        value
    } else {
        value.reverse()
    }
}
