// src/width.rs
//! Joining two half-width values into one full-width value and back.
//!
//! For integers, `join(high, low)` places `high` in the upper half and `low`
//! in the lower half. Signed halves are joined through their unsigned twins,
//! so a negative low half never sign-extends into the high half.
//!
//! For `f64` the halves are `f32` values and the operation is a bitwise
//! packing: the two 32-bit IEEE 754 patterns become the upper and lower
//! 32 bits of a 64-bit pattern, which is then read as a double. The result
//! is *not* a numeric combination of the two floats, and splitting a double
//! does not yield the high and low parts of its value. It yields two
//! unrelated-looking floats whose bits, laid side by side, are the double's.
//!
//! ```
//! use bitconv_rs::width::{join, split};
//!
//! assert_eq!(join::<u16>(0x12, 0x34), 0x1234);
//! assert_eq!(split(0x1234u16), (0x12, 0x34));
//! assert_eq!(join::<i32>(-1, -1), -1);
//! ```

use crate::bits;

/// A value made of two equally sized halves
pub trait Halves: Sized {
    /// The type of each half
    type Half: Copy;

    /// Combine `high` and `low` into one value
    fn join(high: Self::Half, low: Self::Half) -> Self;

    /// Split into `(high, low)`
    fn split(self) -> (Self::Half, Self::Half);
}

macro_rules! impl_halves_unsigned {
    ($($full:ty => $half:ty, $bits:expr);* $(;)?) => {$(
        impl Halves for $full {
            type Half = $half;

            #[inline]
            fn join(high: $half, low: $half) -> Self {
                ((high as $full) << $bits) | (low as $full)
            }

            #[inline]
            fn split(self) -> ($half, $half) {
                let mask = <$half>::MAX as $full;
                (((self >> $bits) & mask) as $half, (self & mask) as $half)
            }
        }
    )*};
}

macro_rules! impl_halves_signed {
    ($($full:ty => $half:ty, $ufull:ty, $uhalf:ty);* $(;)?) => {$(
        impl Halves for $full {
            type Half = $half;

            #[inline]
            fn join(high: $half, low: $half) -> Self {
                <$ufull>::join(high as $uhalf, low as $uhalf) as $full
            }

            #[inline]
            fn split(self) -> ($half, $half) {
                let (high, low) = (self as $ufull).split();
                (high as $half, low as $half)
            }
        }
    )*};
}

impl_halves_unsigned! {
    u16 => u8, 8;
    u32 => u16, 16;
    u64 => u32, 32;
}

impl_halves_signed! {
    i16 => i8, u16, u8;
    i32 => i16, u32, u16;
    i64 => i32, u64, u32;
}

impl Halves for f64 {
    type Half = f32;

    /// Pack the bit patterns of two floats into one double
    #[inline]
    fn join(high: f32, low: f32) -> Self {
        let combined = u64::join(bits::u32_from_f32(high), bits::u32_from_f32(low));
        bits::f64_from_u64(combined)
    }

    /// Unpack the upper and lower 32 bits of a double as floats
    #[inline]
    fn split(self) -> (f32, f32) {
        let (high, low) = bits::u64_from_f64(self).split();
        (bits::f32_from_u32(high), bits::f32_from_u32(low))
    }
}

/// Combine two halves into a full-width value
#[inline]
pub fn join<T: Halves>(high: T::Half, low: T::Half) -> T {
    T::join(high, low)
}

/// Split a full-width value into `(high, low)`
#[inline]
pub fn split<T: Halves>(value: T) -> (T::Half, T::Half) {
    value.split()
}
