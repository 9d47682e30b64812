// src/bits.rs
//! Bit-level reinterpretation between IEEE 754 floats and unsigned integers.
//!
//! These conversions never round: every bit pattern, including NaN payloads
//! and infinities, maps to exactly one value of the other type.

/// Construct an `f32` from its raw 32-bit pattern
#[inline]
pub fn f32_from_u32(value: u32) -> f32 {
    bytemuck::cast(value)
}

/// Extract the raw 32-bit pattern of an `f32`
#[inline]
pub fn u32_from_f32(value: f32) -> u32 {
    bytemuck::cast(value)
}

/// Construct an `f64` from its raw 64-bit pattern
#[inline]
pub fn f64_from_u64(value: u64) -> f64 {
    bytemuck::cast(value)
}

/// Extract the raw 64-bit pattern of an `f64`
#[inline]
pub fn u64_from_f64(value: f64) -> u64 {
    bytemuck::cast(value)
}

/// Check whether `value` is a power of two. Zero is not.
#[inline]
pub fn is_pow2(value: u64) -> bool {
    value != 0 && value & (value - 1) == 0
}

/// Base-2 logarithm of a power of two.
///
/// Returns `None` when `value` is not a power of two.
pub fn log2_int(value: u64) -> Option<u8> {
    if !is_pow2(value) {
        return None;
    }
    Some(value.trailing_zeros() as u8)
}
