// src/types.rs
use bytemuck::Pod;
use num_traits::{AsPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;

/// The ten primitive numeric kinds every generic routine is defined over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl NumericKind {
    /// Every supported kind, signed integers first
    pub const ALL: [NumericKind; 10] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// Width of a value of this kind in bytes
    pub fn size(&self) -> usize {
        match self {
            NumericKind::I8 | NumericKind::U8 => 1,
            NumericKind::I16 | NumericKind::U16 => 2,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 4,
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 => 8,
        }
    }

    /// Width of a value of this kind in bits
    pub fn bits(&self) -> u32 {
        self.size() as u32 * 8
    }

    /// Check if this is an integer kind
    pub fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Check if this is a floating point kind
    pub fn is_float(&self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    /// Check if values of this kind carry a sign
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            NumericKind::I8
                | NumericKind::I16
                | NumericKind::I32
                | NumericKind::I64
                | NumericKind::F32
                | NumericKind::F64
        )
    }

    /// Whether the byte codec has a dedicated entry point for this kind.
    ///
    /// 8-bit integers are already a single byte, so only widths of 16 bits
    /// and above are encoded.
    pub fn has_byte_codec(&self) -> bool {
        self.size() > 1
    }

    /// Get the Rust name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NumericKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric element type.
///
/// Implemented for exactly `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`,
/// `u64`, `f32` and `f64`. The trait is sealed, so any other element type is
/// rejected at compile time.
pub trait Numeric:
    sealed::Sealed
    + Pod
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// Runtime tag of the implementing type
    const KIND: NumericKind;

    /// Promote to double precision
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Total ordering used by the sort engine.
    ///
    /// Integers use their natural order. Floats use the IEEE 754 total order,
    /// which agrees with `<` on non-NaN values apart from placing `-0.0`
    /// before `+0.0`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `self + a * b`. Integer arithmetic wraps on overflow.
    fn add_product(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn add_product(self, a: Self, b: Self) -> Self {
                self.wrapping_add(a.wrapping_mul(b))
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }

            #[inline]
            fn add_product(self, a: Self, b: Self) -> Self {
                self + a * b
            }
        }
    )*};
}

impl_numeric_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl_numeric_float! {
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: Numeric>(_: T) -> NumericKind {
        T::KIND
    }

    #[test]
    fn test_kind_sizes_match_memory_layout() {
        assert_eq!(NumericKind::I8.size(), std::mem::size_of::<i8>());
        assert_eq!(NumericKind::U16.size(), std::mem::size_of::<u16>());
        assert_eq!(NumericKind::F32.size(), std::mem::size_of::<f32>());
        assert_eq!(NumericKind::U64.size(), std::mem::size_of::<u64>());
        assert_eq!(NumericKind::F64.bits(), 64);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(kind_of(0i8), NumericKind::I8);
        assert_eq!(kind_of(0u32), NumericKind::U32);
        assert_eq!(kind_of(0.0f32), NumericKind::F32);
        assert_eq!(kind_of(0.0f64), NumericKind::F64);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NumericKind::I16.is_signed());
        assert!(!NumericKind::U16.is_signed());
        assert!(NumericKind::F64.is_float());
        assert!(NumericKind::U8.is_integer());
        assert!(!NumericKind::I8.has_byte_codec());
        assert!(NumericKind::I16.has_byte_codec());
    }

    #[test]
    fn test_kind_names_roundtrip() {
        for kind in NumericKind::ALL {
            assert_eq!(NumericKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(NumericKind::from_name("i128"), None);
        assert_eq!(NumericKind::F32.to_string(), "f32");
    }

    #[test]
    fn test_add_product_wraps_integers() {
        assert_eq!(250u8.add_product(3, 2), 0);
        assert_eq!(i8::MAX.add_product(1, 1), i8::MIN);
        assert_eq!(1.5f64.add_product(2.0, 0.25), 2.0);
    }

    #[test]
    fn test_float_total_order() {
        assert_eq!(Numeric::total_cmp(&-0.0f32, &0.0f32), Ordering::Less);
        assert_eq!(Numeric::total_cmp(&1.0f64, &f64::NAN), Ordering::Less);
        assert_eq!(Numeric::total_cmp(&3i32, &3i32), Ordering::Equal);
    }

    #[test]
    fn test_to_f64_promotion() {
        assert_eq!((-3i16).to_f64(), -3.0);
        assert_eq!(u64::MAX.to_f64(), 2f64.powi(64));
        assert_eq!(0.5f32.to_f64(), 0.5);
    }
}
