// src/lib.rs
//! # bitconv-rs
//!
//! A small, type-generic numeric toolkit for the ten primitive numeric types
//! (`i8`..`i64`, `u8`..`u64`, `f32`, `f64`).
//!
//! ## Features
//!
//! - 🔁 **Byte Codec**: Exact value ⇄ bytes conversion in a chosen or detected byte order
//! - 🧬 **Bit Reinterpretation**: Lossless float ⇄ integer bit patterns, NaN payloads included
//! - 🔀 **Reversal**: Byte-order flips of buffers and single values
//! - ✂️ **Split / Join**: Half-width packing for 16, 32 and 64-bit values
//! - 📊 **Array Routines**: In-place quicksort and mergesort, average and convolution
//! - 🎯 **Type Safe**: Closed, sealed trait over the supported types, checked at compile time
//!
//! ## Quick Start
//!
//! ### Encoding Values
//!
//! ```rust
//! use bitconv_rs::*;
//!
//! fn main() -> Result<()> {
//!     // Detect the host byte order once
//!     let converter = BitConverter::detect();
//!
//!     let bytes = converter.get_bytes(-1234.5f64);
//!     let value: f64 = converter.to_value(&bytes);
//!     assert_eq!(value, -1234.5);
//!
//!     // Decode from an arbitrary slice with a length check
//!     let port: u16 = BitConverter::big_endian().to_value_from_slice(&[0x1F, 0x90])?;
//!     assert_eq!(port, 8080);
//!     Ok(())
//! }
//! ```
//!
//! ### Splitting and Reversing
//!
//! ```rust
//! use bitconv_rs::*;
//!
//! assert_eq!(join::<u32>(0xDEAD, 0xBEEF), 0xDEAD_BEEF);
//! assert_eq!(split(0xDEAD_BEEFu32), (0xDEAD, 0xBEEF));
//! assert_eq!(reverse(0x1234u16), 0x3412);
//! ```
//!
//! ### Array Routines
//!
//! ```rust
//! use bitconv_rs::array;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! array::sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//!
//! assert_eq!(array::average(&data), 28.0 / 6.0);
//! assert_eq!(array::convolve_to_vec(&[1, 2], &[1, 1]), vec![1, 3, 2]);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod endian;
pub mod bits;
pub mod codec;
pub mod reverse;
pub mod width;
pub mod array;

// Re-export commonly used types at the crate root for convenience
pub use error::{BitconvError, Result};

// Type exports
pub use types::{Numeric, NumericKind};

// Byte order exports
pub use endian::Endianness;

// Codec exports
pub use codec::{get_bytes, to_value, BitConverter, ByteCodec, Word};

#[cfg(feature = "buffer")]
pub use codec::ValueBuffer;

// Reverser exports
pub use reverse::{reverse, reverse_bytes, Reverse};

// Width exports
pub use width::{join, split, Halves};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use bitconv_rs::prelude::*;
    //! ```

    pub use crate::error::{BitconvError, Result};
    pub use crate::types::{Numeric, NumericKind};
    pub use crate::endian::Endianness;
    pub use crate::codec::{BitConverter, ByteCodec};
    pub use crate::reverse::Reverse;
    pub use crate::width::Halves;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_codec_kinds_have_matching_widths() {
        fn width_of<T: ByteCodec>() -> usize {
            T::Bytes::default().as_ref().len()
        }

        assert_eq!(width_of::<i16>(), NumericKind::I16.size());
        assert_eq!(width_of::<u32>(), NumericKind::U32.size());
        assert_eq!(width_of::<f32>(), NumericKind::F32.size());
        assert_eq!(width_of::<i64>(), NumericKind::I64.size());
        assert_eq!(width_of::<f64>(), NumericKind::F64.size());
    }

    #[test]
    fn test_codec_and_reverser_agree() {
        let little = BitConverter::little_endian();
        let big = BitConverter::big_endian();
        let value = 0x0A0B_0C0Du32;

        let mut bytes = little.get_bytes(value);
        reverse_bytes(&mut bytes);
        assert_eq!(bytes, big.get_bytes(value));
        assert_eq!(little.to_value::<u32>(&big.get_bytes(value)), reverse(value));
    }

    #[test]
    fn test_split_of_decoded_bytes() {
        let converter = BitConverter::big_endian();
        let value: u32 = converter.to_value(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(split(value), (0x1234, 0x5678));
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let converter = BitConverter::new(Endianness::Little);
        assert_eq!(converter.get_bytes(1i16), [1, 0]);
        assert_eq!(<u16 as Halves>::join(1, 2), 0x0102);
        assert_eq!(<u16 as Numeric>::KIND, NumericKind::U16);
    }
}
