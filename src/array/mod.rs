// src/array/mod.rs
//! Generic in-place array routines
//!
//! Every routine works on slices of any [`Numeric`](crate::Numeric) element
//! type and never looks at byte order.
//!
//! - Sorting: [`quick_sort`], [`merge_sort`] and their whole-slice and
//!   checked variants
//! - Reduction: [`average`] and discrete linear [`convolve`]
//!
//! # Examples
//!
//! ```
//! use bitconv_rs::array::{average, merge_sort, quick_sort};
//!
//! let mut data = [4.5f32, -1.0, 3.25, 0.0];
//! quick_sort(&mut data, 0, 3);
//! assert_eq!(data, [-1.0, 0.0, 3.25, 4.5]);
//!
//! let mut words = [900u16, 12, 3000, 12];
//! let mut scratch = [0u16; 4];
//! merge_sort(&mut words, 0, 3, &mut scratch);
//! assert_eq!(words, [12, 12, 900, 3000]);
//!
//! assert_eq!(average(&words), 981.0);
//! ```

mod reduce;
mod sort;

pub use reduce::*;
pub use sort::*;
