// src/array/reduce.rs
use crate::error::{BitconvError, Result};
use crate::types::Numeric;

/// Arithmetic mean of a slice, promoted to `f64`.
///
/// Returns `0.0` for an empty slice. Elements are summed left to right into a
/// single `f64` accumulator without compensation, so very long float inputs
/// accumulate ordinary rounding error.
///
/// # Example
///
/// ```
/// use bitconv_rs::array::average;
///
/// assert_eq!(average::<u8>(&[]), 0.0);
/// assert_eq!(average(&[1, 2, 3, 4]), 2.5);
/// ```
pub fn average<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for &value in data {
        sum += value.to_f64();
    }
    sum / data.len() as f64
}

/// Length of the full linear convolution of inputs of length `x_len` and
/// `h_len`; zero when either input is empty
pub fn convolution_len(x_len: usize, h_len: usize) -> usize {
    if x_len == 0 || h_len == 0 {
        0
    } else {
        x_len + h_len - 1
    }
}

/// Discrete linear convolution `y[n] = Σ x[m]·h[n-m]`.
///
/// Writes `x.len() + h.len() - 1` outputs to the front of `y`; anything past
/// that is left alone. If either input is empty or `y` is too short, `y` is
/// not touched at all and no status is reported. Use [`try_convolve`] to get
/// an error instead.
///
/// Integer products and sums wrap on overflow.
///
/// # Example
///
/// ```
/// use bitconv_rs::array::convolve;
///
/// let mut y = [0i32; 4];
/// convolve(&[1, 2, 3], &[1, 1], &mut y);
/// assert_eq!(y, [1, 3, 5, 3]);
/// ```
pub fn convolve<T: Numeric>(x: &[T], h: &[T], y: &mut [T]) {
    if let Err(err) = check_convolution(x.len(), h.len(), y.len()) {
        log::trace!("convolve skipped: {}", err);
        return;
    }
    convolve_unchecked(x, h, y);
}

/// [`convolve`] that reports why nothing was written
pub fn try_convolve<T: Numeric>(x: &[T], h: &[T], y: &mut [T]) -> Result<()> {
    check_convolution(x.len(), h.len(), y.len())?;
    convolve_unchecked(x, h, y);
    Ok(())
}

/// Convolve into a freshly allocated output of exactly the full length
pub fn convolve_to_vec<T: Numeric>(x: &[T], h: &[T]) -> Vec<T> {
    let mut y = vec![T::zero(); convolution_len(x.len(), h.len())];
    convolve(x, h, &mut y);
    y
}

fn check_convolution(x_len: usize, h_len: usize, y_len: usize) -> Result<usize> {
    if x_len == 0 || h_len == 0 {
        return Err(BitconvError::EmptyInput);
    }

    let required = x_len + h_len - 1;
    if y_len < required {
        return Err(BitconvError::OutputTooShort {
            required,
            found: y_len,
        });
    }
    Ok(required)
}

fn convolve_unchecked<T: Numeric>(x: &[T], h: &[T], y: &mut [T]) {
    let out_len = x.len() + h.len() - 1;
    y[..out_len].fill(T::zero());

    for n in 0..out_len {
        // Valid m: max(0, n - h_len + 1) ..= min(n, x_len - 1)
        let m_start = n.saturating_sub(h.len() - 1);
        let m_end = n.min(x.len() - 1);
        for m in m_start..=m_end {
            y[n] = y[n].add_product(x[m], h[n - m]);
        }
    }
}
