// src/array/sort.rs
use crate::error::{BitconvError, Result};
use crate::types::Numeric;
use std::cmp::Ordering;

/// Sort `data[start..=stop]` in place with quicksort.
///
/// Uses the Hoare partition scheme with the pivot taken from the middle of
/// the range, so already sorted input does not degrade to quadratic time.
/// Nothing happens when `start >= stop`.
///
/// # Panics
///
/// Panics if `start < stop` and `stop` is not a valid index into `data`.
/// Use [`try_quick_sort`] to get an error instead.
///
/// # Example
///
/// ```
/// use bitconv_rs::array::quick_sort;
///
/// let mut data = [5, 3, 8, 1, 9, 2];
/// quick_sort(&mut data, 0, 5);
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn quick_sort<T: Numeric>(data: &mut [T], start: usize, stop: usize) {
    if start >= stop {
        return;
    }
    assert!(
        stop < data.len(),
        "quick_sort: stop index {} out of range for slice of length {}",
        stop,
        data.len()
    );

    let boundary = partition(data, start, stop);
    if boundary > start {
        quick_sort(data, start, boundary - 1);
    }
    quick_sort(data, boundary + 1, stop);
}

/// Partition `data[start..=stop]` around its middle element.
///
/// The left cursor advances past elements strictly less than the pivot and
/// the right cursor retreats past elements strictly greater. When both
/// cursors rest on equal elements the left one steps forward instead of
/// swapping. Once the cursors meet or cross, the right cursor is returned;
/// the element there is in its final sorted position, every element before
/// it is not greater and every element after it is not less.
///
/// Requires `start <= stop < data.len()`.
pub fn partition<T: Numeric>(data: &mut [T], start: usize, stop: usize) -> usize {
    let pivot = data[start + (stop - start) / 2];
    let mut i = start;
    let mut j = stop;

    loop {
        while data[i].total_cmp(&pivot) == Ordering::Less {
            i += 1;
        }
        while data[j].total_cmp(&pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }

        if data[i].total_cmp(&data[j]) == Ordering::Equal {
            i += 1;
        } else {
            data.swap(i, j);
        }
    }
}

/// Sort `data[left..=right]` in place with mergesort.
///
/// `scratch` is working storage shared by every recursive call; it must be
/// at least `right + 1` elements long and is never reallocated. On equal
/// elements the one from the left half is taken first, so the sort is
/// stable. Nothing happens when `left >= right`.
///
/// # Panics
///
/// Panics if `left < right` and either `right` is not a valid index into
/// `data` or `scratch` is shorter than `right + 1`. Use [`try_merge_sort`]
/// to get an error instead.
pub fn merge_sort<T: Numeric>(data: &mut [T], left: usize, right: usize, scratch: &mut [T]) {
    if left >= right {
        return;
    }
    assert!(
        right < data.len(),
        "merge_sort: right index {} out of range for slice of length {}",
        right,
        data.len()
    );
    assert!(
        right < scratch.len(),
        "merge_sort: scratch of length {} cannot hold index {}",
        scratch.len(),
        right
    );

    let mid = left + (right - left) / 2;
    merge_sort(data, left, mid, scratch);
    merge_sort(data, mid + 1, right, scratch);
    merge(data, left, mid, mid + 1, right, scratch);
}

/// Merge the sorted ranges `data[left..=left_end]` and
/// `data[right..=right_end]` through `scratch`, then copy the merged run back
/// over `data[left..=right_end]`.
///
/// The ranges must be adjacent (`right == left_end + 1`).
pub fn merge<T: Numeric>(
    data: &mut [T],
    left: usize,
    left_end: usize,
    right: usize,
    right_end: usize,
    scratch: &mut [T],
) {
    debug_assert_eq!(right, left_end + 1, "merge ranges must be adjacent");

    let save_start = left;
    let mut index = left;
    let mut l = left;
    let mut r = right;

    while l <= left_end && r <= right_end {
        // Ties go to the left half
        if data[r].total_cmp(&data[l]) == Ordering::Less {
            scratch[index] = data[r];
            r += 1;
        } else {
            scratch[index] = data[l];
            l += 1;
        }
        index += 1;
    }

    while l <= left_end {
        scratch[index] = data[l];
        l += 1;
        index += 1;
    }
    while r <= right_end {
        scratch[index] = data[r];
        r += 1;
        index += 1;
    }

    data[save_start..=right_end].copy_from_slice(&scratch[save_start..=right_end]);
}

/// Quicksort the whole slice
pub fn sort<T: Numeric>(data: &mut [T]) {
    if data.len() > 1 {
        let stop = data.len() - 1;
        quick_sort(data, 0, stop);
    }
}

/// Mergesort the whole slice, allocating one scratch buffer for the call
pub fn merge_sort_all<T: Numeric>(data: &mut [T]) {
    if data.len() > 1 {
        let mut scratch = vec![T::zero(); data.len()];
        let right = data.len() - 1;
        merge_sort(data, 0, right, &mut scratch);
    }
}

/// [`quick_sort`] with the index range validated up front
pub fn try_quick_sort<T: Numeric>(data: &mut [T], start: usize, stop: usize) -> Result<()> {
    if start < stop && stop >= data.len() {
        return Err(BitconvError::IndexOutOfRange {
            index: stop,
            len: data.len(),
        });
    }
    quick_sort(data, start, stop);
    Ok(())
}

/// [`merge_sort`] with the index range and scratch length validated up front
pub fn try_merge_sort<T: Numeric>(
    data: &mut [T],
    left: usize,
    right: usize,
    scratch: &mut [T],
) -> Result<()> {
    if left < right {
        if right >= data.len() {
            return Err(BitconvError::IndexOutOfRange {
                index: right,
                len: data.len(),
            });
        }
        if right >= scratch.len() {
            return Err(BitconvError::ScratchTooSmall {
                required: right + 1,
                found: scratch.len(),
            });
        }
    }
    merge_sort(data, left, right, scratch);
    Ok(())
}

/// Check whether the slice is in non-decreasing order
pub fn is_sorted<T: Numeric>(data: &[T]) -> bool {
    data.windows(2)
        .all(|pair| pair[0].total_cmp(&pair[1]) != Ordering::Greater)
}
