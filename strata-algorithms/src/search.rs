//! Binary search over sorted `i32` slices.

use strata_collections::{Error, Result};

/// Iterative binary search. Returns the index of some element equal to
/// `value`, or `None`.
///
/// `values` must be sorted ascending.
///
/// ```
/// use strata_algorithms::binary_search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(7, &values), Some(3));
/// assert_eq!(binary_search(4, &values), None);
/// assert_eq!(binary_search(4, &[]), None);
/// ```
pub fn binary_search(value: i32, values: &[i32]) -> Option<usize> {
    let mut start = 0;
    let mut end = values.len();
    // half-open [start, end)
    while start < end {
        let mid = start + (end - start) / 2;
        match values[mid].cmp(&value) {
            core::cmp::Ordering::Less => start = mid + 1,
            core::cmp::Ordering::Greater => end = mid,
            core::cmp::Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Recursive binary search over the inclusive range `start..=end`.
///
/// An empty range (`start > end`) is simply "not found".
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if the range is non-empty and `end` is past
/// the slice.
///
/// ```
/// use strata_algorithms::recursive_binary_search;
///
/// let values = [2, 4, 6, 8];
/// assert_eq!(recursive_binary_search(6, &values, 0, 3), Ok(Some(2)));
/// assert_eq!(recursive_binary_search(2, &values, 1, 3), Ok(None));
/// assert_eq!(recursive_binary_search(2, &values, 3, 1), Ok(None));
/// assert!(recursive_binary_search(2, &values, 0, 4).is_err());
/// ```
pub fn recursive_binary_search(
    value: i32,
    values: &[i32],
    start: usize,
    end: usize,
) -> Result<Option<usize>> {
    if start > end {
        return Ok(None);
    }
    if end >= values.len() {
        return Err(Error::IndexOutOfRange {
            index: end,
            len: values.len(),
        });
    }

    let mid = start + (end - start) / 2;
    match values[mid].cmp(&value) {
        core::cmp::Ordering::Less => recursive_binary_search(value, values, mid + 1, end),
        core::cmp::Ordering::Greater => match mid.checked_sub(1) {
            Some(left_end) => recursive_binary_search(value, values, start, left_end),
            None => Ok(None),
        },
        core::cmp::Ordering::Equal => Ok(Some(mid)),
    }
}
