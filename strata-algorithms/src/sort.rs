//! In-place comparison sorts over `i32` slices.
//!
//! | Algorithm | Time (worst) | Extra space | Stable |
//! |-----------|--------------|-------------|--------|
//! | [`bubble_sort`] | O(n^2) | O(1) | yes |
//! | [`selection_sort`] | O(n^2) | O(1) | no |
//! | [`insertion_sort`] | O(n^2) | O(1) | yes |
//! | [`merge_sort`] | O(n log n) | O(n) per merge | yes |
//! | [`quick_sort`] | O(n^2) | O(log n) stack typical | no |
//!
//! Empty and single-element slices are already sorted and left untouched.

use core::fmt;

use strata_collections::GrowableArray;

/// Selects one of the sorts in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`selection_sort`]
    Selection,
    /// [`insertion_sort`]
    Insertion,
    /// [`merge_sort`]
    Merge,
    /// [`quick_sort`]
    Quick,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `values` ascending with `algorithm`.
///
/// # Example
///
/// ```
/// use strata_algorithms::sort::{sort, Algorithm};
///
/// for algorithm in Algorithm::ALL {
///     let mut values = [5, 2, 8, 1, 9];
///     sort(&mut values, algorithm);
///     assert_eq!(values, [1, 2, 5, 8, 9]);
/// }
/// ```
pub fn sort(values: &mut [i32], algorithm: Algorithm) {
    match algorithm {
        Algorithm::Bubble => bubble_sort(values),
        Algorithm::Selection => selection_sort(values),
        Algorithm::Insertion => insertion_sort(values),
        Algorithm::Merge => merge_sort(values),
        Algorithm::Quick => quick_sort(values),
    }
}

/// Sorts the live elements of `array` in place.
pub fn sort_array(array: &mut GrowableArray, algorithm: Algorithm) {
    sort(array.as_mut_slice(), algorithm);
}

/// Repeated adjacent-swap passes. Each pass settles the largest remaining
/// value at the end, so the scanned range shrinks by one; a pass with no
/// swaps ends the sort.
pub fn bubble_sort(values: &mut [i32]) {
    let mut end = values.len();
    loop {
        let mut swapped = false;
        for i in 1..end {
            if values[i - 1] > values[i] {
                values.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Moves the minimum of the unsorted suffix into place, left to right.
pub fn selection_sort(values: &mut [i32]) {
    let len = values.len();
    for start in 0..len.saturating_sub(1) {
        let mut min = start;
        for i in start + 1..len {
            if values[i] < values[min] {
                min = i;
            }
        }
        values.swap(start, min);
    }
}

/// Shifts larger predecessors right until the key's slot is found.
pub fn insertion_sort(values: &mut [i32]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// Top-down merge sort. The left half takes the middle element, and ties
/// are taken from the left run first.
pub fn merge_sort(values: &mut [i32]) {
    let len = values.len();
    if len <= 1 {
        return;
    }
    let mid = (len + 1) / 2;
    merge_sort(&mut values[..mid]);
    merge_sort(&mut values[mid..]);
    merge(values, mid);
}

/// Merges the sorted runs `values[..mid]` and `values[mid..]` through one
/// temporary buffer sized to the whole range.
fn merge(values: &mut [i32], mid: usize) {
    let mut merged = Vec::with_capacity(values.len());
    let (mut left, mut right) = (0, mid);

    while left < mid && right < values.len() {
        if values[left] <= values[right] {
            merged.push(values[left]);
            left += 1;
        } else {
            merged.push(values[right]);
            right += 1;
        }
    }
    merged.extend_from_slice(&values[left..mid]);
    merged.extend_from_slice(&values[right..]);

    values.copy_from_slice(&merged);
}

/// Quicksort with a Lomuto partition around the last element.
pub fn quick_sort(values: &mut [i32]) {
    if values.len() <= 1 {
        return;
    }
    let pivot = partition(values);
    let (left, right) = values.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition: everything `<=` the pivot moves left of it. Returns the
/// pivot's final index.
fn partition(values: &mut [i32]) -> usize {
    let last = values.len() - 1;
    let pivot = values[last];
    let mut store = 0;
    for j in 0..last {
        if values[j] <= pivot {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, last);
    store
}
