//! Comparison sorts and binary search.
//!
//! Everything here operates on plain `i32` slices. A
//! [`GrowableArray`](strata_collections::GrowableArray) is sorted through its
//! live elements with [`sort_array`].
//!
//! # Quick Start
//!
//! ```
//! use strata_algorithms::{binary_search, sort, Algorithm};
//!
//! let mut values = [3, 1, 4, 1, 5, 9, 2, 6, 5];
//! sort(&mut values, Algorithm::Merge);
//! assert_eq!(values, [1, 1, 2, 3, 4, 5, 5, 6, 9]);
//!
//! assert_eq!(binary_search(9, &values), Some(8));
//! ```

#![warn(missing_docs)]

pub mod search;
pub mod sort;

pub use search::{binary_search, recursive_binary_search};
pub use sort::{
    Algorithm, bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort, sort,
    sort_array,
};
pub use strata_collections::{Error, Result};
