//! Error types shared by every container.
//!
//! Absence is not an error: lookups that can miss return `Option`, and
//! empty-container pops return `None`. The variants here are the named
//! conditions a caller may want to render or recover from.

use std::collections::TryReserveError;

/// Errors reported by container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required argument was unusable (zero capacity, stale handle, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },

    /// A character outside the accepted alphabet (tree paths, trie words).
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),

    /// A tree path stepped past a leaf.
    #[error("invalid path: node does not exist")]
    InvalidPath,

    /// Index outside the live range of a container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Live length at the time of the call.
        len: usize,
    },

    /// Backing storage could not be obtained. The container is unchanged.
    #[error("could not allocate storage for {requested} slots")]
    AllocationFailure {
        /// Number of slots that were requested.
        requested: usize,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },

    /// The requested element is not present.
    #[error("not found")]
    NotFound,

    /// A BST insert hit an existing value.
    #[error("duplicate value {0}")]
    Duplicate(i32),
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub(crate) fn alloc(requested: usize, source: TryReserveError) -> Self {
        Self::AllocationFailure { requested, source }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
