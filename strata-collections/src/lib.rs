//! Classic containers with explicit growth management.
//!
//! Every container here holds one fixed element type and manages its own
//! capacity instead of delegating to `Vec`'s amortization. Construction takes
//! an initial size, capacity only ever grows, and growth is driven by a shared
//! policy (see [`growth`]).
//!
//! # Design Philosophy
//!
//! Absence and failure are kept apart:
//!
//! ```text
//! Option<T>          - empty pop/peek, lookup miss
//! Result<T, Error>   - bad index, bad character, duplicate, allocation failure
//! ```
//!
//! Allocation goes through `try_reserve_exact`, and growth is performed before
//! the mutation it makes room for, so an [`Error::AllocationFailure`] always
//! leaves the container exactly as it was.
//!
//! Ownership replaces manual lifetimes. Trees and lists own their children
//! through `Box`; the doubly-linked list and the graph keep nodes in a
//! `slab::Slab` and link them by key, so back references never own anything.
//!
//! # Quick Start
//!
//! ```
//! use strata_collections::{BucketedHashMap, GrowableArray, MinHeap};
//!
//! let mut vec = GrowableArray::with_capacity(4).unwrap();
//! for v in [3, 1, 2] {
//!     vec.append(v).unwrap();
//! }
//! assert_eq!(vec.capacity(), 8);
//!
//! let mut heap = MinHeap::with_capacity(4).unwrap();
//! for &v in vec.as_slice() {
//!     heap.insert(v).unwrap();
//! }
//! assert_eq!(heap.pop(), Some(1));
//!
//! let mut map = BucketedHashMap::with_buckets(8).unwrap();
//! map.insert(7, "seven").unwrap();
//! assert_eq!(map.get(7), Some("seven"));
//! ```
//!
//! # Containers
//!
//! | Container | Element | Growth |
//! |-----------|---------|--------|
//! | [`GrowableArray`] | `i32` | doubles at `count >= 0.7 * capacity` |
//! | [`Deque`] | `i32` | doubles when a cursor hits an end, re-centers |
//! | [`Stack`] | `i32` | doubles at `count >= 0.7 * capacity` |
//! | [`MinHeap`] | `i32` | doubles at `count > 0.7 * capacity` |
//! | [`BucketedHashMap`] | `i32 -> String` | rehash at `count >= 0.7 * buckets` |
//! | [`SinglyLinkedList`] | `i32` | per node |
//! | [`DoublyLinkedList`] | `i32` | slab arena |
//! | [`BinaryTree`] | `i32` | per node |
//! | [`Trie`] | `a..=z` words | child tiers 8, 16, 26 |
//! | [`Graph`] | `i32` | node order and adjacency at 0.7 |

#![warn(missing_docs)]

pub mod deque;
pub mod dlist;
pub mod error;
pub mod graph;
pub mod growth;
pub mod heap;
pub mod hmap;
pub mod slist;
pub mod stack;
pub mod tree;
pub mod trie;
pub mod vector;

pub use deque::Deque;
pub use dlist::DoublyLinkedList;
pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
pub use heap::MinHeap;
pub use hmap::BucketedHashMap;
pub use slist::SinglyLinkedList;
pub use stack::Stack;
pub use tree::{BinaryTree, Direction, Path};
pub use trie::{Trie, TrieNode};
pub use vector::GrowableArray;
