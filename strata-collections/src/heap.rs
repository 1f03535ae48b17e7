//! Binary min-heap over a growable buffer.
//!
//! The tree is implicit in the index arithmetic: the children of slot `i`
//! live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//!
//! # Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | `insert` | O(log n) amortized |
//! | `pop` | O(log n) |
//! | `peek` | O(1) |

use crate::Result;
use crate::growth::{Buffer, Trigger};

/// A min-heap of `i32`.
///
/// For every slot `i` with a child `c < len`, `as_slice()[i] <= as_slice()[c]`.
/// Capacity doubles once the element count exceeds 70% of it.
///
/// # Example
///
/// ```
/// use strata_collections::MinHeap;
///
/// let mut heap = MinHeap::with_capacity(8).unwrap();
/// for v in [5, 1, 8, 3] {
///     heap.insert(v).unwrap();
/// }
///
/// assert_eq!(heap.peek(), Some(1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    buf: Buffer<i32>,
}

impl MinHeap {
    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            buf: Buffer::with_capacity(capacity)?,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The heap-ordered buffer. Only the first slot is guaranteed minimal.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        self.buf.as_slice()
    }

    /// Returns the minimum without removing it.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.buf.get(0).copied()
    }

    /// Inserts `value` and restores heap order.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`](crate::Error::AllocationFailure) if the
    /// heap needed to grow and could not; the heap is unchanged.
    pub fn insert(&mut self, value: i32) -> Result<()> {
        self.buf.reserve_push(Trigger::OverLoadFactor)?;
        self.buf.push(value);
        self.sift_up(self.buf.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum.
    pub fn pop(&mut self) -> Option<i32> {
        let len = self.buf.len();
        if len == 0 {
            return None;
        }
        if len == 1 {
            return self.buf.pop();
        }

        let min = self.buf.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Index of the smaller of slots `a` and `b`, ignoring slots past the
    /// end. Ties go to `b`. `None` if neither slot is live.
    pub fn choose_child(&self, a: usize, b: usize) -> Option<usize> {
        let items = self.buf.as_slice();
        match (items.get(a), items.get(b)) {
            (None, None) => None,
            (Some(_), None) => Some(a),
            (None, Some(_)) => Some(b),
            (Some(va), Some(vb)) => Some(if va < vb { a } else { b }),
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            let items = self.buf.as_slice();
            if items[child] < items[parent] {
                self.buf.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    /// Swaps down while the parent is `>=` its smaller child, so equal
    /// values also move.
    fn sift_down(&mut self, mut parent: usize) {
        while let Some(child) = self.choose_child(2 * parent + 1, 2 * parent + 2) {
            let items = self.buf.as_slice();
            if items[parent] < items[child] {
                break;
            }
            self.buf.swap(parent, child);
            parent = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap(heap: &MinHeap) -> bool {
        let items = heap.as_slice();
        (1..items.len()).all(|i| items[(i - 1) / 2] <= items[i])
    }

    #[test]
    fn empty_heap() {
        let mut heap = MinHeap::with_capacity(4).unwrap();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn single_element() {
        let mut heap = MinHeap::with_capacity(4).unwrap();
        heap.insert(42).unwrap();
        assert_eq!(heap.peek(), Some(42));
        assert_eq!(heap.pop(), Some(42));
        assert!(heap.is_empty());
    }

    #[test]
    fn two_elements_pop_leaves_root() {
        let mut heap = MinHeap::with_capacity(4).unwrap();
        heap.insert(2).unwrap();
        heap.insert(1).unwrap();
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.as_slice(), &[2]);
    }

    #[test]
    fn push_pop_order() {
        let mut heap = MinHeap::with_capacity(4).unwrap();
        for v in [5, 3, 7, 1, 9, 2, 8] {
            heap.insert(v).unwrap();
            assert!(is_heap(&heap));
        }
        let mut out = Vec::new();
        while let Some(v) = heap.pop() {
            assert!(is_heap(&heap));
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn duplicates_and_negatives() {
        let mut heap = MinHeap::with_capacity(2).unwrap();
        for v in [3, -1, 3, 0, -1, 3] {
            heap.insert(v).unwrap();
        }
        let out: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(out, vec![-1, -1, 0, 3, 3, 3]);
    }

    #[test]
    fn grows_over_load_factor() {
        let mut heap = MinHeap::with_capacity(10).unwrap();
        for v in 0..7 {
            heap.insert(v).unwrap();
        }
        // 7 == 0.7 * 10 is not over
        assert_eq!(heap.capacity(), 10);
        heap.insert(7).unwrap();
        assert_eq!(heap.capacity(), 20);
    }

    #[test]
    fn choose_child_bounds() {
        let mut heap = MinHeap::with_capacity(8).unwrap();
        for v in [1, 4, 4, 6] {
            heap.insert(v).unwrap();
        }
        assert_eq!(heap.as_slice(), &[1, 4, 4, 6]);
        // tie picks the second index
        assert_eq!(heap.choose_child(1, 2), Some(2));
        assert_eq!(heap.choose_child(3, 4), Some(3));
        assert_eq!(heap.choose_child(4, 3), Some(3));
        assert_eq!(heap.choose_child(5, 6), None);
    }

    #[test]
    fn insert_pop_counts() {
        let mut heap = MinHeap::with_capacity(3).unwrap();
        for i in 0..100 {
            heap.insert((i * 7 + 13) % 50).unwrap();
        }
        for _ in 0..40 {
            heap.pop();
        }
        assert_eq!(heap.len(), 60);
        assert!(is_heap(&heap));
    }

    #[test]
    fn stress_sorted_output() {
        let mut heap = MinHeap::with_capacity(16).unwrap();
        for i in 0..1000 {
            heap.insert((i * 7 + 13) % 1000).unwrap();
        }
        let mut prev = i32::MIN;
        while let Some(v) = heap.pop() {
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn default_capacity() {
        assert_eq!(MinHeap::default().capacity(), crate::growth::DEFAULT_CAPACITY);
    }
}
