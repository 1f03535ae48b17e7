//! Growth policy shared by the array-backed containers.
//!
//! Every container here manages its own logical capacity instead of leaning
//! on `Vec`'s amortization: capacity starts at a caller-chosen size, only
//! ever doubles, and grows at a fixed load factor of 0.7. The containers
//! differ only in the comparison that trips the resize, captured by
//! [`Trigger`].
//!
//! ```text
//! count / capacity >= 0.7   vector, stack, hash map, graph adjacency
//! count / capacity >  0.7   min-heap, graph node table
//! count == tier             trie children (8 -> 16 -> 26)
//! ```

use crate::{Error, Result};

/// Capacity used by `Default` impls.
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor numerator (0.7 = 7 / 10).
pub const LOAD_FACTOR_NUM: usize = 7;

/// Load factor denominator.
pub const LOAD_FACTOR_DEN: usize = 10;

/// When a container considers itself full enough to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Grow once `count >= 0.7 * capacity`.
    AtLoadFactor,
    /// Grow once `count > 0.7 * capacity`.
    OverLoadFactor,
}

impl Trigger {
    /// Returns `true` if a container holding `count` elements in `capacity`
    /// slots must grow.
    #[inline]
    pub const fn should_grow(self, count: usize, capacity: usize) -> bool {
        let lhs = count.saturating_mul(LOAD_FACTOR_DEN);
        let rhs = capacity.saturating_mul(LOAD_FACTOR_NUM);
        match self {
            Trigger::AtLoadFactor => lhs >= rhs,
            Trigger::OverLoadFactor => lhs > rhs,
        }
    }
}

/// Rejects the zero capacity every container refuses.
#[inline]
pub(crate) fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidArgument {
            reason: "capacity must be > 0",
        });
    }
    Ok(())
}

// =============================================================================
// Buffer - dense storage with an explicit logical capacity
// =============================================================================

/// Dense element storage with a logical capacity tracked separately from
/// the allocation.
///
/// Elements occupy `[0, len)`. Growth goes through [`grow_to`](Self::grow_to),
/// which reserves exactly through `try_reserve_exact` so an allocation
/// failure surfaces as [`Error::AllocationFailure`] and leaves the buffer
/// untouched.
#[derive(Debug, Clone)]
pub(crate) struct Buffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|e| Error::alloc(capacity, e))?;
        Ok(Self { items, capacity })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Raises the logical capacity to `new_capacity`.
    pub(crate) fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.capacity, "capacity never shrinks");
        let additional = new_capacity - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|e| Error::alloc(new_capacity, e))?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Doubles the logical capacity.
    #[inline]
    pub(crate) fn double(&mut self) -> Result<()> {
        self.grow_to(self.capacity.saturating_mul(2))
    }

    /// Grows ahead of a push if the element count after the push trips
    /// `trigger`.
    ///
    /// The capacity sequence is the same as growing right after the push,
    /// but a failed allocation leaves the container exactly as it was.
    #[inline]
    pub(crate) fn reserve_push(&mut self, trigger: Trigger) -> Result<()> {
        if trigger.should_grow(self.items.len() + 1, self.capacity) {
            self.double()?;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.items.len() < self.capacity, "push past capacity");
        self.items.push(value);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Inserts at `index`, shifting `[index, len)` right by one.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    /// Removes at `index`, shifting `(index, len)` left by one.
    #[inline]
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Removes at `index` by moving the last element into its slot.
    #[inline]
    pub(crate) fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Buffer<T> {
    /// A buffer of [`DEFAULT_CAPACITY`] slots, allocated infallibly.
    fn default() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }
}
