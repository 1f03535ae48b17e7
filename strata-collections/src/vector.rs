//! Growable array of `i32` with an explicit doubling policy.

use crate::growth::{Buffer, Trigger};
use crate::{Error, Result};

/// A contiguous, growable array of `i32`.
///
/// Capacity starts at the requested size and doubles whenever the element
/// count reaches 70% of it, so there is always at least one free slot after
/// any operation. Capacity never shrinks; [`pop`](Self::pop) and
/// [`clear`](Self::clear) only lower the count.
///
/// # Example
///
/// ```
/// use strata_collections::GrowableArray;
///
/// let mut vec = GrowableArray::with_capacity(4).unwrap();
/// vec.append(10).unwrap();
/// vec.append(30).unwrap();
/// vec.insert(20, 1).unwrap();
///
/// assert_eq!(vec.as_slice(), &[10, 20, 30]);
/// assert_eq!(vec.capacity(), 8); // 3 >= 0.7 * 4
/// assert_eq!(vec.get(2), Ok(30));
/// assert!(vec.get(3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GrowableArray {
    buf: Buffer<i32>,
}

impl GrowableArray {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is 0, or
    /// [`Error::AllocationFailure`] if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            buf: Buffer::with_capacity(capacity)?,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the array needed to grow and could
    /// not. The array is unchanged in that case.
    pub fn append(&mut self, value: i32) -> Result<()> {
        self.buf.reserve_push(Trigger::AtLoadFactor)?;
        self.buf.push(value);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` must name a live element (`index < len`). Inserting at `len`
    /// is rejected; use [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] for a bad index, or
    /// [`Error::AllocationFailure`] if growth failed.
    pub fn insert(&mut self, value: i32, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }
        self.buf.reserve_push(Trigger::AtLoadFactor)?;
        self.buf.insert(index, value);
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<i32> {
        self.buf.pop()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32> {
        self.buf
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        let len = self.len();
        let slot = self
            .buf
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Drops every element. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Live elements, in order.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        self.buf.as_slice()
    }

    /// Live elements, mutably. Used by the in-place sorts.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.buf.as_mut_slice()
    }
}

impl Default for GrowableArray {
    fn default() -> Self {
        Self {
            buf: Buffer::default(),
        }
    }
}
