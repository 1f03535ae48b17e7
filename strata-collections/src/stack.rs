//! LIFO stack over a growable buffer.

use crate::Result;
use crate::growth::{Buffer, Trigger};

/// A last-in, first-out stack of `i32`.
///
/// Grows by doubling once the element count reaches 70% of capacity, the
/// same policy as [`GrowableArray`](crate::GrowableArray).
///
/// # Example
///
/// ```
/// use strata_collections::Stack;
///
/// let mut stack = Stack::with_capacity(4).unwrap();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
///
/// assert_eq!(stack.peek(), Some(2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stack {
    buf: Buffer<i32>,
}

impl Stack {
    /// Creates an empty stack with room for `capacity` elements.
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

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`](crate::Error::AllocationFailure) if
    /// growth failed; the stack is unchanged.
    pub fn push(&mut self, value: i32) -> Result<()> {
        self.buf.reserve_push(Trigger::AtLoadFactor)?;
        self.buf.push(value);
        Ok(())
    }

    /// Removes and returns the top element.
    #[inline]
    pub fn pop(&mut self) -> Option<i32> {
        self.buf.pop()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.buf.last().copied()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}
