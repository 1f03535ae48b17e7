//! Double-ended queue that grows outward from the middle of its buffer.
//!
//! Unlike a ring buffer, the occupied range never wraps. Both cursors start at
//! the midpoint; when either one would step off its end of the buffer, the
//! buffer doubles and the occupied range is copied back to the new middle.
//!
//! ```text
//! capacity 10, after push_front(a), push_back(b), push_back(c):
//!
//!   0   1   2   3   4   5   6   7   8   9
//! [   |   |   |   |   | a | b | c |   |   ]
//!                       ^front    ^back
//! ```

use crate::growth::check_capacity;
use crate::{Error, Result};

/// A double-ended queue of `i32` over a single contiguous buffer.
///
/// `front_index` is the first occupied slot and `back_index` the last, so the
/// occupied range is `[front_index, back_index]` and holds exactly
/// [`len`](Self::len) elements. A push into an empty deque re-centers both
/// cursors on `capacity / 2`.
///
/// # Example
///
/// ```
/// use strata_collections::Deque;
///
/// let mut deque = Deque::with_capacity(10).unwrap();
/// deque.push_front(1).unwrap();
/// deque.push_back(2).unwrap();
/// deque.push_front(0).unwrap();
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.pop_back(), Some(2));
/// assert_eq!(deque.pop_back(), Some(1));
/// assert_eq!(deque.pop_back(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Deque {
    buf: Vec<i32>,
    len: usize,
    front: usize,
    back: usize,
}

impl Deque {
    /// Creates an empty deque with `capacity` slots.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is 0, or
    /// [`Error::AllocationFailure`] if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        let buf = zeroed(capacity)?;
        let mid = capacity / 2;
        Ok(Self {
            buf,
            len: 0,
            front: mid,
            back: mid,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the buffer size.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Index of the front cursor within the buffer.
    #[inline]
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Index of the back cursor within the buffer.
    #[inline]
    pub fn back_index(&self) -> usize {
        self.back
    }

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        Some(self.buf[self.front])
    }

    /// Returns the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        Some(self.buf[self.back])
    }

    /// Occupied range, front to back.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        if self.is_empty() {
            return &[];
        }
        &self.buf[self.front..=self.back]
    }

    /// Pushes `value` onto the front.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if a resize was needed and failed. The
    /// deque is unchanged in that case.
    pub fn push_front(&mut self, value: i32) -> Result<()> {
        if self.is_empty() {
            self.place_first(value);
            return Ok(());
        }
        while self.front == 0 {
            self.resize()?;
        }
        self.front -= 1;
        self.buf[self.front] = value;
        self.len += 1;
        Ok(())
    }

    /// Pushes `value` onto the back.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if a resize was needed and failed. The
    /// deque is unchanged in that case.
    pub fn push_back(&mut self, value: i32) -> Result<()> {
        if self.is_empty() {
            self.place_first(value);
            return Ok(());
        }
        while self.back + 1 >= self.buf.len() {
            self.resize()?;
        }
        self.back += 1;
        self.buf[self.back] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.front];
        self.len -= 1;
        if self.len > 0 {
            self.front += 1;
        }
        Some(value)
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.back];
        self.len -= 1;
        if self.len > 0 {
            self.back -= 1;
        }
        Some(value)
    }

    /// Drops every element and re-centers the cursors. Capacity is kept.
    pub fn clear(&mut self) {
        let mid = self.buf.len() / 2;
        self.len = 0;
        self.front = mid;
        self.back = mid;
    }

    fn place_first(&mut self, value: i32) {
        let mid = self.buf.len() / 2;
        self.front = mid;
        self.back = mid;
        self.buf[mid] = value;
        self.len = 1;
    }

    /// Doubles the buffer and copies the occupied range so it starts at
    /// `new_capacity / 2 - len / 2`.
    fn resize(&mut self) -> Result<()> {
        let new_capacity = self.buf.len().saturating_mul(2);
        let mut new_buf = zeroed(new_capacity)?;
        let start = new_capacity / 2 - self.len / 2;

        if self.len == 0 {
            self.front = start;
            self.back = start;
        } else {
            new_buf[start..start + self.len].copy_from_slice(&self.buf[self.front..=self.back]);
            self.front = start;
            self.back = start + self.len - 1;
        }
        self.buf = new_buf;
        Ok(())
    }
}

impl Default for Deque {
    fn default() -> Self {
        let capacity = crate::growth::DEFAULT_CAPACITY;
        let mid = capacity / 2;
        Self {
            buf: vec![0; capacity],
            len: 0,
            front: mid,
            back: mid,
        }
    }
}

fn zeroed(capacity: usize) -> Result<Vec<i32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|e| Error::alloc(capacity, e))?;
    buf.resize(capacity, 0);
    Ok(buf)
}
