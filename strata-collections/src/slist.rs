//! Singly-linked list over boxed nodes.

use crate::{Error, Result};

#[derive(Debug)]
struct Node {
    value: i32,
    next: Link,
}

type Link = Option<Box<Node>>;

/// A forward-only linked list of `i32`.
///
/// Every node is owned by its predecessor. Index operations are O(n).
///
/// # Example
///
/// ```
/// use strata_collections::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.append(2);
/// list.prepend(1);
/// list.append(4);
/// list.insert_at_index(2, 3).unwrap();
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(list.find_value(3), Some(2));
/// assert_eq!(list.remove_at_index(0), Ok(1));
/// ```
#[derive(Debug, Default)]
pub struct SinglyLinkedList {
    head: Link,
    len: usize,
}

impl SinglyLinkedList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` at the head. O(1).
    pub fn prepend(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Adds `value` after the last node. O(n).
    pub fn append(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<i32> {
        let mut cursor = self.head.as_deref();
        let mut i = 0;
        while let Some(node) = cursor {
            if i == index {
                return Ok(node.value);
            }
            i += 1;
            cursor = node.next.as_deref();
        }
        Err(Error::out_of_range(index, self.len))
    }

    /// Position of the first node holding `target`.
    pub fn find_value(&self, target: i32) -> Option<usize> {
        let mut cursor = self.head.as_deref();
        let mut i = 0;
        while let Some(node) = cursor {
            if node.value == target {
                return Some(i);
            }
            i += 1;
            cursor = node.next.as_deref();
        }
        None
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at_index(&mut self, index: usize) -> Result<i32> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }
        let link = self.link_at(index);
        let Some(mut removed) = link.take() else {
            return Err(Error::out_of_range(index, len));
        };
        *link = removed.next.take();
        self.len -= 1;
        Ok(removed.value)
    }

    /// Inserts `value` so it ends up at `index`.
    ///
    /// Only existing positions are accepted; use [`append`](Self::append)
    /// for the end.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn insert_at_index(&mut self, index: usize, value: i32) -> Result<()> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Values from head to tail.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value);
            cursor = node.next.as_deref();
        }
        out
    }

    /// The link that owns the node at `index` (the head link for 0).
    fn link_at(&mut self, index: usize) -> &mut Link {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
