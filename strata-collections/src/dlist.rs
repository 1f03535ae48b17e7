//! Doubly-linked list with nodes stored in a slab arena.
//!
//! The list owns a [`Slab`] of nodes; `prev`/`next` are slab keys rather
//! than pointers, so back links never own anything and the whole chain is
//! released in one go when the list drops.

use slab::Slab;

use crate::{Error, Result};

#[derive(Debug, Clone)]
struct Node {
    value: i32,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list of `i32`.
///
/// Index lookups walk from whichever end is closer.
///
/// # Example
///
/// ```
/// use strata_collections::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.append(2);
/// list.append(3);
/// list.prepend(1);
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(list.to_vec_rev(), vec![3, 2, 1]);
///
/// list.insert_at_index(1, 9).unwrap();
/// assert_eq!(list.remove_at_index(0), Ok(1));
/// assert_eq!(list.to_vec(), vec![9, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoublyLinkedList {
    nodes: Slab<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl DoublyLinkedList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with arena room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First value, if any.
    #[inline]
    pub fn front(&self) -> Option<i32> {
        self.head.map(|key| self.nodes[key].value)
    }

    /// Last value, if any.
    #[inline]
    pub fn back(&self) -> Option<i32> {
        self.tail.map(|key| self.nodes[key].value)
    }

    /// Adds `value` at the front.
    pub fn prepend(&mut self, value: i32) {
        let key = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    /// Adds `value` at the back.
    pub fn append(&mut self, value: i32) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        let key = self.key_at(index)?;
        Ok(self.nodes[key].value)
    }

    /// Overwrites the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<()> {
        let key = self.key_at(index)?;
        self.nodes[key].value = value;
        Ok(())
    }

    /// Removes the node at `index`, relinking its neighbours.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at_index(&mut self, index: usize) -> Result<i32> {
        let key = self.key_at(index)?;
        let node = self.nodes.remove(key);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        Ok(node.value)
    }

    /// Inserts `value` so that it ends up at `index`, shifting the node
    /// previously there one step toward the back.
    ///
    /// `index` must name an existing node; use [`append`](Self::append) to
    /// add at the end.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn insert_at_index(&mut self, index: usize, value: i32) -> Result<()> {
        let before = self.key_at(index)?;
        let prev = self.nodes[before].prev;
        let key = self.nodes.insert(Node {
            value,
            prev,
            next: Some(before),
        });

        self.nodes[before].prev = Some(key);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        Ok(())
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Values from head to tail, following `next` links.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            out.push(node.value);
            cursor = node.next;
        }
        out
    }

    /// Values from tail to head, following `prev` links.
    pub fn to_vec_rev(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            out.push(node.value);
            cursor = node.prev;
        }
        out
    }

    fn key_at(&self, index: usize) -> Result<usize> {
        let len = self.len();
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        let found = if index <= len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|key| self.nodes[key].next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(len - 1 - index) {
                cursor = cursor.and_then(|key| self.nodes[key].prev);
            }
            cursor
        };
        found.ok_or(Error::out_of_range(index, len))
    }
}
