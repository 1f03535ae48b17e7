//! Binary tree with path navigation, traversals, and BST operations.
//!
//! [`BinaryTree`] owns an optional root [`Node`]; every node exclusively owns
//! its children. The tree is usable two ways:
//!
//! - As a general binary tree, built by hand with [`Node::set_left`] and
//!   [`Node::set_right`] and navigated with [`Path`]s.
//! - As a binary search tree through [`BinaryTree::insert`],
//!   [`BinaryTree::delete`] and friends, which keep
//!   `left < node < right` and reject duplicates.
//!
//! Mixing the two is allowed, but the BST operations only give meaningful
//! answers on trees that satisfy the ordering.
//!
//! Insertion never recurses, so sorted input builds a tree as deep as it is
//! long. Dropping a node therefore moves its subtrees onto a heap-allocated
//! work stack and releases them one at a time instead of recursing per level.
//!
//! # Example
//!
//! ```
//! use strata_collections::tree::{BinaryTree, Node};
//!
//! let mut tree = BinaryTree::with_root(1);
//! let root = tree.root_mut().unwrap();
//! root.set_left(Node::new(2)).set_left(Node::new(4));
//! root.set_right(Node::new(3));
//!
//! assert_eq!(tree.get_at_path("LL"), Ok(4));
//! assert_eq!(tree.preorder_values(), vec![1, 2, 4, 3]);
//! assert_eq!(tree.height(), 3);
//! ```

mod bst;
mod path;

pub use path::{Direction, Path};

use crate::{Error, Result};

type Link = Option<Box<Node>>;

/// A tree node holding an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    /// Creates a leaf.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The stored value.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Overwrites the stored value.
    #[inline]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Left child.
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child.
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Left child, mutably.
    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    /// Right child, mutably.
    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    /// Replaces the left subtree with `child` and returns the new child.
    pub fn set_left(&mut self, child: Node) -> &mut Node {
        self.left.insert(Box::new(child))
    }

    /// Replaces the right subtree with `child` and returns the new child.
    pub fn set_right(&mut self, child: Node) -> &mut Node {
        self.right.insert(Box::new(child))
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn child(&self, direction: Direction) -> Option<&Node> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    fn child_mut(&mut self, direction: Direction) -> Option<&mut Node> {
        match direction {
            Direction::Left => self.left_mut(),
            Direction::Right => self.right_mut(),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        // each popped node is childless by the time it drops
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// An owned binary tree of `i32`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    root: Link,
}

impl BinaryTree {
    /// Creates an empty tree.
    #[inline]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree with a single root node.
    #[inline]
    pub fn with_root(value: i32) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
        }
    }

    /// Returns `true` if the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The root node, mutably.
    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    // =========================================================================
    // Path navigation
    // =========================================================================

    /// Resolves `path` to a node.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the tree is empty or the path steps past a
    /// leaf.
    pub fn node_at(&self, path: &Path) -> Result<&Node> {
        let mut node = self.root().ok_or(Error::InvalidPath)?;
        for &step in path.steps() {
            node = node.child(step).ok_or(Error::InvalidPath)?;
        }
        Ok(node)
    }

    /// Mutable form of [`node_at`](Self::node_at).
    pub fn node_at_mut(&mut self, path: &Path) -> Result<&mut Node> {
        let mut node = self.root_mut().ok_or(Error::InvalidPath)?;
        for &step in path.steps() {
            node = node.child_mut(step).ok_or(Error::InvalidPath)?;
        }
        Ok(node)
    }

    /// Returns the value at a textual path such as `"LR"`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] for anything other than `L`/`R`, or
    /// [`Error::InvalidPath`] if the path leads past a leaf.
    pub fn get_at_path(&self, path: &str) -> Result<i32> {
        let path: Path = path.parse()?;
        self.node_at(&path).map(Node::value)
    }

    /// Overwrites the value at a textual path.
    ///
    /// # Errors
    ///
    /// Same as [`get_at_path`](Self::get_at_path). The tree is unchanged on
    /// error.
    pub fn set_at_path(&mut self, path: &str, value: i32) -> Result<()> {
        let path: Path = path.parse()?;
        self.node_at_mut(&path)?.set_value(value);
        Ok(())
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Visits node, then left subtree, then right subtree.
    pub fn preorder<F: FnMut(i32)>(&self, mut visit: F) {
        fn walk<F: FnMut(i32)>(link: &Link, visit: &mut F) {
            if let Some(node) = link {
                visit(node.value);
                walk(&node.left, visit);
                walk(&node.right, visit);
            }
        }
        walk(&self.root, &mut visit);
    }

    /// Visits left subtree, then node, then right subtree. Sorted for a BST.
    pub fn inorder<F: FnMut(i32)>(&self, mut visit: F) {
        fn walk<F: FnMut(i32)>(link: &Link, visit: &mut F) {
            if let Some(node) = link {
                walk(&node.left, visit);
                visit(node.value);
                walk(&node.right, visit);
            }
        }
        walk(&self.root, &mut visit);
    }

    /// Visits left subtree, then right subtree, then node.
    pub fn postorder<F: FnMut(i32)>(&self, mut visit: F) {
        fn walk<F: FnMut(i32)>(link: &Link, visit: &mut F) {
            if let Some(node) = link {
                walk(&node.left, visit);
                walk(&node.right, visit);
                visit(node.value);
            }
        }
        walk(&self.root, &mut visit);
    }

    /// Preorder values.
    pub fn preorder_values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.preorder(|v| out.push(v));
        out
    }

    /// Inorder values.
    pub fn inorder_values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.inorder(|v| out.push(v));
        out
    }

    /// Postorder values.
    pub fn postorder_values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.postorder(|v| out.push(v));
        out
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Depth-first search without using ordering: node, then left, then
    /// right. Returns the first match.
    pub fn search(&self, value: i32) -> Option<&Node> {
        fn find(link: &Link, value: i32) -> Option<&Node> {
            let node = link.as_deref()?;
            if node.value == value {
                return Some(node);
            }
            find(&node.left, value).or_else(|| find(&node.right, value))
        }
        find(&self.root, value)
    }

    /// Total number of nodes.
    pub fn count_nodes(&self) -> usize {
        fn count(link: &Link) -> usize {
            link.as_deref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// Nodes on the longest root-to-leaf path. Empty is 0, a lone root is 1.
    pub fn height(&self) -> usize {
        fn height(link: &Link) -> usize {
            link.as_deref()
                .map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
        }
        height(&self.root)
    }
}
