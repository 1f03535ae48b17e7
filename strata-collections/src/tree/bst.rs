//! Binary search tree operations on [`BinaryTree`].

use core::cmp::Ordering;

use super::{BinaryTree, Link, Node};
use crate::{Error, Result};

impl BinaryTree {
    /// Inserts `value` in BST order.
    ///
    /// # Errors
    ///
    /// [`Error::Duplicate`] if `value` is already present. The tree is
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use strata_collections::{BinaryTree, Error};
    ///
    /// let mut bst = BinaryTree::new();
    /// for v in [50, 30, 70, 20, 40] {
    ///     bst.insert(v).unwrap();
    /// }
    /// assert_eq!(bst.insert(30), Err(Error::Duplicate(30)));
    /// assert_eq!(bst.inorder_values(), vec![20, 30, 40, 50, 70]);
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<()> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(Error::Duplicate(value)),
            };
        }
        *link = Some(Box::new(Node::new(value)));
        Ok(())
    }

    /// Finds `value` by following the ordering, discarding one subtree per
    /// step.
    pub fn binary_search(&self, value: i32) -> Option<&Node> {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Removes `value`, returning `true` if it was present.
    ///
    /// A node with two children takes the value of its in-order predecessor
    /// (the largest value in its left subtree), and the predecessor is then
    /// removed from that subtree.
    pub fn delete(&mut self, value: i32) -> bool {
        delete_from(&mut self.root, value)
    }

    /// Leftmost node.
    pub fn find_min(&self) -> Option<&Node> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node)
    }

    /// Rightmost node.
    pub fn find_max(&self) -> Option<&Node> {
        self.root().map(rightmost)
    }
}

fn rightmost(mut node: &Node) -> &Node {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

fn delete_from(link: &mut Link, value: i32) -> bool {
    let Some(node) = link.as_deref_mut() else {
        return false;
    };
    match value.cmp(&node.value) {
        Ordering::Less => return delete_from(&mut node.left, value),
        Ordering::Greater => return delete_from(&mut node.right, value),
        Ordering::Equal => {}
    }

    let Some(mut node) = link.take() else {
        return false;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let predecessor = rightmost(&left).value;
            node.value = predecessor;
            node.left = Some(left);
            node.right = Some(right);
            delete_from(&mut node.left, predecessor);
            Some(node)
        }
    };
    true
}
