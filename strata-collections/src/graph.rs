//! Undirected simple graph with adjacency arrays.
//!
//! Nodes live in a [`Slab`] arena and are addressed by [`NodeId`]. The graph
//! also keeps the ids in a dense array (its "node order") that drives the
//! top-level loop of both traversals; removing a node swap-removes it from
//! that array, so the order is insertion order until the first removal.
//!
//! Adjacency arrays hold ids, never ownership. An edge `{a, b}` exists iff
//! `a`'s adjacency contains `b` exactly once and `b`'s contains `a` exactly
//! once. Self-loops are ignored.
//!
//! | Array | Initial | Grows when |
//! |-------|---------|------------|
//! | node order | 8 | `count > 0.7 * capacity` |
//! | adjacency | 8 | `count >= 0.7 * capacity` |

use std::collections::{HashSet, VecDeque};

use slab::Slab;

use crate::growth::{Buffer, Trigger};
use crate::{Error, Result};

/// Initial size of the node order and of each adjacency array.
pub const INITIAL_SIZE: usize = 8;

/// Handle to a node in a [`Graph`].
///
/// A handle pairs the node's arena slot with the serial number the graph
/// assigned when the node was added. Removing the node invalidates the
/// handle for good: a later [`Graph::add_node`] may reuse the slot, but not
/// the serial, so the stale handle keeps resolving to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    slot: usize,
    serial: u64,
}

impl NodeId {
    /// Arena slot of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.slot
    }
}

#[derive(Debug, Clone)]
struct GraphNode {
    value: i32,
    serial: u64,
    adjacency: Buffer<NodeId>,
}

impl GraphNode {
    #[inline]
    fn links_to(&self, other: NodeId) -> bool {
        self.adjacency.iter().any(|&id| id == other)
    }
}

/// An undirected graph of `i32` values.
///
/// # Example
///
/// ```
/// use strata_collections::Graph;
///
/// let mut graph = Graph::new().unwrap();
/// let a = graph.add_node(1).unwrap();
/// let b = graph.add_node(2).unwrap();
/// let c = graph.add_node(3).unwrap();
/// graph.add_edge(a, b).unwrap();
/// graph.add_edge(a, c).unwrap();
///
/// assert_eq!(graph.dfs_values(), vec![1, 2, 3]);
/// assert!(graph.has_edge(b, a));
///
/// graph.remove_node(a).unwrap();
/// assert!(!graph.has_edge(b, a));
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Slab<GraphNode>,
    order: Buffer<NodeId>,
    next_serial: u64,
}

impl Graph {
    /// Creates an empty graph.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the node order cannot be reserved.
    pub fn new() -> Result<Self> {
        Ok(Self {
            nodes: Slab::with_capacity(INITIAL_SIZE),
            order: Buffer::with_capacity(INITIAL_SIZE)?,
            next_serial: 0,
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Capacity of the node order.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.order.capacity()
    }

    /// Node ids in traversal order.
    #[inline]
    pub fn node_ids(&self) -> &[NodeId] {
        self.order.as_slice()
    }

    /// Value stored at `id`.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.node(id).map(|node| node.value)
    }

    /// Neighbours of `id`, in adjacency order.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).map(|node| node.adjacency.as_slice())
    }

    /// Returns `true` if `a` and `b` are connected. Unknown ids are never
    /// connected.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).is_some() && self.node(b).is_some_and(|node| node.links_to(a))
    }

    /// Adds a node holding `value`.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the node order or the node's
    /// adjacency array cannot be reserved. The graph is unchanged.
    pub fn add_node(&mut self, value: i32) -> Result<NodeId> {
        let adjacency = Buffer::with_capacity(INITIAL_SIZE)?;
        self.order.reserve_push(Trigger::OverLoadFactor)?;
        let serial = self.next_serial;
        let slot = self.nodes.insert(GraphNode {
            value,
            serial,
            adjacency,
        });
        self.next_serial += 1;
        let id = NodeId { slot, serial };
        self.order.push(id);
        Ok(id)
    }

    /// Connects `a` and `b`.
    ///
    /// Adding an existing edge is a no-op, as is `a == b`. Each direction is
    /// checked independently, so a half-present edge is repaired.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either id is unknown, or
    /// [`Error::AllocationFailure`] if an adjacency array could not grow.
    /// No link is added on error.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let (a_has_b, b_has_a) = match (self.node(a), self.node(b)) {
            (Some(na), Some(nb)) => (na.links_to(b), nb.links_to(a)),
            _ => return Err(Error::NotFound),
        };
        if a == b {
            return Ok(());
        }

        if !a_has_b {
            self.nodes[a.slot].adjacency.reserve_push(Trigger::AtLoadFactor)?;
        }
        if !b_has_a {
            self.nodes[b.slot].adjacency.reserve_push(Trigger::AtLoadFactor)?;
        }
        if !a_has_b {
            self.nodes[a.slot].adjacency.push(b);
        }
        if !b_has_a {
            self.nodes[b.slot].adjacency.push(a);
        }
        Ok(())
    }

    /// Disconnects `a` and `b`. Missing edges are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if either id is unknown.
    pub fn remove_edges(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if self.node(a).is_none() || self.node(b).is_none() {
            return Err(Error::NotFound);
        }
        self.remove_edge(a, b);
        self.remove_edge(b, a);
        Ok(())
    }

    /// Removes `id` and every edge touching it, returning its value.
    ///
    /// The last id in the node order takes the removed node's place.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `id` is unknown.
    pub fn remove_node(&mut self, id: NodeId) -> Result<i32> {
        if self.node(id).is_none() {
            return Err(Error::NotFound);
        }
        let node = self.nodes.remove(id.slot);
        for &neighbor in node.adjacency.iter() {
            self.remove_edge(id, neighbor);
        }
        if let Some(pos) = self.order.iter().position(|&n| n == id) {
            self.order.swap_remove(pos);
        }
        Ok(node.value)
    }

    /// The live node behind `id`, if its slot still holds the same serial.
    #[inline]
    fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.slot).filter(|node| node.serial == id.serial)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut GraphNode> {
        self.nodes.get_mut(id.slot).filter(|node| node.serial == id.serial)
    }

    /// Drops `removed` from `node`'s adjacency by swapping in the last entry.
    fn remove_edge(&mut self, removed: NodeId, node: NodeId) {
        let Some(node) = self.node_mut(node) else {
            return;
        };
        if let Some(pos) = node.adjacency.iter().position(|&n| n == removed) {
            node.adjacency.swap_remove(pos);
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Depth-first traversal covering every component.
    ///
    /// Each top-level node in node order that has not been reached yet is
    /// visited, then its unvisited neighbours are walked recursively. A node
    /// is marked before descending and visited before its neighbours.
    pub fn traverse_dfs<F: FnMut(NodeId, i32)>(&self, mut visit: F) {
        let mut visited = HashSet::with_capacity(self.len());
        for &id in self.order.iter() {
            if visited.insert(id) {
                visit(id, self.nodes[id.slot].value);
                self.dfs_from(id, &mut visited, &mut visit);
            }
        }
    }

    fn dfs_from<F: FnMut(NodeId, i32)>(
        &self,
        id: NodeId,
        visited: &mut HashSet<NodeId>,
        visit: &mut F,
    ) {
        for &next in self.nodes[id.slot].adjacency.iter() {
            if visited.insert(next) {
                visit(next, self.nodes[next.slot].value);
                self.dfs_from(next, visited, visit);
            }
        }
    }

    /// Breadth-first traversal covering every component.
    ///
    /// Nodes are marked when they are enqueued, so none is queued twice.
    pub fn traverse_bfs<F: FnMut(NodeId, i32)>(&self, mut visit: F) {
        let mut visited = HashSet::with_capacity(self.len());
        let mut queue = VecDeque::new();

        for &start in self.order.iter() {
            if !visited.insert(start) {
                continue;
            }
            queue.push_back(start);
            while let Some(id) = queue.pop_front() {
                let node = &self.nodes[id.slot];
                visit(id, node.value);
                for &next in node.adjacency.iter() {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    /// Values in depth-first order.
    pub fn dfs_values(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        self.traverse_dfs(|_, value| out.push(value));
        out
    }

    /// Values in breadth-first order.
    pub fn bfs_values(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        self.traverse_bfs(|_, value| out.push(value));
        out
    }
}
