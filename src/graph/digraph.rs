//! `DirectedGraph` — a value-keyed directed graph behind an ordered
//! container interface.
//!
//! Nodes live in a `Vec` in insertion order; edges are the positions of
//! their targets within that ordering. All mutation funnels through the
//! container so the positional index algebra stays consistent:
//!
//! - node removal renumbers every adjacency index behind the removed slot
//! - edge operations are idempotent booleans, never panics
//! - lookups are linear scans over value equality
//!
//! # Performance
//! - `insert`: O(n) (duplicate scan)
//! - `remove`: O(n · average out-degree) (renumbering pass)
//! - `insert_edge` / `remove_edge`: O(n) lookup + O(log degree) set update
//! - `get` / indexing: O(1)

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

use super::iter::{Iter, IterMut, Neighbors};
use super::GraphNode;

/// A mutable directed graph of unique values.
///
/// The container owns an ordered sequence of nodes. A node's *position* is
/// its offset in that sequence; adjacency sets store target positions.
/// Positions are not stable: structural mutation (node removal, `swap`)
/// renumbers or reassigns them. Callers that hold positions across
/// mutations must refresh them via [`DirectedGraph::position_of`].
#[derive(Clone)]
pub struct DirectedGraph<T> {
    nodes: Vec<GraphNode<T>>,
}

impl<T> DirectedGraph<T> {
    /// Creates an empty graph.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes (alias of [`len`](Self::len), matching
    /// the usual graph-container vocabulary).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.adjacency().len()).sum()
    }

    /// Returns the number of nodes the graph can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the theoretical upper bound on the number of nodes.
    pub fn max_len(&self) -> usize {
        isize::MAX.unsigned_abs()
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        #[cfg(feature = "tracing")]
        tracing::trace!("graph cleared");
    }

    /// Exchanges the contents of two graphs in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.nodes, &mut other.nodes);
    }

    /// Returns a shared reference to the value at `position`, or `None`
    /// if the position is out of range.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.nodes.get(position).map(GraphNode::value)
    }

    /// Returns a mutable reference to the value at `position`, or `None`
    /// if the position is out of range.
    ///
    /// Writing through the reference must preserve value uniqueness across
    /// the graph; the container does not re-check it.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.nodes.get_mut(position).map(GraphNode::value_mut)
    }

    /// Returns a value-only iterator over the nodes in positional order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a mutable value-only iterator over the nodes in positional
    /// order.
    ///
    /// Writing through the yielded references must preserve value
    /// uniqueness across the graph.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.nodes)
    }

    pub(crate) fn nodes(&self) -> &[GraphNode<T>] {
        &self.nodes
    }

    pub(crate) fn into_nodes(self) -> Vec<GraphNode<T>> {
        self.nodes
    }

    /// Renumbers every adjacency set for the removal of the node at
    /// `removed`: the index itself is dropped (the edge dangles), and
    /// every index behind it shifts down by one slot.
    ///
    /// The pass covers **all** nodes, not just neighbors of the removed
    /// one, and runs while the node is still in the sequence so `removed`
    /// is a valid position.
    fn unlink_position(&mut self, removed: usize) {
        debug_assert!(removed < self.nodes.len());
        for node in &mut self.nodes {
            let adjacency = node.adjacency_mut();
            if adjacency.is_empty() {
                continue;
            }
            let renumbered = adjacency
                .iter()
                .filter(|&&index| index != removed)
                .map(|&index| if index > removed { index - 1 } else { index })
                .collect();
            *adjacency = renumbered;
        }
    }

    /// Validates the adjacency-index invariant in debug builds.
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            let len = self.nodes.len();
            for (position, node) in self.nodes.iter().enumerate() {
                for &target in node.adjacency() {
                    debug_assert!(
                        target < len,
                        "adjacency index {target} of node {position} out of range (len {len})"
                    );
                }
            }
        }
    }
}

impl<T: PartialEq> DirectedGraph<T> {
    /// Returns the position of the node holding `value`, if present.
    ///
    /// Lookup compares values only; edges never participate in node
    /// identity. O(n).
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node.value() == value)
    }

    /// Returns `true` if a node with `value` exists.
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Inserts `value` as a new node, unless an equal value is already
    /// present.
    ///
    /// Returns the value's position and whether a node was actually
    /// inserted. On a duplicate the graph is left untouched and the
    /// existing position is reported.
    pub fn insert(&mut self, value: T) -> (usize, bool) {
        if let Some(existing) = self.position_of(&value) {
            return (existing, false);
        }
        let position = self.nodes.len();
        self.nodes.push(GraphNode::new(value));
        #[cfg(feature = "tracing")]
        tracing::trace!(position, "node inserted");
        self.debug_validate();
        (position, true)
    }

    /// Inserts `value`, accepting (and ignoring) a position hint.
    ///
    /// Present for interface parity with hinted-insertion containers; the
    /// hint carries no meaning for a linear-scan container. Returns the
    /// value's position, existing or new.
    pub fn insert_with_hint(&mut self, hint: usize, value: T) -> usize {
        let _ = hint;
        self.insert(value).0
    }

    /// Inserts a directed edge from the node holding `from` to the node
    /// holding `to`.
    ///
    /// Returns `false` if either endpoint is absent (no mutation) or the
    /// edge already exists; `true` only when the edge was newly added.
    /// The operation is idempotent.
    pub fn insert_edge(&mut self, from: &T, to: &T) -> bool {
        let (Some(from_position), Some(to_position)) =
            (self.position_of(from), self.position_of(to))
        else {
            return false;
        };
        let added = self.nodes[from_position].adjacency_mut().insert(to_position);
        #[cfg(feature = "tracing")]
        tracing::trace!(from_position, to_position, added, "edge insert");
        self.debug_validate();
        added
    }

    /// Ensures there is no edge from the node holding `from` to the node
    /// holding `to`.
    ///
    /// Returns `false` if either endpoint is absent; otherwise `true`,
    /// whether or not the edge existed beforehand.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        let (Some(from_position), Some(to_position)) =
            (self.position_of(from), self.position_of(to))
        else {
            return false;
        };
        self.nodes[from_position].adjacency_mut().remove(&to_position);
        #[cfg(feature = "tracing")]
        tracing::trace!(from_position, to_position, "edge removed");
        true
    }

    /// Returns `true` if an edge from `from` to `to` exists.
    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        let (Some(from_position), Some(to_position)) =
            (self.position_of(from), self.position_of(to))
        else {
            return false;
        };
        self.nodes[from_position].adjacency().contains(&to_position)
    }

    /// Removes the node holding `value` and every edge that refers to it.
    ///
    /// Returns `false` if the value is absent. On removal the positions of
    /// all later nodes shift down by one; every adjacency set in the graph
    /// is renumbered accordingly before the node leaves the sequence.
    /// O(n · average out-degree).
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(position) = self.position_of(value) else {
            return false;
        };
        self.remove_at(position);
        true
    }

    /// Removes the node at `position`, returning its value, or `None` if
    /// the position is out of range.
    ///
    /// After removal, later nodes shift down one slot, so `position`
    /// itself addresses what was the next node.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.nodes.len() {
            return None;
        }
        self.unlink_position(position);
        let node = self.nodes.remove(position);
        #[cfg(feature = "tracing")]
        tracing::trace!(position, "node removed");
        self.debug_validate();
        Some(node.into_value())
    }

    /// Removes the nodes in the given positional range, returning how many
    /// were removed.
    ///
    /// Each removal renumbers adjacency sets relative to the node's
    /// position *at the time it is removed*, never a stale snapshot. An
    /// out-of-range or empty range removes nothing.
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.nodes.len(),
        };
        let end = end.min(self.nodes.len());
        if start >= end {
            return 0;
        }
        let count = end - start;
        for _ in 0..count {
            // Positions collapse onto `start` as nodes are removed.
            self.remove_at(start);
        }
        count
    }

    /// Returns a borrowing iterator over the values adjacent to the node
    /// holding `value`, in adjacency (positional) order.
    ///
    /// The iterator is empty if the value is absent.
    pub fn neighbors(&self, value: &T) -> Neighbors<'_, T> {
        let indices = self
            .position_of(value)
            .map(|position| self.nodes[position].adjacency().iter());
        Neighbors::new(&self.nodes, indices)
    }
}

impl<T: Ord> DirectedGraph<T> {
    /// Resolves a node's adjacency indices into references to the neighbor
    /// values. Indices are trusted to be in range (container invariant).
    fn resolved_adjacency(&self, indices: &BTreeSet<usize>) -> BTreeSet<&T> {
        indices
            .iter()
            .filter_map(|&index| self.nodes.get(index))
            .map(GraphNode::value)
            .collect()
    }
}

impl<T: Ord + Clone> DirectedGraph<T> {
    /// Returns the set of values adjacent to the node holding `value`.
    ///
    /// Returns an empty set if the value is absent.
    pub fn adjacent_values(&self, value: &T) -> BTreeSet<T> {
        match self.position_of(value) {
            Some(position) => self.adjacent_values_of(self.nodes[position].adjacency()),
            None => BTreeSet::new(),
        }
    }

    /// Resolves a set of positional indices into the set of corresponding
    /// node values. Indices out of range are ignored.
    pub fn adjacent_values_of(&self, indices: &BTreeSet<usize>) -> BTreeSet<T> {
        indices
            .iter()
            .filter_map(|&index| self.nodes.get(index))
            .map(|node| node.value().clone())
            .collect()
    }
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural, order-independent equality.
///
/// Two graphs are equal iff they have the same node count and, for every
/// node on the left, the right holds an equal value whose adjacency —
/// resolved from positions to neighbor *values* — matches exactly. The
/// value indirection is what makes equality independent of insertion
/// order; raw positions are storage artifacts and never compared.
impl<T: Ord> PartialEq for DirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.nodes.len() != other.nodes.len() {
            return false;
        }
        self.nodes.iter().all(|node| {
            let Some(other_position) = other.position_of(node.value()) else {
                return false;
            };
            let lhs = self.resolved_adjacency(node.adjacency());
            let rhs = other.resolved_adjacency(other.nodes[other_position].adjacency());
            lhs == rhs
        })
    }
}

impl<T: Ord> Eq for DirectedGraph<T> {}

impl<T> Index<usize> for DirectedGraph<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of range; use [`DirectedGraph::get`] for a
    /// checked lookup.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "position {index} out of range for graph of {} nodes",
                self.nodes.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for DirectedGraph<T> {
    /// # Panics
    /// Panics if `index` is out of range; use [`DirectedGraph::get_mut`]
    /// for a checked lookup.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.nodes.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("position {index} out of range for graph of {len} nodes"),
        }
    }
}

/// Bulk insertion appends distinct values; duplicates are skipped.
impl<T: PartialEq> Extend<T> for DirectedGraph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T: fmt::Debug> fmt::Debug for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for node in &self.nodes {
            let targets: Vec<&T> = node
                .adjacency()
                .iter()
                .filter_map(|&index| self.nodes.get(index))
                .map(GraphNode::value)
                .collect();
            map.entry(node.value(), &targets);
        }
        map.finish()
    }
}
