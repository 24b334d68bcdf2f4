//! Internal node entity: one stored value plus its out-edge index set.

use std::collections::BTreeSet;

/// A graph node: a user value and the positions of its out-neighbors.
///
/// Adjacency entries are positions into the owning container's current
/// node ordering, kept sorted and duplicate-free. The set is container
/// bookkeeping and is never handed out through the public API.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode<T> {
    value: T,
    adjacency: BTreeSet<usize>,
}

impl<T> GraphNode<T> {
    /// Creates a node with no outgoing edges.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacency: BTreeSet::new(),
        }
    }

    /// Returns a shared reference to the stored value.
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Returns the out-neighbor position set.
    pub(crate) fn adjacency(&self) -> &BTreeSet<usize> {
        &self.adjacency
    }

    /// Returns the out-neighbor position set for mutation.
    pub(crate) fn adjacency_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.adjacency
    }
}

// Node identity is value identity: two nodes with equal values are "the
// same node" for lookup purposes regardless of their edges. Structural
// (edge-aware) comparison lives on the container, not here.
impl<T: PartialEq> PartialEq for GraphNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for GraphNode<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_adjacency() {
        let mut a = GraphNode::new("n");
        let b = GraphNode::new("n");
        a.adjacency_mut().insert(3);
        assert_eq!(a, b);
    }

    #[test]
    fn adjacency_starts_empty() {
        let node = GraphNode::new(7u32);
        assert!(node.adjacency().is_empty());
        assert_eq!(*node.value(), 7);
    }

    #[test]
    fn value_mut_writes_through() {
        let mut node = GraphNode::new(String::from("x"));
        node.value_mut().push('y');
        assert_eq!(node.into_value(), "xy");
    }
}
