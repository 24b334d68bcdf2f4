//! Value-only iterators over a `DirectedGraph`.
//!
//! Iteration exposes node values in positional order and nothing else:
//! adjacency bookkeeping never leaks through this interface. Every
//! iterator borrows the container, so structural mutation while an
//! iterator is live is rejected at compile time, and positional
//! invalidation cannot outlive the borrow that produced the iterator.

use std::collections::btree_set;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;
use std::vec;

use super::{DirectedGraph, GraphNode};

/// A bidirectional, value-only iterator over a graph's nodes.
///
/// Holds a reference to the owning container plus a pair of cursor
/// positions. Two `Iter`s compare equal only when they iterate the *same*
/// container (pointer identity) at the same positions.
#[derive(Debug)]
pub struct Iter<'a, T> {
    graph: &'a DirectedGraph<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(graph: &'a DirectedGraph<T>) -> Self {
        Self {
            graph,
            front: 0,
            back: graph.len(),
        }
    }

    /// Returns the position the iterator will yield next from the front.
    ///
    /// When the iterator is exhausted this equals the exhausted back
    /// cursor, the positional analog of an end sentinel.
    pub fn position(&self) -> usize {
        self.front
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.graph.nodes()[self.front].value();
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.graph.nodes()[self.back].value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Iter<'_, T> {}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.front == other.front && self.back == other.back
    }
}

impl<T> Eq for Iter<'_, T> {}

/// A bidirectional iterator yielding mutable references to node values.
///
/// Mutation happens on values only; nodes cannot be inserted or removed
/// through the iterator, and writes must preserve value uniqueness across
/// the graph (the container does not re-check it).
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, GraphNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut [GraphNode<T>]) -> Self {
        Self {
            inner: nodes.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(GraphNode::value_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(GraphNode::value_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// A consuming iterator over a graph's node values.
pub struct IntoIter<T> {
    inner: vec::IntoIter<GraphNode<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(GraphNode::into_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(GraphNode::into_value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DirectedGraph<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DirectedGraph<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DirectedGraph<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_nodes().into_iter(),
        }
    }
}

/// A borrowing iterator over the values adjacent to one node, in
/// adjacency (positional) order.
///
/// Produced by [`DirectedGraph::neighbors`]; empty when the queried value
/// is absent.
pub struct Neighbors<'a, T> {
    nodes: &'a [GraphNode<T>],
    indices: Option<btree_set::Iter<'a, usize>>,
}

impl<'a, T> Neighbors<'a, T> {
    pub(crate) fn new(
        nodes: &'a [GraphNode<T>],
        indices: Option<btree_set::Iter<'a, usize>>,
    ) -> Self {
        Self { nodes, indices }
    }
}

impl<'a, T> Iterator for Neighbors<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.as_mut()?.next()?;
        self.nodes.get(index).map(GraphNode::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.as_ref().map_or(0, ExactSizeIterator::len);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Neighbors<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = *self.indices.as_mut()?.next_back()?;
        self.nodes.get(index).map(GraphNode::value)
    }
}

impl<T> ExactSizeIterator for Neighbors<'_, T> {}
impl<T> FusedIterator for Neighbors<'_, T> {}

impl<T> Clone for Neighbors<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectedGraph<u32> {
        let mut graph = DirectedGraph::new();
        for value in [10, 20, 30, 40] {
            graph.insert(value);
        }
        graph
    }

    #[test]
    fn iterates_in_positional_order() {
        let graph = sample();
        let values: Vec<u32> = graph.iter().copied().collect();
        assert_eq!(values, [10, 20, 30, 40]);
    }

    #[test]
    fn bidirectional_traversal() {
        let graph = sample();
        let mut iter = graph.iter();
        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next_back(), Some(&40));
        assert_eq!(iter.next_back(), Some(&30));
        assert_eq!(iter.next(), Some(&20));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn exact_size_tracks_both_ends() {
        let graph = sample();
        let mut iter = graph.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn iterator_equality_needs_same_container_and_position() {
        let graph = sample();
        let other = sample();

        let mut a = graph.iter();
        let b = graph.iter();
        assert_eq!(a, b);

        a.next();
        assert_ne!(a, b);

        // Equal containers, distinct instances: never equal.
        assert_ne!(graph.iter(), other.iter());
    }

    #[test]
    fn position_advances_with_front_cursor() {
        let graph = sample();
        let mut iter = graph.iter();
        assert_eq!(iter.position(), 0);
        iter.next();
        assert_eq!(iter.position(), 1);
    }

    #[test]
    fn iter_mut_writes_through() {
        let mut graph = sample();
        for value in graph.iter_mut() {
            *value += 1;
        }
        let values: Vec<u32> = graph.iter().copied().collect();
        assert_eq!(values, [11, 21, 31, 41]);
    }

    #[test]
    fn consuming_iteration_yields_owned_values() {
        let graph = sample();
        let values: Vec<u32> = graph.into_iter().rev().collect();
        assert_eq!(values, [40, 30, 20, 10]);
    }

    #[test]
    fn neighbors_yields_adjacency_order() {
        let mut graph = sample();
        graph.insert_edge(&10, &40);
        graph.insert_edge(&10, &20);
        let neighbors: Vec<u32> = graph.neighbors(&10).copied().collect();
        // Adjacency order is positional: 20 (pos 1) before 40 (pos 3).
        assert_eq!(neighbors, [20, 40]);
    }

    #[test]
    fn neighbors_of_missing_value_is_empty() {
        let graph = sample();
        let mut neighbors = graph.neighbors(&99);
        assert_eq!(neighbors.len(), 0);
        assert_eq!(neighbors.next(), None);
    }
}
