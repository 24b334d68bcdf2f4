//! The directed graph container and its iteration types.
//!
//! Organization:
//! - `node`: the internal node entity (value + adjacency index set)
//! - `digraph`: the `DirectedGraph` container and all mutation logic
//! - `iter`: value-only iterators bound to the container

mod digraph;
mod iter;
mod node;

pub use digraph::DirectedGraph;
pub use iter::{IntoIter, Iter, IterMut, Neighbors};

pub(crate) use node::GraphNode;
