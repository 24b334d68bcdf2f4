//! # `filament` - Mutable Directed Graph Container
//!
//! A generic, in-memory directed graph that behaves like an ordered
//! container: nodes are unique values, edges are directed relationships
//! between them, and the whole structure is built, mutated, and inspected
//! through an interface resembling the standard collections.
//!
//! ## Design
//!
//! - **Value-keyed nodes**: a node is identified by its value. Inserting an
//!   already-present value is a no-op that reports the existing position.
//! - **Positional adjacency**: edges are stored as the *positions* of their
//!   target nodes inside the container's current ordering. Positions are
//!   not stable identifiers: removing a node renumbers every adjacency
//!   index behind it. This is a documented tradeoff, not a defect — see
//!   [`DirectedGraph::remove`].
//! - **Value-only iteration**: iterators yield node values, never adjacency
//!   state, keeping the index bookkeeping encapsulated.
//! - **Borrow-checked iterator lifetimes**: iterators borrow the container,
//!   so iterating across a structural mutation is a compile error rather
//!   than a runtime hazard.
//!
//! ## Invariants
//!
//! Every adjacency index in the container refers to a live position
//! (`index < len()`) at all times. Debug builds validate this after every
//! structural mutation.
//!
//! ## Example
//!
//! ```rust
//! use filament::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.insert("A");
//! graph.insert("B");
//! graph.insert("C");
//!
//! assert!(graph.insert_edge(&"A", &"B"));
//! assert!(graph.insert_edge(&"A", &"C"));
//!
//! // Removing "B" renumbers the surviving edges; A -> C is preserved.
//! assert!(graph.remove(&"B"));
//! assert_eq!(graph.len(), 2);
//! assert!(graph.adjacent_values(&"A").contains(&"C"));
//! ```
//!
//! ## Non-goals
//!
//! No traversal algorithms, no serialization, no internal locking (the
//! container is an ordinary sequential structure), no stable node handles
//! across mutation.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{DirectedGraph, IntoIter, Iter, IterMut, Neighbors};
