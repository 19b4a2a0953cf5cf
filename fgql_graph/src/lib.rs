//! Graph model for feature/workpiece surface-adjacency graphs.
//!
//! This crate provides the in-memory undirected labeled graph the matching
//! engine searches over: nodes carry an opaque identifier and an attribute
//! bag, edges connect two distinct nodes and carry their own attribute bag.
//! Graphs are write-once: they are populated through [`Graph::add_node`] and
//! [`Graph::add_edge`] and never mutated afterwards, which is what makes it
//! safe for several searches to share one graph instance.
//!
//! Iteration order over nodes, edges and neighbors is insertion order, so
//! search results are reproducible for a given construction sequence.

mod attr;
mod error;
mod graph;

pub use attr::{AttrValue, Attributes};
pub use error::{GraphError, Result};
pub use graph::{EdgeKey, Graph, NodeId};
