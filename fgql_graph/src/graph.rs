//! The undirected labeled graph and its identifiers.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::attr::Attributes;
use crate::error::{GraphError, Result};

/// Opaque node identifier, unique within one graph.
///
/// Identifiers come from the external graph description (surface numbers,
/// face names) and are never interpreted by the engine beyond equality and
/// a total order used to canonicalize edge keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical key for an undirected edge.
///
/// The constructor orders the endpoints so `(a, b)` and `(b, a)` address the
/// same edge. Invariant: `a() < b()`; self pairs are rejected by
/// [`Graph::add_edge`] before a key is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    a: NodeId,
    b: NodeId,
}

impl EdgeKey {
    pub(crate) fn new(x: NodeId, y: NodeId) -> Self {
        if x <= y { Self { a: x, b: y } } else { Self { a: y, b: x } }
    }

    /// The lexicographically smaller endpoint.
    pub fn a(&self) -> &NodeId {
        &self.a
    }

    /// The lexicographically larger endpoint.
    pub fn b(&self) -> &NodeId {
        &self.b
    }
}

/// An immutable undirected labeled graph.
///
/// Populated once through [`Graph::add_node`] / [`Graph::add_edge`], then
/// read-only: every accessor takes `&self` and the crate exposes no removal
/// or mutation of existing nodes and edges. Node, edge and neighbor
/// iteration follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Attributes>,
    edges: IndexMap<EdgeKey, Attributes>,
    adjacency: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with its attribute bag.
    ///
    /// # Errors
    /// [`GraphError::DuplicateNode`] if the id is already present.
    pub fn add_node(&mut self, id: impl Into<NodeId>, attributes: Attributes) -> Result<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        self.adjacency.insert(id.clone(), IndexSet::new());
        self.nodes.insert(id, attributes);
        Ok(())
    }

    /// Adds an undirected edge between two existing nodes.
    ///
    /// # Errors
    /// [`GraphError::SelfLoop`] if both endpoints are the same node,
    /// [`GraphError::UnknownNode`] if either endpoint is absent,
    /// [`GraphError::DuplicateEdge`] if the unordered pair already has an
    /// edge.
    pub fn add_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        attributes: Attributes,
    ) -> Result<()> {
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(GraphError::SelfLoop { id: a });
        }
        for endpoint in [&a, &b] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::UnknownNode {
                    id: endpoint.clone(),
                });
            }
        }
        let key = EdgeKey::new(a.clone(), b.clone());
        if self.edges.contains_key(&key) {
            return Err(GraphError::DuplicateEdge { a, b });
        }
        self.adjacency
            .get_mut(&a)
            .expect("endpoint checked above")
            .insert(b.clone());
        self.adjacency
            .get_mut(&b)
            .expect("endpoint checked above")
            .insert(a);
        self.edges.insert(key, attributes);
        Ok(())
    }

    /// The neighbor set of a node, in edge insertion order.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if the id is absent.
    pub fn neighbors(&self, id: &NodeId) -> Result<&IndexSet<NodeId>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })
    }

    /// Number of neighbors of a node.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if the id is absent.
    pub fn degree(&self, id: &NodeId) -> Result<usize> {
        self.neighbors(id).map(IndexSet::len)
    }

    /// The attribute bag of a node.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if the id is absent.
    pub fn node_attributes(&self, id: &NodeId) -> Result<&Attributes> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() })
    }

    /// The attribute bag of the edge between `a` and `b`, in either order.
    ///
    /// # Errors
    /// [`GraphError::UnknownEdge`] if no such edge exists.
    pub fn edge_attributes(&self, a: &NodeId, b: &NodeId) -> Result<&Attributes> {
        self.edges
            .get(&EdgeKey::new(a.clone(), b.clone()))
            .ok_or_else(|| GraphError::UnknownEdge {
                a: a.clone(),
                b: b.clone(),
            })
    }

    /// True if the node exists.
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// True if an edge exists between `a` and `b`, in either order.
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.edges
            .contains_key(&EdgeKey::new(a.clone(), b.clone()))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// `(id, attributes)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &Attributes)> {
        self.nodes.iter()
    }

    /// `(edge key, attributes)` pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &Attributes)> {
        self.edges.iter()
    }
}
