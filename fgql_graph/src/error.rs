//! Error types for graph construction and lookup.

use thiserror::Error;

use crate::graph::NodeId;

/// Graph construction and lookup errors.
///
/// All of these indicate malformed input or a caller bug and are fatal to
/// the call that produced them; a graph that has been built successfully
/// can no longer trigger any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id was already added.
    #[error("duplicate node '{id}'")]
    DuplicateNode {
        /// The id that was added twice.
        id: NodeId,
    },

    /// The referenced node does not exist in this graph.
    #[error("unknown node '{id}'")]
    UnknownNode {
        /// The id that could not be resolved.
        id: NodeId,
    },

    /// The unordered pair already has an edge (simple graph, no multi-edges).
    #[error("duplicate edge between '{a}' and '{b}'")]
    DuplicateEdge {
        /// One endpoint of the rejected edge.
        a: NodeId,
        /// The other endpoint of the rejected edge.
        b: NodeId,
    },

    /// Both endpoints of the edge are the same node.
    #[error("self loop on node '{id}'")]
    SelfLoop {
        /// The node the edge would have looped on.
        id: NodeId,
    },

    /// No edge exists between the referenced pair of nodes.
    #[error("unknown edge between '{a}' and '{b}'")]
    UnknownEdge {
        /// One endpoint of the missing edge.
        a: NodeId,
        /// The other endpoint of the missing edge.
        b: NodeId,
    },
}

/// Convenience alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
