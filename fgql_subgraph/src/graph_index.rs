//! Structural index over a graph, built once per search.
//!
//! The index assigns every node a dense [`NodeIdx`] in the graph's stable
//! insertion order and precomputes neighbor lists (sorted, for
//! deterministic candidate expansion) and neighbor sets (for O(1)
//! adjacency tests during constraint checking). Building the index is the
//! only place the engine touches `fgql_graph` lookups; from then on the
//! search runs on dense indices.

use std::collections::{HashMap, HashSet};

use fgql_graph::{Attributes, Graph, NodeId};

/// Dense node index, valid for the [`GraphIndex`] that produced it.
pub type NodeIdx = usize;

/// Precomputed adjacency and numbering for one graph.
#[derive(Debug, Clone)]
pub struct GraphIndex<'g> {
    graph: &'g Graph,
    /// Dense index -> node id, in the graph's insertion order.
    ids: Vec<&'g NodeId>,
    idx_by_id: HashMap<&'g NodeId, NodeIdx>,
    /// Per-node neighbor indices, sorted ascending.
    neighbors: Vec<Vec<NodeIdx>>,
    /// Per-node neighbor indices as sets.
    neighbor_sets: Vec<HashSet<NodeIdx>>,
}

impl<'g> GraphIndex<'g> {
    /// Builds the index for a graph.
    pub fn build(graph: &'g Graph) -> Self {
        let ids: Vec<&'g NodeId> = graph.node_ids().collect();
        let idx_by_id: HashMap<&'g NodeId, NodeIdx> =
            ids.iter().enumerate().map(|(idx, &id)| (id, idx)).collect();

        let mut neighbors: Vec<Vec<NodeIdx>> = Vec::with_capacity(ids.len());
        for id in &ids {
            let mut adjacent: Vec<NodeIdx> = graph
                .neighbors(id)
                .expect("indexed node comes from this graph")
                .iter()
                .map(|neighbor| idx_by_id[neighbor])
                .collect();
            adjacent.sort_unstable();
            neighbors.push(adjacent);
        }

        let neighbor_sets: Vec<HashSet<NodeIdx>> = neighbors
            .iter()
            .map(|adjacent| adjacent.iter().copied().collect())
            .collect();

        Self {
            graph,
            ids,
            idx_by_id,
            neighbors,
            neighbor_sets,
        }
    }

    /// The indexed graph.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of nodes in the indexed graph.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// The id behind a dense index.
    pub fn id_of(&self, idx: NodeIdx) -> &'g NodeId {
        self.ids[idx]
    }

    /// The dense index of an id, if the node exists.
    pub fn idx_of(&self, id: &NodeId) -> Option<NodeIdx> {
        self.idx_by_id.get(id).copied()
    }

    /// Neighbor indices of a node, sorted ascending.
    pub fn neighbors(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.neighbors[idx]
    }

    /// Neighbor indices of a node as a set.
    pub fn neighbor_set(&self, idx: NodeIdx) -> &HashSet<NodeIdx> {
        &self.neighbor_sets[idx]
    }

    /// Degree of a node.
    pub fn degree(&self, idx: NodeIdx) -> usize {
        self.neighbors[idx].len()
    }

    /// Attribute bag of a node.
    pub fn attributes(&self, idx: NodeIdx) -> &'g Attributes {
        self.graph
            .node_attributes(self.ids[idx])
            .expect("indexed node comes from this graph")
    }

    /// Attribute bag of the edge between two indexed nodes.
    ///
    /// Callers must have established adjacency first (the search only asks
    /// about pairs it has seen in a neighbor set).
    pub fn edge_attributes(&self, a: NodeIdx, b: NodeIdx) -> &'g Attributes {
        self.graph
            .edge_attributes(self.ids[a], self.ids[b])
            .expect("adjacent pair comes from this graph")
    }
}
