//! Completed embeddings reported by the search.

use serde::{Deserialize, Serialize};

use fgql_graph::NodeId;

use crate::graph_index::GraphIndex;
use crate::mapping::Mapping;

/// One structure-preserving embedding of the feature into the workpiece.
///
/// Holds the total injective assignment as `(feature id, workpiece id)`
/// pairs in feature insertion order. Embeddings are plain data, detached
/// from the graphs and the search that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    pairs: Vec<(NodeId, NodeId)>,
}

impl Embedding {
    /// The vacuous embedding of the empty feature graph.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Copies a completed mapping out of the search state.
    pub(crate) fn from_mapping(
        mapping: &Mapping,
        feature_index: &GraphIndex<'_>,
        workpiece_index: &GraphIndex<'_>,
    ) -> Self {
        let pairs = (0..feature_index.node_count())
            .map(|feature_idx| {
                let workpiece_idx = mapping
                    .image_of(feature_idx)
                    .expect("completed mapping covers every feature node");
                (
                    feature_index.id_of(feature_idx).clone(),
                    workpiece_index.id_of(workpiece_idx).clone(),
                )
            })
            .collect();
        Self { pairs }
    }

    /// The assignment pairs, in feature insertion order.
    pub fn pairs(&self) -> &[(NodeId, NodeId)] {
        &self.pairs
    }

    /// The workpiece node a feature node was mapped to.
    pub fn image_of(&self, feature: &NodeId) -> Option<&NodeId> {
        self.pairs
            .iter()
            .find(|(f, _)| f == feature)
            .map(|(_, w)| w)
    }

    /// Workpiece nodes covered by this embedding, in feature order.
    pub fn workpiece_nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.pairs.iter().map(|(_, w)| w)
    }

    /// Number of mapped feature nodes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True for the vacuous embedding.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
