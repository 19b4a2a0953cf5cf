//! Bidirectional partial mapping between feature and workpiece nodes.

use std::collections::HashMap;

use crate::graph_index::NodeIdx;

/// The in-progress feature -> workpiece assignment.
///
/// Both directions are stored so injectivity checks and constraint lookups
/// are O(1). Extensions made with [`Mapping::map`] are undone with
/// [`Mapping::unmap`] on backtrack; the search owns exactly one mapping and
/// must leave it exactly as found after exploring a branch.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mapping {
    /// Feature to workpiece node mapping.
    feature_to_workpiece: HashMap<NodeIdx, NodeIdx>,
    /// Workpiece to feature node mapping.
    workpiece_to_feature: HashMap<NodeIdx, NodeIdx>,
}

impl Mapping {
    #[contracts::debug_ensures(ret.len() == 0)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[contracts::debug_requires(!self.feature_to_workpiece.contains_key(&feature))]
    #[contracts::debug_requires(!self.workpiece_to_feature.contains_key(&workpiece))]
    #[contracts::debug_ensures(self.feature_to_workpiece.len() == self.workpiece_to_feature.len())]
    pub(crate) fn map(&mut self, feature: NodeIdx, workpiece: NodeIdx) {
        self.feature_to_workpiece.insert(feature, workpiece);
        self.workpiece_to_feature.insert(workpiece, feature);
    }

    #[contracts::debug_requires(self.feature_to_workpiece.get(&feature) == Some(&workpiece))]
    #[contracts::debug_ensures(self.feature_to_workpiece.len() == self.workpiece_to_feature.len())]
    pub(crate) fn unmap(&mut self, feature: NodeIdx, workpiece: NodeIdx) {
        self.feature_to_workpiece.remove(&feature);
        self.workpiece_to_feature.remove(&workpiece);
    }

    pub(crate) fn image_of(&self, feature: NodeIdx) -> Option<NodeIdx> {
        self.feature_to_workpiece.get(&feature).copied()
    }

    pub(crate) fn is_used_workpiece(&self, workpiece: NodeIdx) -> bool {
        self.workpiece_to_feature.contains_key(&workpiece)
    }

    #[contracts::debug_requires(self.feature_to_workpiece.len() == self.workpiece_to_feature.len())]
    pub(crate) fn len(&self) -> usize {
        self.feature_to_workpiece.len()
    }
}
