//! Node and edge compatibility predicates.
//!
//! The matcher never compares attribute bags itself; it defers every
//! node-pair and edge-pair decision to a caller-supplied predicate. The
//! predicates here mirror the comparisons used for surface-adjacency
//! graphs: strict matching requires surface type and cavity flag to agree,
//! relaxed matching requires only the surface type, and edges compare their
//! angular classification.
//!
//! All predicates use get-or-absent lookups: an attribute missing from both
//! bags compares equal, an attribute missing from one side compares unequal.
//! Any `Fn(&Attributes, &Attributes) -> bool` closure is accepted wherever a
//! predicate is expected, so custom comparisons need no new types.

use fgql_graph::Attributes;

/// Attribute name for the surface type (`plane`, `cylinder`, `cone`, ...).
pub const TYPE: &str = "type";
/// Attribute name for the cavity flag on a surface.
pub const CAVITY: &str = "cavity";
/// Attribute name for the angular classification of an adjacency.
pub const ANGULAR_TYPE: &str = "angular_type";

/// Decides whether a feature node may map onto a workpiece node.
///
/// Must be pure and total over well-formed attribute bags.
pub trait NodeCompat {
    /// True if the workpiece node is an acceptable image for the feature node.
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool;
}

impl<F> NodeCompat for F
where
    F: Fn(&Attributes, &Attributes) -> bool,
{
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool {
        self(feature, workpiece)
    }
}

/// Decides whether a feature edge may map onto a workpiece edge.
///
/// Must be pure and total over well-formed attribute bags.
pub trait EdgeCompat {
    /// True if the workpiece edge is an acceptable image for the feature edge.
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool;
}

impl<F> EdgeCompat for F
where
    F: Fn(&Attributes, &Attributes) -> bool,
{
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool {
        self(feature, workpiece)
    }
}

/// Strict node matching: surface type and cavity flag must both agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictNodeMatch;

impl NodeCompat for StrictNodeMatch {
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool {
        feature.get(TYPE) == workpiece.get(TYPE)
            && feature.get(CAVITY) == workpiece.get(CAVITY)
    }
}

/// Relaxed node matching: surface type alone must agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedNodeMatch;

impl NodeCompat for RelaxedNodeMatch {
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool {
        feature.get(TYPE) == workpiece.get(TYPE)
    }
}

/// Edge matching on the angular classification of the adjacency.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularEdgeMatch;

impl EdgeCompat for AngularEdgeMatch {
    fn compatible(&self, feature: &Attributes, workpiece: &Attributes) -> bool {
        feature.get(ANGULAR_TYPE) == workpiece.get(ANGULAR_TYPE)
    }
}
