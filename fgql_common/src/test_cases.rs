//! Common test cases for subgraph matching.
//!
//! This module defines named feature/workpiece graph pairs with their
//! expected match counts under the stock strict and relaxed predicates.
//! The engine's test suite iterates over [`struct@BASIC_TEST_CASES`]; keeping the
//! fixtures here keeps expected counts in one place.

use fgql_graph::{Attributes, Graph};

use crate::compat::{ANGULAR_TYPE, CAVITY, TYPE};

/// A complete matching test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// The feature graph to search for.
    pub feature: Graph,
    /// The workpiece graph to search in.
    pub workpiece: Graph,
    /// Expected match count under `StrictNodeMatch` + `AngularEdgeMatch`.
    pub expected_strict: usize,
    /// Expected match count under `RelaxedNodeMatch` + `AngularEdgeMatch`.
    pub expected_relaxed: usize,
}

/// Attribute bag for a surface node.
pub fn surface(ty: &str, cavity: Option<bool>) -> Attributes {
    let attrs = Attributes::new().with(TYPE, ty);
    match cavity {
        Some(flag) => attrs.with(CAVITY, flag),
        None => attrs,
    }
}

/// Attribute bag for an adjacency edge.
pub fn adjacency(angular_type: &str) -> Attributes {
    Attributes::new().with(ANGULAR_TYPE, angular_type)
}

/// Triangle workpiece: three planes, pairwise adjacent with flat edges.
pub fn triangle_workpiece() -> Graph {
    let mut g = Graph::new();
    for id in ["a", "b", "c"] {
        g.add_node(id, surface("plane", None)).expect("fresh node");
    }
    for (x, y) in [("a", "b"), ("b", "c"), ("c", "a")] {
        g.add_edge(x, y, adjacency("flat")).expect("fresh edge");
    }
    g
}

/// Single-edge feature: two planes joined by a flat adjacency.
pub fn single_edge_feature() -> Graph {
    let mut g = Graph::new();
    g.add_node("x", surface("plane", None)).expect("fresh node");
    g.add_node("y", surface("plane", None)).expect("fresh node");
    g.add_edge("x", "y", adjacency("flat")).expect("fresh edge");
    g
}

/// Rectangular-pocket feature graph: four walls in a cycle plus a floor,
/// every face a cavity plane, every adjacency concave.
pub fn pocket_feature() -> Graph {
    let mut g = Graph::new();
    for id in ["w1", "w2", "w3", "w4", "floor"] {
        g.add_node(id, surface("plane", Some(true)))
            .expect("fresh node");
    }
    for (x, y) in [("w1", "w2"), ("w2", "w3"), ("w3", "w4"), ("w4", "w1")] {
        g.add_edge(x, y, adjacency("concave")).expect("fresh edge");
    }
    for wall in ["w1", "w2", "w3", "w4"] {
        g.add_edge(wall, "floor", adjacency("concave"))
            .expect("fresh edge");
    }
    g
}

/// Block workpiece with one rectangular pocket sunk into its top face.
///
/// The six outer faces meet at convex edges, the pocket rim is convex, and
/// the pocket interior (wall-wall and wall-floor) is concave. `pocket_cavity`
/// controls the `cavity` flag on the five pocket faces; `None` leaves the
/// attribute off entirely, which strict matching treats as a mismatch
/// against an explicit flag.
pub fn block_with_pocket(pocket_cavity: Option<bool>) -> Graph {
    let mut g = Graph::new();
    for id in ["top", "base", "front", "right", "back", "left"] {
        g.add_node(id, surface("plane", Some(false)))
            .expect("fresh node");
    }
    for id in ["pw1", "pw2", "pw3", "pw4", "pfloor"] {
        g.add_node(id, surface("plane", pocket_cavity))
            .expect("fresh node");
    }

    // Outer shell of the block.
    let sides = ["front", "right", "back", "left"];
    for i in 0..4 {
        g.add_edge(sides[i], sides[(i + 1) % 4], adjacency("convex"))
            .expect("fresh edge");
    }
    for side in sides {
        g.add_edge("top", side, adjacency("convex")).expect("fresh edge");
        g.add_edge("base", side, adjacency("convex")).expect("fresh edge");
    }

    // Pocket rim: walls break through the top face.
    for wall in ["pw1", "pw2", "pw3", "pw4"] {
        g.add_edge("top", wall, adjacency("convex")).expect("fresh edge");
    }

    // Pocket interior.
    let walls = ["pw1", "pw2", "pw3", "pw4"];
    for i in 0..4 {
        g.add_edge(walls[i], walls[(i + 1) % 4], adjacency("concave"))
            .expect("fresh edge");
    }
    for wall in walls {
        g.add_edge(wall, "pfloor", adjacency("concave"))
            .expect("fresh edge");
    }
    g
}

lazy_static::lazy_static! {
    /// Named feature/workpiece pairs with expected strict and relaxed counts.
    pub static ref BASIC_TEST_CASES: Vec<TestCase> = vec![
        // Every edge of the triangle matches the single-edge feature in
        // both directions.
        TestCase {
            name: "triangle_single_edge",
            feature: single_edge_feature(),
            workpiece: triangle_workpiece(),
            expected_strict: 6,
            expected_relaxed: 6,
        },
        // One pocket in the block; the feature's 4-cycle of walls has the
        // dihedral symmetry group of the square, so 8 distinct assignments
        // cover the same five faces.
        TestCase {
            name: "pocket_in_block",
            feature: pocket_feature(),
            workpiece: block_with_pocket(Some(true)),
            expected_strict: 8,
            expected_relaxed: 8,
        },
        // The workpiece pocket faces carry no cavity flag at all: strict
        // matching rejects them against the feature's explicit flag,
        // relaxed matching (type only) still finds all 8.
        TestCase {
            name: "pocket_without_cavity_flag",
            feature: pocket_feature(),
            workpiece: block_with_pocket(None),
            expected_strict: 0,
            expected_relaxed: 8,
        },
        // Single cavity plane against an all-outer workpiece: excluded
        // under strict, one match per plane under relaxed.
        TestCase {
            name: "cavity_mismatch_single_node",
            feature: {
                let mut g = Graph::new();
                g.add_node("x", surface("plane", Some(true))).expect("fresh node");
                g
            },
            workpiece: {
                let mut g = Graph::new();
                for id in ["n1", "n2", "n3"] {
                    g.add_node(id, surface("plane", Some(false))).expect("fresh node");
                }
                g
            },
            expected_strict: 0,
            expected_relaxed: 3,
        },
        // No cylinder anywhere in the workpiece.
        TestCase {
            name: "missing_surface_type",
            feature: {
                let mut g = Graph::new();
                g.add_node("bore", surface("cylinder", Some(true))).expect("fresh node");
                g
            },
            workpiece: triangle_workpiece(),
            expected_strict: 0,
            expected_relaxed: 0,
        },
        // Empty feature matches vacuously, exactly once.
        TestCase {
            name: "empty_feature",
            feature: Graph::new(),
            workpiece: triangle_workpiece(),
            expected_strict: 1,
            expected_relaxed: 1,
        },
        // More feature nodes than workpiece nodes: no search needed.
        TestCase {
            name: "feature_exceeds_workpiece",
            feature: {
                let mut g = Graph::new();
                for id in ["x1", "x2", "x3", "x4"] {
                    g.add_node(id, surface("plane", None)).expect("fresh node");
                }
                g
            },
            workpiece: triangle_workpiece(),
            expected_strict: 0,
            expected_relaxed: 0,
        },
        // Disconnected feature: two independent flat edges inside a path of
        // four planes. Only the two end edges of the path are disjoint, and
        // each edge pair is hit in both directions by both feature edges.
        TestCase {
            name: "two_slots_in_path",
            feature: {
                let mut g = Graph::new();
                for id in ["x", "y", "z", "w"] {
                    g.add_node(id, surface("plane", None)).expect("fresh node");
                }
                g.add_edge("x", "y", adjacency("flat")).expect("fresh edge");
                g.add_edge("z", "w", adjacency("flat")).expect("fresh edge");
                g
            },
            workpiece: {
                let mut g = Graph::new();
                for id in ["a", "b", "c", "d"] {
                    g.add_node(id, surface("plane", None)).expect("fresh node");
                }
                g.add_edge("a", "b", adjacency("flat")).expect("fresh edge");
                g.add_edge("b", "c", adjacency("flat")).expect("fresh edge");
                g.add_edge("c", "d", adjacency("flat")).expect("fresh edge");
                g
            },
            expected_strict: 8,
            expected_relaxed: 8,
        },
    ];
}
