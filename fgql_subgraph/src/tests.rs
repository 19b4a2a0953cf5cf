use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};
use rstest::rstest;

use fgql_common::{
    AngularEdgeMatch, BASIC_TEST_CASES, CancelToken, Config, EdgeCompat, NodeCompat,
    RelaxedNodeMatch, StrictNodeMatch, adjacency, surface,
};
use fgql_graph::{Graph, NodeId};

use crate::test_harness::{enumerate_relaxed, enumerate_strict, setup_test_logging};
use crate::{Embedding, GraphIndex, MatchError, SubgraphMatcher};

lazy_static::lazy_static! {
    /// Four pairwise-adjacent planes, all edges flat.
    static ref PLANE_K4: Graph = {
        let mut g = Graph::new();
        for id in ["a", "b", "c", "d"] {
            g.add_node(id, surface("plane", None)).expect("fresh node");
        }
        for (x, y) in [("a", "b"), ("a", "c"), ("a", "d"), ("b", "c"), ("b", "d"), ("c", "d")] {
            g.add_edge(x, y, adjacency("flat")).expect("fresh edge");
        }
        g
    };

    /// Three planes in a flat cycle.
    static ref TRIANGLE_FEATURE: Graph = {
        let mut g = Graph::new();
        for id in ["x", "y", "z"] {
            g.add_node(id, surface("plane", None)).expect("fresh node");
        }
        for (x, y) in [("x", "y"), ("y", "z"), ("z", "x")] {
            g.add_edge(x, y, adjacency("flat")).expect("fresh edge");
        }
        g
    };
}

/// Soundness of one embedding: total, injective, node- and edge-compatible.
fn embedding_is_sound(
    feature: &Graph,
    workpiece: &Graph,
    embedding: &Embedding,
    node_compat: &dyn NodeCompat,
    edge_compat: &dyn EdgeCompat,
) -> bool {
    if embedding.len() != feature.node_count() {
        return false;
    }
    let distinct: HashSet<&NodeId> = embedding.workpiece_nodes().collect();
    if distinct.len() != embedding.len() {
        return false;
    }
    for (feature_id, workpiece_id) in embedding.pairs() {
        let feature_attrs = feature.node_attributes(feature_id).expect("feature node");
        let workpiece_attrs = workpiece
            .node_attributes(workpiece_id)
            .expect("workpiece node");
        if !node_compat.compatible(feature_attrs, workpiece_attrs) {
            return false;
        }
    }
    for (key, feature_attrs) in feature.edges() {
        let image_a = embedding.image_of(key.a()).expect("mapped endpoint");
        let image_b = embedding.image_of(key.b()).expect("mapped endpoint");
        if !workpiece.has_edge(image_a, image_b) {
            return false;
        }
        let workpiece_attrs = workpiece
            .edge_attributes(image_a, image_b)
            .expect("edge just observed");
        if !edge_compat.compatible(feature_attrs, workpiece_attrs) {
            return false;
        }
    }
    true
}

#[test]
fn test_basic_subgraph_matches() {
    for case in BASIC_TEST_CASES.iter() {
        let strict = enumerate_strict(case);
        let relaxed = enumerate_relaxed(case);

        assert_eq!(
            strict.len(),
            case.expected_strict,
            "case '{}': expected {} strict matches, found {}",
            case.name,
            case.expected_strict,
            strict.len()
        );
        assert_eq!(
            relaxed.len(),
            case.expected_relaxed,
            "case '{}': expected {} relaxed matches, found {}",
            case.name,
            case.expected_relaxed,
            relaxed.len()
        );

        // exists agrees with enumeration under both predicates.
        let exists_strict = SubgraphMatcher::exists(
            &case.feature,
            &case.workpiece,
            &StrictNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        assert_eq!(exists_strict, !strict.is_empty(), "case '{}'", case.name);

        let exists_relaxed = SubgraphMatcher::exists(
            &case.feature,
            &case.workpiece,
            &RelaxedNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        assert_eq!(exists_relaxed, !relaxed.is_empty(), "case '{}'", case.name);
    }
}

#[test]
fn every_reported_embedding_is_sound() {
    for case in BASIC_TEST_CASES.iter() {
        for embedding in enumerate_relaxed(case) {
            assert!(
                embedding_is_sound(
                    &case.feature,
                    &case.workpiece,
                    &embedding,
                    &RelaxedNodeMatch,
                    &AngularEdgeMatch
                ),
                "case '{}': unsound embedding {:?}",
                case.name,
                embedding
            );
        }
        for embedding in enumerate_strict(case) {
            assert!(
                embedding_is_sound(
                    &case.feature,
                    &case.workpiece,
                    &embedding,
                    &StrictNodeMatch,
                    &AngularEdgeMatch
                ),
                "case '{}': unsound strict embedding {:?}",
                case.name,
                embedding
            );
        }
    }
}

#[test]
fn strict_matches_are_a_subset_of_relaxed() {
    for case in BASIC_TEST_CASES.iter() {
        let relaxed: HashSet<Embedding> = enumerate_relaxed(case).into_iter().collect();
        for embedding in enumerate_strict(case) {
            assert!(
                relaxed.contains(&embedding),
                "case '{}': strict embedding missing from relaxed set",
                case.name
            );
        }
    }
}

#[test]
fn enumeration_is_deterministic_and_idempotent() {
    for case in BASIC_TEST_CASES.iter() {
        let first = enumerate_relaxed(case);
        let second = enumerate_relaxed(case);
        // Identical inputs give the identical result list, order included.
        assert_eq!(first, second, "case '{}'", case.name);
    }
}

#[test]
fn triangle_single_edge_covers_both_directions() {
    let case = BASIC_TEST_CASES
        .iter()
        .find(|case| case.name == "triangle_single_edge")
        .expect("known case");
    let embeddings = enumerate_relaxed(case);

    let assignments: HashSet<(&str, &str)> = embeddings
        .iter()
        .map(|embedding| {
            let x = embedding.image_of(&"x".into()).expect("mapped").as_str();
            let y = embedding.image_of(&"y".into()).expect("mapped").as_str();
            (x, y)
        })
        .collect();

    let expected: HashSet<(&str, &str)> = [
        ("a", "b"),
        ("b", "a"),
        ("b", "c"),
        ("c", "b"),
        ("c", "a"),
        ("a", "c"),
    ]
    .into();
    assert_eq!(assignments, expected);
}

#[rstest]
#[case::strict(&StrictNodeMatch, 0)]
#[case::relaxed(&RelaxedNodeMatch, 3)]
fn cavity_gating_is_predicate_level(
    #[case] node_compat: &'static dyn NodeCompat,
    #[case] expected: usize,
) {
    setup_test_logging();
    let mut feature = Graph::new();
    feature
        .add_node("pocket_face", surface("plane", Some(true)))
        .expect("fresh node");
    let mut workpiece = Graph::new();
    for id in ["s1", "s2", "s3"] {
        workpiece
            .add_node(id, surface("plane", Some(false)))
            .expect("fresh node");
    }

    let found = SubgraphMatcher::enumerate_all(
        &feature,
        &workpiece,
        node_compat,
        &AngularEdgeMatch,
        &Config::default(),
    )
    .expect("unbounded search");
    assert_eq!(found.len(), expected);
}

#[test]
fn empty_feature_matches_vacuously_once() {
    let case = BASIC_TEST_CASES
        .iter()
        .find(|case| case.name == "empty_feature")
        .expect("known case");
    let embeddings = enumerate_relaxed(case);
    assert_eq!(embeddings.len(), 1);
    assert!(embeddings[0].is_empty());
}

#[test]
fn oversized_feature_rejected_without_search() {
    let case = BASIC_TEST_CASES
        .iter()
        .find(|case| case.name == "feature_exceeds_workpiece")
        .expect("known case");
    // A zero visit budget proves the fast path never expands a candidate.
    let config = Config::builder().max_visits(0).build();
    let found = SubgraphMatcher::enumerate_all(
        &case.feature,
        &case.workpiece,
        &RelaxedNodeMatch,
        &AngularEdgeMatch,
        &config,
    )
    .expect("fast path performs no search");
    assert!(found.is_empty());
}

#[test]
fn cancellation_aborts_the_search() {
    setup_test_logging();
    let token = CancelToken::new();
    token.cancel();
    let config = Config::builder().cancel(token).build();

    let result = SubgraphMatcher::enumerate_all(
        &TRIANGLE_FEATURE,
        &PLANE_K4,
        &RelaxedNodeMatch,
        &AngularEdgeMatch,
        &config,
    );
    assert_eq!(result, Err(MatchError::Cancelled { visited: 0 }));
}

#[test]
fn visit_limit_aborts_exhaustive_enumeration() {
    setup_test_logging();
    let config = Config::builder().max_visits(5).build();

    let result = SubgraphMatcher::enumerate_all(
        &TRIANGLE_FEATURE,
        &PLANE_K4,
        &RelaxedNodeMatch,
        &AngularEdgeMatch,
        &config,
    );
    assert_eq!(result, Err(MatchError::VisitLimitExceeded { limit: 5 }));

    // The existence check completes inside the same budget because it
    // stops at the first embedding.
    let exists = SubgraphMatcher::exists(
        &TRIANGLE_FEATURE,
        &PLANE_K4,
        &RelaxedNodeMatch,
        &AngularEdgeMatch,
        &config,
    )
    .expect("first embedding is within budget");
    assert!(exists);
}

#[test]
fn prebuilt_indices_match_one_shot_searches() {
    setup_test_logging();
    let case = BASIC_TEST_CASES
        .iter()
        .find(|case| case.name == "pocket_in_block")
        .expect("known case");

    let feature_index = GraphIndex::build(&case.feature);
    let workpiece_index = GraphIndex::build(&case.workpiece);
    let config = Config::default();

    let strict = SubgraphMatcher::enumerate_with_indices(
        &feature_index,
        &workpiece_index,
        &StrictNodeMatch,
        &AngularEdgeMatch,
        &config,
    )
    .expect("unbounded search");
    assert_eq!(strict.len(), case.expected_strict);
    assert_eq!(strict, enumerate_strict(case));

    let exists = SubgraphMatcher::exists_with_indices(
        &feature_index,
        &workpiece_index,
        &StrictNodeMatch,
        &AngularEdgeMatch,
        &config,
    )
    .expect("unbounded search");
    assert!(exists);
}

#[test]
fn embeddings_serialize_as_plain_pairs() {
    let case = BASIC_TEST_CASES
        .iter()
        .find(|case| case.name == "triangle_single_edge")
        .expect("known case");
    let embeddings = enumerate_relaxed(case);

    let value = serde_json::to_value(&embeddings[0]).expect("serializable");
    let pairs = value.as_array().expect("array of pairs");
    assert_eq!(pairs.len(), 2);
    // Pairs are (feature id, workpiece id) in feature insertion order.
    assert_eq!(pairs[0][0], "x");
    assert_eq!(pairs[1][0], "y");
}

// #####################
// Property tests
// #####################

#[derive(Clone, Debug)]
struct SmallFeature(Graph);

#[derive(Clone, Debug)]
struct SmallWorkpiece(Graph);

fn arbitrary_graph(g: &mut Gen, max_nodes: usize, prefix: &str) -> Graph {
    let node_count = usize::arbitrary(g) % (max_nodes + 1);
    let mut graph = Graph::new();
    for i in 0..node_count {
        let ty = *g.choose(&["plane", "cylinder"]).expect("non-empty slice");
        graph
            .add_node(format!("{prefix}{i}"), surface(ty, Some(bool::arbitrary(g))))
            .expect("fresh node");
    }
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if bool::arbitrary(g) {
                let angular = *g.choose(&["flat", "concave"]).expect("non-empty slice");
                graph
                    .add_edge(
                        format!("{prefix}{i}"),
                        format!("{prefix}{j}"),
                        adjacency(angular),
                    )
                    .expect("fresh edge");
            }
        }
    }
    graph
}

impl Arbitrary for SmallFeature {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_graph(g, 3, "f"))
    }
}

impl Arbitrary for SmallWorkpiece {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_graph(g, 5, "w"))
    }
}

quickcheck::quickcheck! {
    fn prop_exists_agrees_with_enumeration(feature: SmallFeature, workpiece: SmallWorkpiece) -> bool {
        let found = SubgraphMatcher::enumerate_all(
            &feature.0,
            &workpiece.0,
            &RelaxedNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        let exists = SubgraphMatcher::exists(
            &feature.0,
            &workpiece.0,
            &RelaxedNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        exists == !found.is_empty()
    }

    fn prop_every_embedding_is_sound(feature: SmallFeature, workpiece: SmallWorkpiece) -> bool {
        let found = SubgraphMatcher::enumerate_all(
            &feature.0,
            &workpiece.0,
            &StrictNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        found.iter().all(|embedding| {
            embedding_is_sound(
                &feature.0,
                &workpiece.0,
                embedding,
                &StrictNodeMatch,
                &AngularEdgeMatch,
            )
        })
    }

    fn prop_strict_is_subset_of_relaxed(feature: SmallFeature, workpiece: SmallWorkpiece) -> bool {
        let strict = SubgraphMatcher::enumerate_all(
            &feature.0,
            &workpiece.0,
            &StrictNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search");
        let relaxed: HashSet<Embedding> = SubgraphMatcher::enumerate_all(
            &feature.0,
            &workpiece.0,
            &RelaxedNodeMatch,
            &AngularEdgeMatch,
            &Config::default(),
        )
        .expect("unbounded search")
        .into_iter()
        .collect();
        strict.iter().all(|embedding| relaxed.contains(embedding))
    }
}
