#![allow(dead_code)]

use std::sync::Once;

use fgql_common::{
    AngularEdgeMatch, Config, EdgeCompat, NodeCompat, RelaxedNodeMatch, StrictNodeMatch, TestCase,
};

use crate::{Embedding, MatchError, SubgraphMatcher};

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Runs an unbounded enumeration over a test case with the given predicates.
pub fn enumerate_case(
    case: &TestCase,
    node_compat: &dyn NodeCompat,
    edge_compat: &dyn EdgeCompat,
) -> Result<Vec<Embedding>, MatchError> {
    setup_test_logging();
    SubgraphMatcher::enumerate_all(
        &case.feature,
        &case.workpiece,
        node_compat,
        edge_compat,
        &Config::default(),
    )
}

/// Strict-predicate enumeration over a test case.
pub fn enumerate_strict(case: &TestCase) -> Vec<Embedding> {
    enumerate_case(case, &StrictNodeMatch, &AngularEdgeMatch)
        .expect("unbounded search cannot be aborted")
}

/// Relaxed-predicate enumeration over a test case.
pub fn enumerate_relaxed(case: &TestCase) -> Vec<Embedding> {
    enumerate_case(case, &RelaxedNodeMatch, &AngularEdgeMatch)
        .expect("unbounded search cannot be aborted")
}
