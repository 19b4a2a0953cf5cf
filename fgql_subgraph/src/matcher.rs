//! Subgraph isomorphism matching implementation.
//!
//! This module provides the core matching engine that identifies instances
//! of a feature graph within a larger workpiece graph. It uses a
//! backtracking search with a connectivity-first node order and
//! neighbor-set intersection to bound candidate generation.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use itertools::Itertools;

use fgql_common::{Config, EdgeCompat, NodeCompat};
use fgql_graph::Graph;

use crate::embedding::Embedding;
use crate::error::MatchError;
use crate::graph_index::{GraphIndex, NodeIdx};
use crate::mapping::Mapping;
use crate::utils::intersect_sets;

/// Entry point for subgraph isomorphism searches.
///
/// All entry points are read-only over their input graphs, so independent
/// searches (for example a strict and a relaxed pass) may run concurrently
/// against the same graph instances, each with its own `Config`.
pub struct SubgraphMatcher;

/// Core implementation of the subgraph matching algorithm.
struct SubgraphMatcherCore<'feat, 'work, 'run> {
    /// Structural index for the feature graph.
    feature_index: &'run GraphIndex<'feat>,
    /// Structural index for the workpiece graph.
    workpiece_index: &'run GraphIndex<'work>,
    /// Caller-supplied node compatibility predicate.
    node_compat: &'run dyn NodeCompat,
    /// Caller-supplied edge compatibility predicate.
    edge_compat: &'run dyn EdgeCompat,
    /// Budget and cancellation settings for this run.
    config: &'run Config,
    /// Whether to stop at the first embedding or exhaust the search space.
    mode: SearchMode,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    FirstOnly,
    Exhaustive,
}

/// Mutable bookkeeping owned by one in-flight search.
struct SearchState {
    mapping: Mapping,
    visited: u64,
}

impl SubgraphMatcher {
    /// True iff at least one embedding of `feature` into `workpiece` exists.
    ///
    /// Stops at the first embedding found.
    ///
    /// # Errors
    /// [`MatchError::Cancelled`] or [`MatchError::VisitLimitExceeded`] when
    /// the configured budget or token aborts the search.
    pub fn exists(
        feature: &Graph,
        workpiece: &Graph,
        node_compat: &dyn NodeCompat,
        edge_compat: &dyn EdgeCompat,
        config: &Config,
    ) -> Result<bool, MatchError> {
        let feature_index = GraphIndex::build(feature);
        let workpiece_index = GraphIndex::build(workpiece);
        Self::exists_with_indices(
            &feature_index,
            &workpiece_index,
            node_compat,
            edge_compat,
            config,
        )
    }

    /// Enumerates every distinct embedding of `feature` into `workpiece`.
    ///
    /// Two embeddings are distinct if they differ in at least one
    /// feature-node assignment. The result order is deterministic for a
    /// given construction order of the two graphs.
    ///
    /// # Errors
    /// [`MatchError::Cancelled`] or [`MatchError::VisitLimitExceeded`] when
    /// the configured budget or token aborts the search; no partial result
    /// list is returned.
    pub fn enumerate_all(
        feature: &Graph,
        workpiece: &Graph,
        node_compat: &dyn NodeCompat,
        edge_compat: &dyn EdgeCompat,
        config: &Config,
    ) -> Result<Vec<Embedding>, MatchError> {
        let feature_index = GraphIndex::build(feature);
        let workpiece_index = GraphIndex::build(workpiece);
        Self::enumerate_with_indices(
            &feature_index,
            &workpiece_index,
            node_compat,
            edge_compat,
            config,
        )
    }

    /// [`SubgraphMatcher::exists`] over pre-built indices.
    ///
    /// More efficient when running several searches against the same graphs.
    ///
    /// # Errors
    /// Same as [`SubgraphMatcher::exists`].
    pub fn exists_with_indices(
        feature_index: &GraphIndex<'_>,
        workpiece_index: &GraphIndex<'_>,
        node_compat: &dyn NodeCompat,
        edge_compat: &dyn EdgeCompat,
        config: &Config,
    ) -> Result<bool, MatchError> {
        let core = SubgraphMatcherCore {
            feature_index,
            workpiece_index,
            node_compat,
            edge_compat,
            config,
            mode: SearchMode::FirstOnly,
        };
        core.run().map(|embeddings| !embeddings.is_empty())
    }

    /// [`SubgraphMatcher::enumerate_all`] over pre-built indices.
    ///
    /// More efficient when running several searches against the same graphs.
    ///
    /// # Errors
    /// Same as [`SubgraphMatcher::enumerate_all`].
    pub fn enumerate_with_indices(
        feature_index: &GraphIndex<'_>,
        workpiece_index: &GraphIndex<'_>,
        node_compat: &dyn NodeCompat,
        edge_compat: &dyn EdgeCompat,
        config: &Config,
    ) -> Result<Vec<Embedding>, MatchError> {
        let core = SubgraphMatcherCore {
            feature_index,
            workpiece_index,
            node_compat,
            edge_compat,
            config,
            mode: SearchMode::Exhaustive,
        };
        core.run()
    }
}

impl SubgraphMatcherCore<'_, '_, '_> {
    /// Executes the search and returns the collected embeddings.
    fn run(&self) -> Result<Vec<Embedding>, MatchError> {
        let feature_count = self.feature_index.node_count();
        let workpiece_count = self.workpiece_index.node_count();

        tracing::info!(
            "starting subgraph search: feature nodes: {}, workpiece nodes: {}",
            feature_count,
            workpiece_count
        );

        if feature_count > workpiece_count {
            tracing::info!("feature larger than workpiece, no search needed");
            return Ok(Vec::new());
        }
        if feature_count == 0 {
            // The empty feature embeds vacuously, exactly once.
            return Ok(vec![Embedding::empty()]);
        }

        let order = self.prepare_search_order();
        let mut state = SearchState {
            mapping: Mapping::new(),
            visited: 0,
        };
        let mut results = Vec::new();

        self.recurse(&order, 0, &mut state, &mut results)?;

        tracing::info!(
            "search complete: found {} embeddings after {} candidate expansions",
            results.len(),
            state.visited
        );

        Ok(results)
    }

    /// Precomputes the order feature nodes are assigned in.
    ///
    /// Breadth-first from the first-inserted node of each component, so
    /// every node after a component seed enters the order with at least one
    /// already-ordered neighbor. That keeps the partial mapping connected
    /// and lets candidate generation work from mapped neighborhoods;
    /// later seeds handle disconnected feature graphs.
    fn prepare_search_order(&self) -> Vec<NodeIdx> {
        let count = self.feature_index.node_count();
        let mut order = Vec::with_capacity(count);
        let mut seen = vec![false; count];

        for seed in 0..count {
            if seen[seed] {
                continue;
            }
            seen[seed] = true;
            let mut queue = VecDeque::from([seed]);
            while let Some(current) = queue.pop_front() {
                order.push(current);
                for &neighbor in self.feature_index.neighbors(current) {
                    if !seen[neighbor] {
                        seen[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        order
    }

    /// Assigns the feature node at `pos` to each viable candidate in turn.
    fn recurse(
        &self,
        order: &[NodeIdx],
        pos: usize,
        state: &mut SearchState,
        results: &mut Vec<Embedding>,
    ) -> Result<ControlFlow<()>, MatchError> {
        if pos == order.len() {
            results.push(Embedding::from_mapping(
                &state.mapping,
                self.feature_index,
                self.workpiece_index,
            ));
            return Ok(match self.mode {
                SearchMode::FirstOnly => ControlFlow::Break(()),
                SearchMode::Exhaustive => ControlFlow::Continue(()),
            });
        }

        let current = order[pos];
        let candidates = self.candidates_for(current, &state.mapping);

        if candidates.is_empty() {
            tracing::trace!(
                "backtracking: no candidates for feature node {}",
                self.feature_index.id_of(current)
            );
            return Ok(ControlFlow::Continue(()));
        }

        tracing::debug!(
            "feature node {}: {} candidates",
            self.feature_index.id_of(current),
            candidates.len()
        );

        for candidate in candidates {
            self.tick(state)?;

            state.mapping.map(current, candidate);
            let flow = self.recurse(order, pos + 1, state, results)?;
            state.mapping.unmap(current, candidate);

            if flow.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Identifies candidate workpiece nodes for a feature node.
    ///
    /// When the node has already-mapped feature neighbors, candidates are
    /// the intersection of the workpiece neighbor sets of their images;
    /// otherwise (component seeds) every workpiece node is considered.
    /// Candidates are then filtered for injectivity, node compatibility and
    /// edge constraints, in that order, and returned in ascending index
    /// order for deterministic expansion.
    fn candidates_for(&self, current: NodeIdx, mapping: &Mapping) -> Vec<NodeIdx> {
        let mapped_neighbor_images: Vec<NodeIdx> = self
            .feature_index
            .neighbors(current)
            .iter()
            .filter_map(|&neighbor| mapping.image_of(neighbor))
            .collect();

        let pool: Vec<NodeIdx> = if mapped_neighbor_images.is_empty() {
            (0..self.workpiece_index.node_count()).collect()
        } else {
            let neighbor_sets: Vec<_> = mapped_neighbor_images
                .iter()
                .map(|&image| self.workpiece_index.neighbor_set(image))
                .collect();
            intersect_sets(neighbor_sets)
                .into_iter()
                .sorted_unstable()
                .collect()
        };

        pool.into_iter()
            .filter(|&candidate| !mapping.is_used_workpiece(candidate))
            .filter(|&candidate| {
                self.node_compat.compatible(
                    self.feature_index.attributes(current),
                    self.workpiece_index.attributes(candidate),
                )
            })
            .filter(|&candidate| self.check_edge_constraints(current, candidate, mapping))
            .collect()
    }

    /// Checks every edge between `current` and its already-mapped feature
    /// neighbors against the workpiece, failing on the first violation.
    fn check_edge_constraints(
        &self,
        current: NodeIdx,
        candidate: NodeIdx,
        mapping: &Mapping,
    ) -> bool {
        self.feature_index
            .neighbors(current)
            .iter()
            .all(|&neighbor| {
                let Some(image) = mapping.image_of(neighbor) else {
                    // Unmapped neighbors are constrained when their own turn comes.
                    return true;
                };
                self.workpiece_index.neighbor_set(candidate).contains(&image)
                    && self.edge_compat.compatible(
                        self.feature_index.edge_attributes(current, neighbor),
                        self.workpiece_index.edge_attributes(candidate, image),
                    )
            })
    }

    /// Accounts for one candidate expansion against the configured budget.
    fn tick(&self, state: &mut SearchState) -> Result<(), MatchError> {
        if self.config.cancel.is_cancelled() {
            return Err(MatchError::Cancelled {
                visited: state.visited,
            });
        }
        state.visited += 1;
        if let Some(limit) = self.config.max_visits {
            if state.visited > limit {
                return Err(MatchError::VisitLimitExceeded { limit });
            }
        }
        Ok(())
    }
}
