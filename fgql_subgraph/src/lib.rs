//! Subgraph isomorphism engine for feature/workpiece graphs.
//!
//! This crate decides whether a feature graph embeds into a workpiece graph
//! and enumerates every embedding. It uses a backtracking search with a
//! connectivity-first node order and neighbor-set intersection to bound
//! candidate generation, deferring all attribute comparisons to
//! caller-supplied [`NodeCompat`]/[`EdgeCompat`] predicates.
//!
//! The matching semantics are plain (non-induced) subgraph isomorphism:
//! every feature edge must land on a compatible workpiece edge between the
//! mapped endpoints; the workpiece may carry extra edges and nodes anywhere.

mod mapping;
mod utils;

pub mod embedding;
pub mod error;
pub mod graph_index;
pub mod matcher;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod tests;

pub use embedding::Embedding;
pub use error::MatchError;
pub use graph_index::{GraphIndex, NodeIdx};
pub use matcher::SubgraphMatcher;

// The engine's public signatures are written against these shared types.
pub use fgql_common::{CancelToken, Config, EdgeCompat, NodeCompat};
