//! Error types for the matching engine.

use thiserror::Error;

/// Errors raised while a search is in flight.
///
/// Both variants are cooperative aborts requested through the
/// [`Config`](fgql_common::Config), not defects: the caller may retry with
/// a higher budget or a fresh token. Malformed graphs cannot reach the
/// engine — they are rejected by `fgql_graph` at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The caller's cancellation token was triggered mid-search.
    #[error("search cancelled after {visited} candidate expansions")]
    Cancelled {
        /// Candidate expansions performed before the cancellation was seen.
        visited: u64,
    },

    /// The configured candidate visit budget ran out.
    #[error("search exceeded the candidate visit limit of {limit}")]
    VisitLimitExceeded {
        /// The configured limit that was exceeded.
        limit: u64,
    },
}
