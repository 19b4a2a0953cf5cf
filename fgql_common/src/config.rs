//! Configuration for the subgraph isomorphism search.
//!
//! This module exposes a minimal, stable surface for consumers to
//! parameterize how matching should behave. Two knobs exist:
//!
//! - `max_visits`: an upper bound on candidate expansions, guarding against
//!   exponential enumeration over highly symmetric graphs.
//! - `cancel`: a cooperative cancellation token checked between candidate
//!   expansions, so a caller can abort a long-running search from another
//!   thread.
//!
//! Both default to "off": `Config::default()` searches unbounded and is
//! never cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between a search and its caller.
///
/// Cloning the token shares the underlying flag; cancelling any clone
/// cancels them all. A cancelled search fails with `Cancelled` rather than
/// returning a silently truncated result list.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once [`CancelToken::cancel`] has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Global search configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Upper bound on candidate expansions; `None` means unbounded.
    pub max_visits: Option<u64>,
    /// Cooperative cancellation token, checked between candidate expansions.
    pub cancel: CancelToken,
}

impl Config {
    /// Starts building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    max_visits: Option<u64>,
    cancel: Option<CancelToken>,
}

impl ConfigBuilder {
    /// Bounds the number of candidate expansions the search may perform.
    #[must_use]
    pub fn max_visits(mut self, limit: u64) -> Self {
        self.max_visits = Some(limit);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> Config {
        Config {
            max_visits: self.max_visits,
            cancel: self.cancel.unwrap_or_default(),
        }
    }
}
