//! Common utilities and shared types for the FGQL workspace.
//!
//! This crate provides the search configuration, the node/edge compatibility
//! predicates, and the common test cases used across the FGQL project.

mod compat;
mod config;
mod test_cases;

pub use crate::compat::*;
pub use crate::config::*;
pub use crate::test_cases::*;
