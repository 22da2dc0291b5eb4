//! Crate-level test suite
//!
//! - Shared subtitle fixtures
//! - End-to-end scenarios from raw file text to queries
//! - Index invariants checked over every fixture

pub mod fixtures;
