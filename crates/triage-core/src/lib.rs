//! Triage Core: error type, sentinel value, keyword-table configuration,
//! category classification contract.

pub mod classify;
pub mod config;
pub mod error;

pub use classify::{CategoryClassifier, Classification};
pub use config::{CategorySpec, TriageConfig, UrgencyThresholds, WeightedTerm};
pub use error::{Error, Result};

/// Placeholder rendered for any field that could not be resolved.
pub const NOT_FOUND: &str = "Not found";
