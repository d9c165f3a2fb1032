//! Triage Runtime: builds the pipeline from injected collaborators and
//! produces incident reports.

pub mod pipeline;
pub mod types;

pub use pipeline::{Pipeline, PipelineBuilder};
pub use types::*;
