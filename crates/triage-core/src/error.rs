//! Error types for incident triage.
//!
//! Not-found conditions never show up here: unresolved fields carry the
//! [`NOT_FOUND`](crate::NOT_FOUND) sentinel instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Collaborator error ({source_name}): {message}")]
    Collaborator {
        source_name: String,
        message: String,
    },

    #[error("Repeated label in address tagging: {0}")]
    RepeatedLabel(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a failure reported by an external collaborator.
    pub fn collaborator(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
