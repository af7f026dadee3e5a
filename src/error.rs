//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum StudyError {
    /// Input rejected before any scheduling or output.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Report file could not be created or written.
    #[error("failed to write report to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl StudyError {
    /// Whether the error came from rejected user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, StudyError::Validation(_))
    }
}

impl From<figment::Error> for StudyError {
    fn from(error: figment::Error) -> Self {
        StudyError::Config(Box::new(error))
    }
}

pub type Result<T, E = StudyError> = std::result::Result<T, E>;
