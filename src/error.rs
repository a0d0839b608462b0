//! Error types for pipeline building

use thiserror::Error;

/// Errors raised while resolving commands or rendering a configuration
#[derive(Debug, Error)]
pub enum ShrubError {
    #[error("{command}: '{field}' must be specified")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },

    #[error("{command}: {reason}")]
    InvalidCommand {
        command: &'static str,
        reason: String,
    },

    #[error("'{format}' is not a valid archive format for {operation}")]
    InvalidArchiveFormat {
        operation: &'static str,
        format: String,
    },

    #[error("{command}: parameters did not serialize to a mapping")]
    NonMappingParams { command: &'static str },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ShrubError {
    pub(crate) fn missing(command: &'static str, field: &'static str) -> Self {
        ShrubError::MissingField { command, field }
    }

    pub(crate) fn invalid(command: &'static str, reason: impl Into<String>) -> Self {
        ShrubError::InvalidCommand {
            command,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShrubError>;
