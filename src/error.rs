// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not decode {path} into text: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Could not open container {path}: {message}")]
    Container { path: PathBuf, message: String },

    #[error("Unparsable timestamp: {0:?}")]
    UnparsableTimestamp(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExtractError::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn container(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExtractError::Container {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for failures that belong to a single input file and must not
    /// abort the rest of a batch.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ExtractError::Decode { .. }
                | ExtractError::Container { .. }
                | ExtractError::FileOperation { .. }
                | ExtractError::Validation(_)
        )
    }
}
