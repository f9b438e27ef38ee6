//! Error type for loading, building and rendering networks

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the library
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A record lacks one of `subject`, `agents`, `measurements` or `results`
    #[error("record #{index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based position of the record in the dataset
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// The dataset document could not be parsed
    #[error("failed to parse dataset: {0}")]
    Parse(String),

    /// The dataset file has an extension we cannot read
    #[error("unsupported dataset file {}: expected a .toml or .json file", .0.display())]
    UnsupportedInput(PathBuf),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The page template failed to render
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),

    /// Graph data could not be serialized
    #[error("failed to serialize graph data: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for NetworkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T, E = NetworkError> = std::result::Result<T, E>;
