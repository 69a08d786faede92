//! Error types for loading and rendering listings.
//!
//! Filtering and sorting never fail. Errors come from reading data sources,
//! from configuration, and from structured output encoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the eventhub library.
#[derive(Debug, Error)]
pub enum EventHubError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported data file format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output mode {0} is not a structured format")]
    NotStructured(&'static str),
}

/// Result type for eventhub operations.
pub type Result<T> = std::result::Result<T, EventHubError>;
