//! Error types for qfind

use thiserror::Error;

/// Result type alias for qfind operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Finder error types
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Malformed dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Malformed config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}
