//! Error types for nestedpages
//!
//! Uses `thiserror` for library errors. The tree walks themselves degrade
//! instead of failing; these variants cover construction, configuration
//! and host-store failures.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;

/// Result type alias for nestedpages operations
pub type NestedPagesResult<T> = Result<T, NestedPagesError>;

/// Main error type for nestedpages operations
#[derive(Error, Debug)]
pub enum NestedPagesError {
    /// The host does not know the requested post type
    #[error("unknown post type '{post_type}'")]
    UnknownPostType { post_type: String },

    /// A repository port failed
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Site snapshot could not be parsed
    #[error("invalid site snapshot {file}: {message}")]
    InvalidSnapshot { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
