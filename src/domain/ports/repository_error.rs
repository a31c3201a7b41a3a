//! Error type shared by every repository port

use thiserror::Error;

use crate::domain::value_objects::EntryId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures reported by host-side repositories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or read
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A referenced menu entry does not exist
    #[error("menu entry {0} not found")]
    EntryNotFound(EntryId),

    /// The store rejected a write
    #[error("write rejected: {0}")]
    WriteRejected(String),
}
