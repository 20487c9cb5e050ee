//! Error types for storage operations

use thiserror::Error;
use uuid::Uuid;

/// Error type for storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A company with the same id already exists
    #[error("a company with id '{0}' already exists")]
    AlreadyExists(Uuid),

    /// Backend-specific error
    #[error("storage backend error: {0}")]
    Backend(String),
}
