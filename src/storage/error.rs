//! Storage error types.

use thiserror::Error;

/// Errors from the key-value store and the typed settings layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error for '{key}': {message}")]
    DeserializationError { key: String, message: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
