//! Storage abstraction trait
//!
//! This module defines the Storage trait the conversion service works
//! against, so handlers and the orchestrator stay decoupled from filesystem
//! details.

use async_trait::async_trait;
use pdf2docx_core::AppError;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => AppError::NotFound(format!("file not found: {}", key)),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::WriteFailed(msg)
            | StorageError::ReadFailed(msg)
            | StorageError::DeleteFailed(msg)
            | StorageError::ConfigError(msg) => AppError::Internal(msg),
            StorageError::IoError(e) => AppError::Internal(format!("IO error: {}", e)),
        }
    }
}

/// Storage abstraction for one file area.
///
/// Keys are flat file names; see the crate root documentation for the
/// sanitization rules every implementation must enforce.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file under the given key, replacing any existing content.
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Read a file's full contents.
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a file. Deleting a missing file is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether a file exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Size in bytes of an existing file.
    async fn content_length(&self, key: &str) -> StorageResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_app_not_found() {
        let err: AppError = StorageError::NotFound("a.docx".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_invalid_key_maps_to_invalid_input() {
        let err: AppError = StorageError::InvalidKey("bad key".to_string()).into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_write_failed_maps_to_internal() {
        let err: AppError = StorageError::WriteFailed("disk full".to_string()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
