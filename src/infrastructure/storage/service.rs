//! Media storage trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during media storage operations.
#[derive(Debug)]
pub enum StorageError {
    InvalidPath(String),
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPath(p) => write!(f, "Invalid storage path: {}", p),
            Self::Io(e) => write!(f, "Storage I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storing uploaded media files.
///
/// Paths are always relative to the storage root and are produced by the
/// application itself (see [`crate::utils::image_path`]); implementations
/// must reject anything that would escape the root.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FsMediaStorage`] - Local filesystem storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Writes `bytes` at `relative_path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidPath`] for paths that escape the root
    /// and [`StorageError::Io`] for filesystem failures.
    async fn store(&self, relative_path: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Removes the file at `relative_path`.
    ///
    /// Removing a file that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidPath`] for paths that escape the root
    /// and [`StorageError::Io`] for filesystem failures.
    async fn remove(&self, relative_path: &str) -> StorageResult<()>;
}
