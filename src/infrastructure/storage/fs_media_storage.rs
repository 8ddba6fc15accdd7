//! Filesystem implementation of media storage.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use super::service::{MediaStorage, StorageError, StorageResult};

/// Stores media files on the local filesystem under a fixed root directory.
pub struct FsMediaStorage {
    root: PathBuf,
}

impl FsMediaStorage {
    /// Creates a storage backend rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a relative path against the root, rejecting escapes.
    fn resolve(&self, relative_path: &str) -> StorageResult<PathBuf> {
        let relative = Path::new(relative_path);

        let escapes = relative.components().any(|c| {
            !matches!(c, Component::Normal(_))
        });
        if relative_path.is_empty() || escapes {
            return Err(StorageError::InvalidPath(relative_path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStorage for FsMediaStorage {
    async fn store(&self, relative_path: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.resolve(relative_path)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn remove(&self, relative_path: &str) -> StorageResult<()> {
        let path = self.resolve(relative_path)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
