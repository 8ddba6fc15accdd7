//! Media storage backends for uploaded files.
//!
//! The [`MediaStorage`] trait abstracts where uploaded bytes land, so
//! handlers and services never touch the filesystem directly.
//!
//! # Implementations
//!
//! - [`FsMediaStorage`] - Local filesystem under a configured media root

pub mod fs_media_storage;
pub mod service;

pub use fs_media_storage::FsMediaStorage;
pub use service::{MediaStorage, StorageError, StorageResult};

#[cfg(test)]
pub use service::MockMediaStorage;
