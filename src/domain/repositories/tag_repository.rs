//! Repository trait for user-scoped tags.

use crate::domain::entities::{NewTag, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tag storage.
///
/// All reads are scoped to a single owning user; there is no cross-user
/// visibility at this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Creates a new tag for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError>;

    /// Lists a user's tags ordered name-descending.
    ///
    /// With `assigned_only`, restricts to tags attached to at least one
    /// recipe, de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(&self, user_id: i64, assigned_only: bool)
    -> Result<Vec<Tag>, AppError>;

    /// Returns the subset of `ids` that exist and belong to `user_id`.
    ///
    /// Used to validate recipe associations before writing them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn filter_owned_ids(&self, user_id: i64, ids: &[i64]) -> Result<Vec<i64>, AppError>;
}
