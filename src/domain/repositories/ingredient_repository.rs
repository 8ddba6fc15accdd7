//! Repository trait for user-scoped ingredients.

use crate::domain::entities::{Ingredient, NewIngredient};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for ingredient storage.
///
/// Mirrors [`super::TagRepository`]; tags and ingredients share the same
/// access patterns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgIngredientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Creates a new ingredient for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_ingredient: NewIngredient) -> Result<Ingredient, AppError>;

    /// Lists a user's ingredients ordered name-descending.
    ///
    /// With `assigned_only`, restricts to ingredients attached to at least
    /// one recipe, de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(
        &self,
        user_id: i64,
        assigned_only: bool,
    ) -> Result<Vec<Ingredient>, AppError>;

    /// Returns the subset of `ids` that exist and belong to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn filter_owned_ids(&self, user_id: i64, ids: &[i64]) -> Result<Vec<i64>, AppError>;
}
