//! Repository trait for recipes and their associations.

use crate::domain::entities::{Ingredient, NewRecipe, Recipe, RecipePatch, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter applied to recipe listings.
///
/// Each ID list uses "any of" semantics: a recipe matches when it carries at
/// least one of the listed tags (respectively ingredients). `None` disables
/// the dimension entirely.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub tag_ids: Option<Vec<i64>>,
    pub ingredient_ids: Option<Vec<i64>>,
}

impl RecipeFilter {
    /// Returns true when no filtering dimension is active.
    pub fn is_empty(&self) -> bool {
        self.tag_ids.is_none() && self.ingredient_ids.is_none()
    }
}

/// Repository interface for recipe storage.
///
/// All operations are scoped to an owning user; a recipe belonging to someone
/// else behaves exactly like a missing one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecipeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Creates a recipe together with its tag/ingredient associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError>;

    /// Lists a user's recipes, id-descending, de-duplicated, honoring `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, user_id: i64, filter: &RecipeFilter) -> Result<Vec<Recipe>, AppError>;

    /// Finds a single recipe owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Recipe>, AppError>;

    /// Loads the tags attached to a recipe, ordered name-descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_tags(&self, recipe_id: i64) -> Result<Vec<Tag>, AppError>;

    /// Loads the ingredients attached to a recipe, ordered name-descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_ingredients(&self, recipe_id: i64) -> Result<Vec<Ingredient>, AppError>;

    /// Applies a partial update, replacing association sets when present.
    ///
    /// Returns `None` if no recipe with that ID belongs to the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, AppError>;

    /// Deletes a recipe; join rows cascade.
    ///
    /// Returns `false` if no recipe with that ID belongs to the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError>;

    /// Stores the image path for a recipe.
    ///
    /// Returns `false` if no recipe with that ID belongs to the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_image(&self, user_id: i64, id: i64, image: &str) -> Result<bool, AppError>;
}
