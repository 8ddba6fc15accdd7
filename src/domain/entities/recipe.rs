//! Recipe entity and its creation/update companions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{Ingredient, Tag};

/// A recipe owned by a single user.
///
/// `tag_ids` and `ingredient_ids` carry the associated attribute IDs in
/// ascending order; full attribute rows are only loaded for the detail
/// representation (see [`RecipeDetails`]). `image` is a path relative to the
/// media root, set by the upload endpoint.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tag_ids: Vec<i64>,
    pub ingredient_ids: Vec<i64>,
}

impl Recipe {
    /// Returns true if an image has been uploaded for this recipe.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A recipe with its tags and ingredients fully resolved.
#[derive(Debug, Clone)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<Ingredient>,
}

/// Input data for creating a new recipe.
///
/// `tag_ids`/`ingredient_ids` are expected sorted and de-duplicated; the
/// service layer normalizes them before they reach the repository.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub user_id: i64,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tag_ids: Vec<i64>,
    pub ingredient_ids: Vec<i64>,
}

/// Partial update for an existing recipe.
///
/// `None` fields are left unchanged.
/// `link: Some(None)` clears the link; `Some(Some(url))` sets it.
/// `tag_ids`/`ingredient_ids` replace the full association set when present.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub link: Option<Option<String>>,
    pub tag_ids: Option<Vec<i64>>,
    pub ingredient_ids: Option<Vec<i64>>,
}
