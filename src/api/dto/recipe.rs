//! DTOs for recipe endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use super::ingredient::IngredientResponse;
use super::tag::TagResponse;
use crate::domain::entities::{Recipe, RecipeDetails};

/// Request body for `POST /recipe/recipes` and `PUT /recipe/recipes/{id}`.
///
/// A PUT is a full replace: an absent `link` clears the stored link and
/// absent `tags`/`ingredients` clear the association sets.
#[derive(Debug, Deserialize, Validate)]
pub struct RecipeRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(range(min = 0))]
    pub time_minutes: i32,

    /// Decimal price; at most two decimal places, range checked server-side.
    pub price: Decimal,

    #[validate(length(max = 255))]
    pub link: Option<String>,

    /// Tag IDs to associate. Must belong to the requesting user.
    #[serde(default)]
    pub tags: Vec<i64>,

    /// Ingredient IDs to associate. Must belong to the requesting user.
    #[serde(default)]
    pub ingredients: Vec<i64>,
}

/// Request body for `PATCH /recipe/recipes/{id}`.
///
/// All fields are optional — only provided fields are changed.
///
/// # `link` semantics
///
/// - **Absent** (`link` not in JSON) → leave existing value unchanged
/// - **`null`** → clear the link
/// - **String** → set a new link
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PatchRecipeRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(range(min = 0))]
    pub time_minutes: Option<i32>,

    pub price: Option<Decimal>,

    /// Link. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub link: Option<Option<String>>,

    /// When present, replaces the full tag association set.
    pub tags: Option<Vec<i64>>,

    /// When present, replaces the full ingredient association set.
    pub ingredients: Option<Vec<i64>>,
}

/// Query parameters for `GET /recipe/recipes`.
///
/// `tags` and `ingredients` are comma-separated integer ID lists with
/// "any of" semantics.
#[derive(Debug, Deserialize, Default)]
pub struct RecipeFilterQuery {
    pub tags: Option<String>,
    pub ingredients: Option<String>,
}

/// Summary JSON representation of a recipe (list and create responses).
///
/// Tags and ingredients appear as bare ID lists; the detail representation
/// nests full objects instead.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tags: Vec<i64>,
    pub ingredients: Vec<i64>,
    pub image: Option<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            link: recipe.link,
            tags: recipe.tag_ids,
            ingredients: recipe.ingredient_ids,
            image: recipe.image,
        }
    }
}

/// Detail JSON representation with nested tag/ingredient objects.
#[derive(Debug, Serialize)]
pub struct RecipeDetailResponse {
    pub id: i64,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<IngredientResponse>,
    pub image: Option<String>,
}

impl From<RecipeDetails> for RecipeDetailResponse {
    fn from(details: RecipeDetails) -> Self {
        RecipeDetailResponse {
            id: details.recipe.id,
            title: details.recipe.title,
            time_minutes: details.recipe.time_minutes,
            price: details.recipe.price,
            link: details.recipe.link,
            tags: details.tags.into_iter().map(Into::into).collect(),
            ingredients: details.ingredients.into_iter().map(Into::into).collect(),
            image: details.recipe.image,
        }
    }
}

/// Response for `POST /recipe/recipes/{id}/upload-image`.
#[derive(Debug, Serialize)]
pub struct RecipeImageResponse {
    pub id: i64,
    pub image: Option<String>,
}
