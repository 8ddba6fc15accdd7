//! DTOs for ingredient endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Ingredient;

/// Request body for `POST /recipe/ingredients`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIngredientRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: String,
}

/// JSON representation of an ingredient.
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        IngredientResponse {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}
