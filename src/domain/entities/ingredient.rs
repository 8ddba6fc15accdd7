//! Ingredient entity.

/// A user-owned ingredient that can be attached to any number of recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

/// Input data for creating a new ingredient.
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub user_id: i64,
    pub name: String,
}
