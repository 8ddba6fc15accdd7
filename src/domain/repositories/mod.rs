//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account storage and lookup
//! - [`TokenRepository`] - Auth token storage and validation
//! - [`TagRepository`] - User-scoped tag operations
//! - [`IngredientRepository`] - User-scoped ingredient operations
//! - [`RecipeRepository`] - Recipe CRUD and association management

pub mod ingredient_repository;
pub mod recipe_repository;
pub mod tag_repository;
pub mod token_repository;
pub mod user_repository;

pub use ingredient_repository::IngredientRepository;
pub use recipe_repository::{RecipeFilter, RecipeRepository};
pub use tag_repository::TagRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
