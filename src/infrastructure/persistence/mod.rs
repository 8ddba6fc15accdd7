//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and lookup
//! - [`PgTokenRepository`] - Auth token storage and validation
//! - [`PgTagRepository`] - User-scoped tag operations
//! - [`PgIngredientRepository`] - User-scoped ingredient operations
//! - [`PgRecipeRepository`] - Recipe CRUD and association management

pub mod pg_ingredient_repository;
pub mod pg_recipe_repository;
pub mod pg_tag_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_ingredient_repository::PgIngredientRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
