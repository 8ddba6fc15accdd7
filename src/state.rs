use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, IngredientService, RecipeService, TagService, UserService,
};
use crate::infrastructure::persistence::{
    PgIngredientRepository, PgRecipeRepository, PgTagRepository, PgTokenRepository,
    PgUserRepository,
};
use crate::infrastructure::storage::MediaStorage;

/// Shared application state injected into all handlers.
///
/// Services are instantiated once over the PostgreSQL repositories; the raw
/// pool is kept around for the health check.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository, PgUserRepository>>,
    pub tag_service: Arc<TagService<PgTagRepository>>,
    pub ingredient_service: Arc<IngredientService<PgIngredientRepository>>,
    pub recipe_service:
        Arc<RecipeService<PgRecipeRepository, PgTagRepository, PgIngredientRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires the full service stack over a connection pool and media storage.
    pub fn new(
        pool: Arc<PgPool>,
        storage: Arc<dyn MediaStorage>,
        token_signing_secret: String,
    ) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));
        let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));
        let ingredient_repo = Arc::new(PgIngredientRepository::new(pool.clone()));
        let recipe_repo = Arc::new(PgRecipeRepository::new(pool.clone()));

        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let auth_service = Arc::new(AuthService::new(
            token_repo,
            user_repo,
            token_signing_secret,
        ));
        let tag_service = Arc::new(TagService::new(tag_repo.clone()));
        let ingredient_service = Arc::new(IngredientService::new(ingredient_repo.clone()));
        let recipe_service = Arc::new(RecipeService::new(
            recipe_repo,
            tag_repo,
            ingredient_repo,
            storage,
        ));

        Self {
            user_service,
            auth_service,
            tag_service,
            ingredient_service,
            recipe_service,
            db: pool,
        }
    }
}
