//! API route configuration.
//!
//! Protected routes require Bearer token authentication via
//! [`crate::api::middleware::auth`]; public routes are limited to account
//! creation and token issuance.

use crate::api::handlers::{
    create_ingredient_handler, create_recipe_handler, create_tag_handler, create_token_handler,
    create_user_handler, delete_recipe_handler, ingredient_list_handler, me_handler,
    patch_profile_handler, patch_recipe_handler, recipe_detail_handler, recipe_list_handler,
    tag_list_handler, update_profile_handler, update_recipe_handler, upload_recipe_image_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without authentication.
///
/// # Endpoints
///
/// - `POST /user/create` - Register an account
/// - `POST /user/token`  - Exchange credentials for an auth token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/user/create", post(create_user_handler))
        .route("/user/token", post(create_token_handler))
}

/// All routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET/PUT/PATCH /user/me`                       - Own profile
/// - `GET/POST /recipe/tags`                        - List/create tags
/// - `GET/POST /recipe/ingredients`                 - List/create ingredients
/// - `GET/POST /recipe/recipes`                     - List/create recipes
/// - `GET/PUT/PATCH/DELETE /recipe/recipes/{id}`    - Single recipe
/// - `POST /recipe/recipes/{id}/upload-image`       - Attach an image
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user/me",
            get(me_handler)
                .put(update_profile_handler)
                .patch(patch_profile_handler),
        )
        .route(
            "/recipe/tags",
            get(tag_list_handler).post(create_tag_handler),
        )
        .route(
            "/recipe/ingredients",
            get(ingredient_list_handler).post(create_ingredient_handler),
        )
        .route(
            "/recipe/recipes",
            get(recipe_list_handler).post(create_recipe_handler),
        )
        .route(
            "/recipe/recipes/{id}",
            get(recipe_detail_handler)
                .put(update_recipe_handler)
                .patch(patch_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .route(
            "/recipe/recipes/{id}/upload-image",
            post(upload_recipe_image_handler),
        )
}
