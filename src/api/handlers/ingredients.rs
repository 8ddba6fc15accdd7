//! Handlers for ingredient endpoints.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::ingredient::{CreateIngredientRequest, IngredientResponse};
use crate::api::dto::tag::AttributeFilterQuery;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated user's ingredients, name-descending.
///
/// # Endpoint
///
/// `GET /recipe/ingredients`
///
/// # Query Parameters
///
/// - `assigned_only` (optional, integer): when non-zero, only ingredients
///   attached to at least one recipe are returned, de-duplicated.
pub async fn ingredient_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<AttributeFilterQuery>,
) -> Result<Json<Vec<IngredientResponse>>, AppError> {
    let ingredients = state
        .ingredient_service
        .list(user.id, query.is_assigned_only())
        .await?;

    Ok(Json(ingredients.into_iter().map(Into::into).collect()))
}

/// Creates an ingredient owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /recipe/ingredients`
///
/// # Errors
///
/// Returns 400 Bad Request if the name is empty.
pub async fn create_ingredient_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<IngredientResponse>), AppError> {
    payload.validate()?;

    let ingredient = state
        .ingredient_service
        .create(user.id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient.into())))
}
