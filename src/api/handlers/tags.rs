//! Handlers for tag endpoints.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::tag::{AttributeFilterQuery, CreateTagRequest, TagResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated user's tags, name-descending.
///
/// # Endpoint
///
/// `GET /recipe/tags`
///
/// # Query Parameters
///
/// - `assigned_only` (optional, integer): when non-zero, only tags attached
///   to at least one recipe are returned, de-duplicated.
pub async fn tag_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<AttributeFilterQuery>,
) -> Result<Json<Vec<TagResponse>>, AppError> {
    let tags = state
        .tag_service
        .list(user.id, query.is_assigned_only())
        .await?;

    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

/// Creates a tag owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /recipe/tags`
///
/// # Errors
///
/// Returns 400 Bad Request if the name is empty.
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<TagResponse>), AppError> {
    payload.validate()?;

    let tag = state.tag_service.create(user.id, payload.name).await?;

    Ok((StatusCode::CREATED, Json(tag.into())))
}
