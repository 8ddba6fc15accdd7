//! Handlers for account creation, token issuance, and the own-profile endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{
    CreateTokenRequest, CreateUserRequest, PatchProfileRequest, PutProfileRequest, TokenResponse,
    UserResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::ProfileUpdate;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new account.
///
/// # Endpoint
///
/// `POST /user/create` (public)
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password": "at-least-8", "name": "User" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails (including passwords shorter
/// than 8 characters).
/// Returns 409 Conflict if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(&payload.email, &payload.password, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchanges credentials for a fresh opaque auth token.
///
/// # Endpoint
///
/// `POST /user/token` (public)
///
/// # Behavior
///
/// Unknown email and wrong password produce the same generic error so the
/// endpoint cannot be used to probe for registered addresses. The raw token
/// is returned exactly once; only its keyed hash is stored.
///
/// # Errors
///
/// Returns 400 Bad Request on invalid credentials or malformed payload.
pub async fn create_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .issue_token(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /user/me`
pub async fn me_handler(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(user.into())
}

/// Fully replaces the authenticated user's profile.
///
/// # Endpoint
///
/// `PUT /user/me`
///
/// The password is optional; when provided it is re-validated and re-hashed.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if an email change collides with another account.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<PutProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let update = ProfileUpdate {
        email: Some(payload.email),
        name: Some(payload.name),
        password: payload.password,
    };

    let user = state.user_service.update_profile(user.id, update).await?;

    Ok(Json(user.into()))
}

/// Partially updates the authenticated user's profile.
///
/// # Endpoint
///
/// `PATCH /user/me`
///
/// Only provided fields are changed.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if an email change collides with another account.
pub async fn patch_profile_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<PatchProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let update = ProfileUpdate {
        email: payload.email,
        name: payload.name,
        password: payload.password,
    };

    let user = state.user_service.update_profile(user.id, update).await?;

    Ok(Json(user.into()))
}
