//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// The authenticated user, injected into request extensions by [`layer`].
///
/// Handlers extract it with `Extension<CurrentUser>` and use it for all
/// ownership scoping.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate token hash against database and resolve the owning user
/// 3. Reject revoked tokens and deactivated accounts
/// 4. Update `last_used_at` timestamp
/// 5. Insert [`CurrentUser`] into request extensions
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer` per RFC 6750)
/// if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is not found or revoked
/// - The owning account is deactivated
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
