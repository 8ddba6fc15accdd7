//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database reachability (public)
//! - `POST /user/create` - Account registration (public, strict rate limit)
//! - `POST /user/token`  - Token issuance (public, strict rate limit)
//! - `/user/me`, `/recipe/*` - Resource API (Bearer token required)
//! - `/media/*`          - Uploaded recipe images (read-only)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token on all resource routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse proxy
/// - `media_root` - directory uploaded images are served from under `/media`
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    media_root: &Path,
) -> NormalizePath<Router> {
    let public = rate_limit::apply_strict(api::routes::public_routes(), behind_proxy);

    let protected = rate_limit::apply(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        behind_proxy,
    );

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(public)
        .merge(protected)
        .nest_service("/media", ServeDir::new(media_root))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
