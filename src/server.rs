//! HTTP server initialization and runtime setup.
//!
//! Handles database connection with startup retry, migrations, media storage
//! setup, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::storage::FsMediaStorage;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with startup retry while the database boots)
/// - Apply migrations
/// - Media root directory for uploaded images
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection keeps failing after retries
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let media_root = PathBuf::from(&config.media_root);
    tokio::fs::create_dir_all(&media_root)
        .await
        .context("Failed to create media root")?;
    let storage = Arc::new(FsMediaStorage::new(media_root.clone()));

    let state = AppState::new(
        Arc::new(pool),
        storage,
        config.token_signing_secret.clone(),
    );

    let app = app_router(state, config.behind_proxy, &media_root);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Connects to PostgreSQL, retrying with jittered exponential backoff.
///
/// Container orchestration regularly starts the service before the database
/// accepts connections; six attempts spread over roughly half a minute cover
/// the usual boot window.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(500).map(jitter).take(6);

    let pool = Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Database not ready, retrying"))
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}
