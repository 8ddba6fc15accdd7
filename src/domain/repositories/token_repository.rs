//! Repository trait for auth token storage.

use crate::domain::entities::AuthToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for issued auth tokens.
///
/// Tokens are keyed by their HMAC-SHA256 hash; raw token values never reach
/// this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the hash already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<AuthToken, AppError>;

    /// Resolves the owning user ID for a non-revoked token hash.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user_id))` if the token is valid and not revoked
    /// - `Ok(None)` if the token is unknown or revoked
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_user_id(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Updates the last_used_at timestamp for a token.
    ///
    /// Called after successful authentication to track token usage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;
}
