//! Authentication service: token issuance and validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use crate::utils::email::normalize_email;
use crate::utils::password::verify_password;
use crate::utils::token_generator::generate_token;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for issuing and validating opaque auth tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService<T: TokenRepository, U: UserRepository> {
    token_repository: Arc<T>,
    user_repository: Arc<U>,
    signing_secret: String,
}

impl<T: TokenRepository, U: UserRepository> AuthService<T, U> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` is the HMAC key; it must stay stable across restarts
    /// or every issued token becomes invalid.
    pub fn new(token_repository: Arc<T>, user_repository: Arc<U>, signing_secret: String) -> Self {
        Self {
            token_repository,
            user_repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Issues a fresh token for the given credentials.
    ///
    /// Unknown email, wrong password, and deactivated account all produce the
    /// same generic error so callers cannot enumerate registered addresses.
    ///
    /// # Returns
    ///
    /// The raw token. It is shown to the client exactly once; only the keyed
    /// hash is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on invalid credentials.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            return Err(invalid_credentials());
        };

        if !user.is_active || !verify_password(password, &user.password_hash) {
            return Err(invalid_credentials());
        }

        let token = generate_token();
        let token_hash = self.hash_token(&token);

        self.token_repository.create(user.id, &token_hash).await?;

        tracing::info!(user_id = user.id, "Issued auth token");

        Ok(token)
    }

    /// Authenticates a raw token and resolves the requesting user.
    ///
    /// On successful authentication, updates the `last_used_at` timestamp for
    /// monitoring and audit purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - Token hash does not match any stored credentials
    /// - Token has been revoked
    /// - The owning account no longer exists or is deactivated
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = self.hash_token(token);

        let Some(user_id) = self.token_repository.find_user_id(&token_hash).await? else {
            return Err(unauthorized());
        };

        let Some(user) = self.user_repository.find_by_id(user_id).await? else {
            return Err(unauthorized());
        };

        if !user.is_active {
            return Err(unauthorized());
        }

        let _ = self.token_repository.update_last_used(&token_hash).await;

        Ok(user)
    }
}

fn invalid_credentials() -> AppError {
    AppError::bad_request(
        "Unable to authenticate with provided credentials",
        json!({}),
    )
}

fn unauthorized() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({"reason": "Invalid or revoked token"}),
    )
}
