//! Account registration and profile management.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::email::normalize_email;
use crate::utils::password::hash_password;
use serde_json::json;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Profile fields a user may change about themselves.
///
/// `None` fields are left unchanged. A provided password is re-validated and
/// re-hashed.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Service for account registration and profile updates.
///
/// Normalizes emails and hashes passwords before anything reaches the
/// repository; stored credentials never contain plaintext.
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Registers a regular account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the password is shorter than
    /// [`MIN_PASSWORD_LEN`].
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AppError> {
        self.create_user(email, password, name, false, false).await
    }

    /// Creates a superuser account. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::register`].
    pub async fn create_superuser(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AppError> {
        self.create_user(email, password, name, true, true).await
    }

    async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<User, AppError> {
        ensure_password_strength(password)?;

        let new_user = NewUser {
            email: normalize_email(email),
            name: name.to_string(),
            password_hash: hash_password(password)?,
            is_staff,
            is_superuser,
        };

        let user = self.repository.create(new_user).await?;

        tracing::info!(user_id = user.id, "Created user account");

        Ok(user)
    }

    /// Applies a profile update for an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a provided password is too short.
    /// Returns [`AppError::Conflict`] if an email change collides.
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        if let Some(password) = &update.password {
            ensure_password_strength(password)?;
        }

        let patch = UserPatch {
            email: update.email.map(|e| normalize_email(&e)),
            name: update.name,
            password_hash: update
                .password
                .map(|p| hash_password(&p))
                .transpose()?,
        };

        self.repository
            .update(user_id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))
    }
}

fn ensure_password_strength(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(
            "Password is too short",
            json!({ "min_length": MIN_PASSWORD_LEN }),
        ));
    }

    Ok(())
}
