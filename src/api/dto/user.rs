//! DTOs for account and profile endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /user/create`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Plaintext password, hashed before storage. Minimum 8 characters.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Request body for `POST /user/token`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTokenRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response for `POST /user/token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request body for `PUT /user/me`: full profile replace.
///
/// The password is optional; when absent the stored hash is untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct PutProfileRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// Request body for `PATCH /user/me`: partial profile update.
#[derive(Debug, Deserialize, Validate)]
pub struct PatchProfileRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// Public JSON representation of an account.
///
/// Password material is never part of any response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            email: user.email,
            name: user.name,
        }
    }
}
