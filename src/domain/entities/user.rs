//! User entity, identified by email instead of a username.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// The email doubles as the login identifier and is stored normalized
/// (domain part lowercased). `password_hash` is a PHC-format Argon2id hash;
/// the plaintext password never reaches an entity.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
}
