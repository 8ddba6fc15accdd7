//! Auth token entity.

use chrono::{DateTime, Utc};

/// An issued authentication token.
///
/// Only the HMAC-SHA256 hash of the raw token is stored; the raw value is
/// returned to the client once at login and cannot be recovered afterwards.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AuthToken {
    /// Returns true if the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
