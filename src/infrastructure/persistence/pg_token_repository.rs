//! PostgreSQL implementation of the token repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::AuthToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// PostgreSQL repository for auth token storage and validation.
///
/// Stores keyed hashes only. Raw tokens are never persisted.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    id: i64,
    user_id: i64,
    token_hash: String,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<TokenRow> for AuthToken {
    fn from(row: TokenRow) -> Self {
        AuthToken {
            id: row.id,
            user_id: row.user_id,
            token_hash: row.token_hash,
            created_at: row.created_at,
            last_used_at: row.last_used_at,
            revoked_at: row.revoked_at,
        }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<AuthToken, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            INSERT INTO auth_tokens (user_id, token_hash)
            VALUES ($1, $2)
            RETURNING id, user_id, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_user_id(&self, token_hash: &str) -> Result<Option<i64>, AppError> {
        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM auth_tokens
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user_id)
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE auth_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
