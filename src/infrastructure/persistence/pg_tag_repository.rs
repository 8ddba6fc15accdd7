//! PostgreSQL implementation of the tag repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// PostgreSQL repository for user-scoped tags.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    user_id: i64,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
        }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name
            "#,
        )
        .bind(new_tag.user_id)
        .bind(&new_tag.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        assigned_only: bool,
    ) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT DISTINCT t.id, t.user_id, t.name
            FROM tags t
            WHERE t.user_id = $1
              AND ($2 = FALSE OR EXISTS (
                    SELECT 1 FROM recipe_tags rt WHERE rt.tag_id = t.id))
            ORDER BY t.name DESC
            "#,
        )
        .bind(user_id)
        .bind(assigned_only)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn filter_owned_ids(&self, user_id: i64, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let owned = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM tags
            WHERE user_id = $1 AND id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(owned)
    }
}
