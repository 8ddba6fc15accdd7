//! PostgreSQL implementation of the ingredient repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Ingredient, NewIngredient};
use crate::domain::repositories::IngredientRepository;
use crate::error::AppError;

/// PostgreSQL repository for user-scoped ingredients.
pub struct PgIngredientRepository {
    pool: Arc<PgPool>,
}

impl PgIngredientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct IngredientRow {
    id: i64,
    user_id: i64,
    name: String,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Ingredient {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
        }
    }
}

#[async_trait]
impl IngredientRepository for PgIngredientRepository {
    async fn create(&self, new_ingredient: NewIngredient) -> Result<Ingredient, AppError> {
        let row = sqlx::query_as::<_, IngredientRow>(
            r#"
            INSERT INTO ingredients (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name
            "#,
        )
        .bind(new_ingredient.user_id)
        .bind(&new_ingredient.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        assigned_only: bool,
    ) -> Result<Vec<Ingredient>, AppError> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT DISTINCT i.id, i.user_id, i.name
            FROM ingredients i
            WHERE i.user_id = $1
              AND ($2 = FALSE OR EXISTS (
                    SELECT 1 FROM recipe_ingredients ri WHERE ri.ingredient_id = i.id))
            ORDER BY i.name DESC
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
            FROM ingredients
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
