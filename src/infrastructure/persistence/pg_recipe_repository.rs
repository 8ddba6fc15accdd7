//! PostgreSQL implementation of the recipe repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Ingredient, NewRecipe, Recipe, RecipePatch, Tag};
use crate::domain::repositories::{RecipeFilter, RecipeRepository};
use crate::error::AppError;

/// PostgreSQL repository for recipes and their associations.
///
/// Association IDs are aggregated into arrays directly in SQL so list and
/// detail reads stay single queries. Writes touching the join tables run in
/// a transaction.
pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    user_id: i64,
    title: String,
    time_minutes: i32,
    price: Decimal,
    link: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    tag_ids: Vec<i64>,
    ingredient_ids: Vec<i64>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            time_minutes: row.time_minutes,
            price: row.price,
            link: row.link,
            image: row.image,
            created_at: row.created_at,
            tag_ids: row.tag_ids,
            ingredient_ids: row.ingredient_ids,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AttributeRow {
    id: i64,
    user_id: i64,
    name: String,
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO recipes (user_id, title, time_minutes, price, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(new_recipe.user_id)
        .bind(&new_recipe.title)
        .bind(new_recipe.time_minutes)
        .bind(new_recipe.price)
        .bind(&new_recipe.link)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO recipe_tags (recipe_id, tag_id)
            SELECT $1, unnest($2::bigint[])
            "#,
        )
        .bind(id)
        .bind(&new_recipe.tag_ids)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, ingredient_id)
            SELECT $1, unnest($2::bigint[])
            "#,
        )
        .bind(id)
        .bind(&new_recipe.ingredient_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.find_by_id(new_recipe.user_id, id)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Recipe vanished after insert",
                    serde_json::json!({ "id": id }),
                )
            })
    }

    async fn list(&self, user_id: i64, filter: &RecipeFilter) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.user_id, r.title, r.time_minutes, r.price, r.link, r.image,
                   r.created_at,
                   COALESCE(tt.ids, '{}') AS tag_ids,
                   COALESCE(ii.ids, '{}') AS ingredient_ids
            FROM recipes r
            LEFT JOIN (
                SELECT recipe_id, array_agg(tag_id ORDER BY tag_id) AS ids
                FROM recipe_tags GROUP BY recipe_id
            ) tt ON tt.recipe_id = r.id
            LEFT JOIN (
                SELECT recipe_id, array_agg(ingredient_id ORDER BY ingredient_id) AS ids
                FROM recipe_ingredients GROUP BY recipe_id
            ) ii ON ii.recipe_id = r.id
            WHERE r.user_id = $1
              AND ($2::bigint[] IS NULL OR EXISTS (
                    SELECT 1 FROM recipe_tags f
                    WHERE f.recipe_id = r.id AND f.tag_id = ANY($2)))
              AND ($3::bigint[] IS NULL OR EXISTS (
                    SELECT 1 FROM recipe_ingredients f
                    WHERE f.recipe_id = r.id AND f.ingredient_id = ANY($3)))
            ORDER BY r.id DESC
            "#,
        )
        .bind(user_id)
        .bind(&filter.tag_ids)
        .bind(&filter.ingredient_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.user_id, r.title, r.time_minutes, r.price, r.link, r.image,
                   r.created_at,
                   COALESCE(tt.ids, '{}') AS tag_ids,
                   COALESCE(ii.ids, '{}') AS ingredient_ids
            FROM recipes r
            LEFT JOIN (
                SELECT recipe_id, array_agg(tag_id ORDER BY tag_id) AS ids
                FROM recipe_tags GROUP BY recipe_id
            ) tt ON tt.recipe_id = r.id
            LEFT JOIN (
                SELECT recipe_id, array_agg(ingredient_id ORDER BY ingredient_id) AS ids
                FROM recipe_ingredients GROUP BY recipe_id
            ) ii ON ii.recipe_id = r.id
            WHERE r.user_id = $1 AND r.id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_tags(&self, recipe_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, AttributeRow>(
            r#"
            SELECT t.id, t.user_id, t.name
            FROM tags t
            JOIN recipe_tags rt ON rt.tag_id = t.id
            WHERE rt.recipe_id = $1
            ORDER BY t.name DESC
            "#,
        )
        .bind(recipe_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Tag {
                id: r.id,
                user_id: r.user_id,
                name: r.name,
            })
            .collect())
    }

    async fn get_ingredients(&self, recipe_id: i64) -> Result<Vec<Ingredient>, AppError> {
        let rows = sqlx::query_as::<_, AttributeRow>(
            r#"
            SELECT i.id, i.user_id, i.name
            FROM ingredients i
            JOIN recipe_ingredients ri ON ri.ingredient_id = i.id
            WHERE ri.recipe_id = $1
            ORDER BY i.name DESC
            "#,
        )
        .bind(recipe_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Ingredient {
                id: r.id,
                user_id: r.user_id,
                name: r.name,
            })
            .collect())
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, AppError> {
        let mut tx = self.pool.begin().await?;

        let link_changed = patch.link.is_some();
        let link_value = patch.link.flatten();

        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE recipes
            SET title = COALESCE($3, title),
                time_minutes = COALESCE($4, time_minutes),
                price = COALESCE($5, price),
                link = CASE WHEN $6 THEN $7 ELSE link END
            WHERE user_id = $1 AND id = $2
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(id)
        .bind(patch.title)
        .bind(patch.time_minutes)
        .bind(patch.price)
        .bind(link_changed)
        .bind(link_value)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(tag_ids) = &patch.tag_ids {
            sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                r#"
                INSERT INTO recipe_tags (recipe_id, tag_id)
                SELECT $1, unnest($2::bigint[])
                "#,
            )
            .bind(id)
            .bind(tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(ingredient_ids) = &patch.ingredient_ids {
            sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                r#"
                INSERT INTO recipe_ingredients (recipe_id, ingredient_id)
                SELECT $1, unnest($2::bigint[])
                "#,
            )
            .bind(id)
            .bind(ingredient_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_id(user_id, id).await
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM recipes WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_image(&self, user_id: i64, id: i64, image: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE recipes SET image = $3 WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .bind(image)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
