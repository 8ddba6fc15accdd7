#![allow(dead_code)]

use chrono::Utc;
use recipe_api::domain::entities::User;
use recipe_api::infrastructure::storage::FsMediaStorage;
use recipe_api::state::AppState;
use recipe_api::utils::password::hash_password;
use sqlx::PgPool;
use std::sync::Arc;
use tempfile::TempDir;

/// Password used for every fixture account.
pub const TEST_PASSWORD: &str = "Password123!";

/// Signing secret wired into test states.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Builds an [`AppState`] over the given pool with filesystem media storage
/// rooted in a fresh temporary directory.
///
/// The [`TempDir`] must stay alive for as long as uploads are expected to
/// work; dropping it deletes the media root.
pub fn create_test_state(pool: PgPool) -> (AppState, TempDir) {
    let media_root = TempDir::new().unwrap();
    let storage = Arc::new(FsMediaStorage::new(media_root.path()));

    let state = AppState::new(
        Arc::new(pool),
        storage,
        TEST_SIGNING_SECRET.to_string(),
    );

    (state, media_root)
}

/// Inserts a user with [`TEST_PASSWORD`] and returns the full entity.
pub async fn create_test_user(pool: &PgPool, email: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).unwrap();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind("Test User")
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .unwrap();

    User {
        id,
        email: email.to_string(),
        name: "Test User".to_string(),
        password_hash,
        is_active: true,
        is_staff: false,
        is_superuser: false,
        created_at: Utc::now(),
    }
}

pub async fn create_test_tag(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO tags (user_id, name) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_ingredient(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO ingredients (user_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_recipe(pool: &PgPool, user_id: i64, title: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO recipes (user_id, title, time_minutes, price)
        VALUES ($1, $2, 10, 5.00)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attach_tag(pool: &PgPool, recipe_id: i64, tag_id: i64) {
    sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES ($1, $2)")
        .bind(recipe_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn attach_ingredient(pool: &PgPool, recipe_id: i64, ingredient_id: i64) {
    sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES ($1, $2)")
        .bind(recipe_id)
        .bind(ingredient_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Renders a tiny valid PNG for upload tests.
pub fn sample_png() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(1, 1, image::Rgb([120, 80, 40]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
