mod common;

use axum::{Extension, Router, routing::get};
use axum_test::TestServer;
use recipe_api::api::handlers::{me_handler, patch_profile_handler, update_profile_handler};
use recipe_api::api::middleware::auth::CurrentUser;
use recipe_api::domain::entities::User;
use recipe_api::utils::password::verify_password;
use serde_json::json;
use sqlx::PgPool;

/// Build a test server with the profile routes and a pre-authenticated user,
/// mirroring an authenticated client without running the token middleware.
fn make_server(pool: PgPool, user: User) -> TestServer {
    let (state, _media) = common::create_test_state(pool);

    let app = Router::new()
        .route(
            "/user/me",
            get(me_handler)
                .put(update_profile_handler)
                .patch(patch_profile_handler),
        )
        .layer(Extension(CurrentUser(user)))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_retrieve_profile_success(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let server = make_server(pool, user);

    let response = server.get("/user/me").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "email": "peterlustig@web.de", "name": "Test User" })
    );
}

#[sqlx::test]
async fn test_post_not_allowed_on_me_url(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let server = make_server(pool, user);

    let response = server.post("/user/me").await;

    response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test]
async fn test_update_user_profile(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let user_id = user.id;
    let server = make_server(pool.clone(), user);

    let response = server
        .put("/user/me")
        .json(&json!({
            "email": "peterlustig@web.de",
            "name": "Lustig, Peter",
            "password": "NewSecurePassword123!"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Lustig, Peter");

    let (name, hash) = sqlx::query_as::<_, (String, String)>(
        "SELECT name, password_hash FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(name, "Lustig, Peter");
    assert!(verify_password("NewSecurePassword123!", &hash));
}

#[sqlx::test]
async fn test_put_without_password_keeps_old_credentials(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let user_id = user.id;
    let server = make_server(pool.clone(), user);

    server
        .put("/user/me")
        .json(&json!({ "email": "peterlustig@web.de", "name": "Renamed" }))
        .await
        .assert_status_ok();

    let hash = sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert!(verify_password(common::TEST_PASSWORD, &hash));
}

#[sqlx::test]
async fn test_patch_updates_single_field(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let user_id = user.id;
    let server = make_server(pool.clone(), user);

    let response = server
        .patch("/user/me")
        .json(&json!({ "name": "Only The Name" }))
        .await;

    response.assert_status_ok();

    let (email, name) =
        sqlx::query_as::<_, (String, String)>("SELECT email, name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(email, "peterlustig@web.de");
    assert_eq!(name, "Only The Name");
}

#[sqlx::test]
async fn test_patch_rejects_short_password(pool: PgPool) {
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let server = make_server(pool, user);

    let response = server
        .patch("/user/me")
        .json(&json!({ "password": "short" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_put_email_conflict(pool: PgPool) {
    common::create_test_user(&pool, "taken@web.de").await;
    let user = common::create_test_user(&pool, "peterlustig@web.de").await;
    let server = make_server(pool, user);

    let response = server
        .put("/user/me")
        .json(&json!({ "email": "taken@web.de", "name": "Test User" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}
