mod common;

use axum::{Extension, Router, middleware, routing::get};
use axum_test::TestServer;
use recipe_api::api::handlers::{create_ingredient_handler, ingredient_list_handler};
use recipe_api::api::middleware::auth;
use recipe_api::api::middleware::auth::CurrentUser;
use recipe_api::domain::entities::User;
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool, user: User) -> TestServer {
    let (state, _media) = common::create_test_state(pool);

    let app = Router::new()
        .route(
            "/recipe/ingredients",
            get(ingredient_list_handler).post(create_ingredient_handler),
        )
        .layer(Extension(CurrentUser(user)))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_login_required(pool: PgPool) {
    let (state, _media) = common::create_test_state(pool);

    let app = Router::new()
        .route("/recipe/ingredients", get(ingredient_list_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .get("/recipe/ingredients")
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_retrieve_ingredients_ordered_by_name_descending(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@testuser.bla").await;
    common::create_test_ingredient(&pool, user.id, "Pepper").await;
    common::create_test_ingredient(&pool, user.id, "Salt").await;

    let server = make_server(pool, user);
    let response = server.get("/recipe/ingredients").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Salt", "Pepper"]);
}

#[sqlx::test]
async fn test_ingredients_limited_to_user(pool: PgPool) {
    let other = common::create_test_user(&pool, "other@testuser.bla").await;
    common::create_test_ingredient(&pool, other.id, "Cucumber").await;

    let user = common::create_test_user(&pool, "test@testuser.bla").await;
    common::create_test_ingredient(&pool, user.id, "Swordfish").await;

    let server = make_server(pool, user);
    let response = server.get("/recipe/ingredients").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Swordfish");
}

#[sqlx::test]
async fn test_create_ingredient_successful(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@testuser.bla").await;
    let user_id = user.id;

    let server = make_server(pool.clone(), user);
    let response = server
        .post("/recipe/ingredients")
        .json(&json!({ "name": "Swordfish" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM ingredients WHERE user_id = $1 AND name = $2",
    )
    .bind(user_id)
    .bind("Swordfish")
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_create_ingredient_invalid_name(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@testuser.bla").await;

    let server = make_server(pool, user);
    let response = server
        .post("/recipe/ingredients")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_retrieve_ingredients_assigned_only(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@testuser.bla").await;
    let assigned = common::create_test_ingredient(&pool, user.id, "Oats").await;
    common::create_test_ingredient(&pool, user.id, "Sugar").await;

    let recipe = common::create_test_recipe(&pool, user.id, "Porridge").await;
    common::attach_ingredient(&pool, recipe, assigned).await;

    let server = make_server(pool, user);

    let response = server
        .get("/recipe/ingredients")
        .add_query_param("assigned_only", 1)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Oats");
}
