mod common;

use recipe_api::domain::entities::NewIngredient;
use recipe_api::domain::repositories::IngredientRepository;
use recipe_api::infrastructure::persistence::PgIngredientRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_ingredient(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@abc.bla").await;
    let repo = PgIngredientRepository::new(Arc::new(pool));

    let ingredient = repo
        .create(NewIngredient {
            user_id: user.id,
            name: "Cucumber".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(ingredient.name, "Cucumber");
    assert_eq!(ingredient.user_id, user.id);
}

#[sqlx::test]
async fn test_list_orders_name_descending_and_scopes(pool: PgPool) {
    let other = common::create_test_user(&pool, "other@abc.bla").await;
    common::create_test_ingredient(&pool, other.id, "Foreign").await;

    let user = common::create_test_user(&pool, "test@abc.bla").await;
    common::create_test_ingredient(&pool, user.id, "Pepper").await;
    common::create_test_ingredient(&pool, user.id, "Salt").await;

    let repo = PgIngredientRepository::new(Arc::new(pool));

    let ingredients = repo.list_for_user(user.id, false).await.unwrap();
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, vec!["Salt", "Pepper"]);
}

#[sqlx::test]
async fn test_list_assigned_only_deduplicates(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@abc.bla").await;
    let oats = common::create_test_ingredient(&pool, user.id, "Oats").await;

    let first = common::create_test_recipe(&pool, user.id, "Porridge").await;
    let second = common::create_test_recipe(&pool, user.id, "Granola").await;
    common::attach_ingredient(&pool, first, oats).await;
    common::attach_ingredient(&pool, second, oats).await;

    let repo = PgIngredientRepository::new(Arc::new(pool));

    let ingredients = repo.list_for_user(user.id, true).await.unwrap();

    assert_eq!(ingredients.len(), 1);
}

#[sqlx::test]
async fn test_filter_owned_ids(pool: PgPool) {
    let user = common::create_test_user(&pool, "test@abc.bla").await;
    let mine = common::create_test_ingredient(&pool, user.id, "Mine").await;

    let repo = PgIngredientRepository::new(Arc::new(pool));

    let owned = repo.filter_owned_ids(user.id, &[mine, 4711]).await.unwrap();

    assert_eq!(owned, vec![mine]);
}
