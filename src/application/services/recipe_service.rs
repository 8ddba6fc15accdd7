//! Recipe CRUD, filtering, and image attachment.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::entities::{NewRecipe, Recipe, RecipeDetails, RecipePatch};
use crate::domain::repositories::{
    IngredientRepository, RecipeFilter, RecipeRepository, TagRepository,
};
use crate::error::AppError;
use crate::infrastructure::storage::MediaStorage;
use crate::utils::image_path::recipe_image_path;
use serde_json::json;

/// Upper bound for recipe prices, matching the NUMERIC(5, 2) column.
const MAX_PRICE: Decimal = Decimal::from_parts(99999, 0, 0, false, 2);

/// Service for recipe management.
///
/// Validates prices and association ownership before anything is written:
/// referencing another user's tags or ingredients fails the same way as
/// referencing IDs that do not exist at all.
pub struct RecipeService<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    recipe_repository: Arc<R>,
    tag_repository: Arc<T>,
    ingredient_repository: Arc<I>,
    storage: Arc<dyn MediaStorage>,
}

impl<R, T, I> RecipeService<R, T, I>
where
    R: RecipeRepository,
    T: TagRepository,
    I: IngredientRepository,
{
    /// Creates a new recipe service.
    pub fn new(
        recipe_repository: Arc<R>,
        tag_repository: Arc<T>,
        ingredient_repository: Arc<I>,
        storage: Arc<dyn MediaStorage>,
    ) -> Self {
        Self {
            recipe_repository,
            tag_repository,
            ingredient_repository,
            storage,
        }
    }

    /// Lists the user's recipes, honoring the tag/ingredient filter.
    pub async fn list(
        &self,
        user_id: i64,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, AppError> {
        self.recipe_repository.list(user_id, filter).await
    }

    /// Loads a single recipe with nested tag/ingredient detail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the recipe does not exist or
    /// belongs to another user.
    pub async fn get_details(&self, user_id: i64, id: i64) -> Result<RecipeDetails, AppError> {
        let recipe = self.find_owned(user_id, id).await?;

        let tags = self.recipe_repository.get_tags(recipe.id).await?;
        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;

        Ok(RecipeDetails {
            recipe,
            tags,
            ingredients,
        })
    }

    /// Creates a recipe for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the price is out of range or any
    /// referenced tag/ingredient ID does not belong to the user.
    pub async fn create(&self, mut new_recipe: NewRecipe) -> Result<Recipe, AppError> {
        validate_price(&new_recipe.price)?;

        new_recipe.tag_ids = normalize_ids(new_recipe.tag_ids);
        new_recipe.ingredient_ids = normalize_ids(new_recipe.ingredient_ids);

        self.ensure_owned_tags(new_recipe.user_id, &new_recipe.tag_ids)
            .await?;
        self.ensure_owned_ingredients(new_recipe.user_id, &new_recipe.ingredient_ids)
            .await?;

        let recipe = self.recipe_repository.create(new_recipe).await?;

        tracing::info!(recipe_id = recipe.id, user_id = recipe.user_id, "Created recipe");

        Ok(recipe)
    }

    /// Applies a full or partial update to a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the recipe does not exist or
    /// belongs to another user, [`AppError::Validation`] for bad prices or
    /// foreign association IDs.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        mut patch: RecipePatch,
    ) -> Result<Recipe, AppError> {
        if let Some(price) = &patch.price {
            validate_price(price)?;
        }

        if let Some(tag_ids) = patch.tag_ids.take() {
            let tag_ids = normalize_ids(tag_ids);
            self.ensure_owned_tags(user_id, &tag_ids).await?;
            patch.tag_ids = Some(tag_ids);
        }

        if let Some(ingredient_ids) = patch.ingredient_ids.take() {
            let ingredient_ids = normalize_ids(ingredient_ids);
            self.ensure_owned_ingredients(user_id, &ingredient_ids).await?;
            patch.ingredient_ids = Some(ingredient_ids);
        }

        self.recipe_repository
            .update(user_id, id, patch)
            .await?
            .ok_or_else(|| recipe_not_found(id))
    }

    /// Deletes a recipe; associated join rows cascade.
    ///
    /// The stored image file, if any, is removed best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the recipe does not exist or
    /// belongs to another user.
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        let recipe = self.find_owned(user_id, id).await?;

        if !self.recipe_repository.delete(user_id, id).await? {
            return Err(recipe_not_found(id));
        }

        if let Some(image) = &recipe.image {
            if let Err(e) = self.storage.remove(image).await {
                tracing::warn!(error = %e, image, "Failed to remove image after delete");
            }
        }

        Ok(())
    }

    /// Validates and stores an uploaded image for a recipe.
    ///
    /// The payload must decode as a real image. It is stored under
    /// `uploads/recipe/<uuid>.<ext>` relative to the media root; a previously
    /// stored image is removed best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the recipe does not exist or
    /// belongs to another user, [`AppError::Validation`] when the payload is
    /// not a decodable image.
    pub async fn attach_image(
        &self,
        user_id: i64,
        id: i64,
        bytes: &[u8],
        original_filename: Option<&str>,
    ) -> Result<Recipe, AppError> {
        let mut recipe = self.find_owned(user_id, id).await?;

        let format = image::guess_format(bytes).map_err(|_| not_an_image())?;
        image::load_from_memory(bytes).map_err(|_| not_an_image())?;

        let fallback_ext = format.extensions_str().first().copied().unwrap_or("bin");
        let path = recipe_image_path(original_filename, fallback_ext);

        self.storage.store(&path, bytes).await.map_err(|e| {
            AppError::internal("Failed to store image", json!({ "reason": e.to_string() }))
        })?;

        if !self.recipe_repository.set_image(user_id, id, &path).await? {
            return Err(recipe_not_found(id));
        }

        if let Some(previous) = recipe.image.replace(path) {
            if let Err(e) = self.storage.remove(&previous).await {
                tracing::warn!(error = %e, previous, "Failed to remove replaced image");
            }
        }

        Ok(recipe)
    }

    async fn find_owned(&self, user_id: i64, id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| recipe_not_found(id))
    }

    async fn ensure_owned_tags(&self, user_id: i64, ids: &[i64]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let owned = self.tag_repository.filter_owned_ids(user_id, ids).await?;
        ensure_all_owned(ids, &owned, "tags")
    }

    async fn ensure_owned_ingredients(&self, user_id: i64, ids: &[i64]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let owned = self
            .ingredient_repository
            .filter_owned_ids(user_id, ids)
            .await?;
        ensure_all_owned(ids, &owned, "ingredients")
    }
}

/// Sorts and de-duplicates association IDs so join-table inserts stay unique.
fn normalize_ids(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn ensure_all_owned(requested: &[i64], owned: &[i64], field: &str) -> Result<(), AppError> {
    if requested.len() == owned.len() {
        return Ok(());
    }

    let unknown: Vec<i64> = requested
        .iter()
        .filter(|id| !owned.contains(id))
        .copied()
        .collect();

    Err(AppError::bad_request(
        format!("Unknown {} for this user", field),
        json!({ field: unknown }),
    ))
}

fn validate_price(price: &Decimal) -> Result<(), AppError> {
    if price.is_sign_negative() {
        return Err(AppError::bad_request(
            "Price cannot be negative",
            json!({ "price": price.to_string() }),
        ));
    }

    if price.scale() > 2 {
        return Err(AppError::bad_request(
            "Price supports at most two decimal places",
            json!({ "price": price.to_string() }),
        ));
    }

    if *price > MAX_PRICE {
        return Err(AppError::bad_request(
            format!("Price cannot exceed {}", MAX_PRICE),
            json!({ "price": price.to_string() }),
        ));
    }

    Ok(())
}

fn recipe_not_found(id: i64) -> AppError {
    AppError::not_found("Recipe not found", json!({ "id": id }))
}

fn not_an_image() -> AppError {
    AppError::bad_request("Uploaded file is not a valid image", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockIngredientRepository, MockRecipeRepository, MockTagRepository,
    };
    use crate::infrastructure::storage::MockMediaStorage;
    use chrono::Utc;
    use std::str::FromStr;

    fn sample_recipe(id: i64, user_id: i64) -> Recipe {
        Recipe {
            id,
            user_id,
            title: "Jambalaya".to_string(),
            time_minutes: 35,
            price: Decimal::from_str("10.40").unwrap(),
            link: None,
            image: None,
            created_at: Utc::now(),
            tag_ids: vec![],
            ingredient_ids: vec![],
        }
    }

    fn make_service(
        recipe_repo: MockRecipeRepository,
        tag_repo: MockTagRepository,
        ingredient_repo: MockIngredientRepository,
        storage: MockMediaStorage,
    ) -> RecipeService<MockRecipeRepository, MockTagRepository, MockIngredientRepository> {
        RecipeService::new(
            Arc::new(recipe_repo),
            Arc::new(tag_repo),
            Arc::new(ingredient_repo),
            Arc::new(storage),
        )
    }

    fn sample_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([120, 80, 40]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_create_rejects_foreign_tags() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo.expect_create().times(0);

        let mut tag_repo = MockTagRepository::new();
        tag_repo
            .expect_filter_owned_ids()
            .times(1)
            .returning(|_, _| Ok(vec![1]));

        let service = make_service(
            recipe_repo,
            tag_repo,
            MockIngredientRepository::new(),
            MockMediaStorage::new(),
        );

        let new_recipe = NewRecipe {
            user_id: 7,
            title: "Gumbo".to_string(),
            time_minutes: 430,
            price: Decimal::from_str("5.20").unwrap(),
            link: None,
            tag_ids: vec![1, 2],
            ingredient_ids: vec![],
        };

        let err = service.create(new_recipe).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_deduplicates_association_ids() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo
            .expect_create()
            .withf(|new_recipe| new_recipe.tag_ids == vec![1, 2])
            .times(1)
            .returning(|new_recipe| {
                let mut recipe = sample_recipe(10, new_recipe.user_id);
                recipe.tag_ids = new_recipe.tag_ids;
                Ok(recipe)
            });

        let mut tag_repo = MockTagRepository::new();
        tag_repo
            .expect_filter_owned_ids()
            .times(1)
            .returning(|_, ids| Ok(ids.to_vec()));

        let service = make_service(
            recipe_repo,
            tag_repo,
            MockIngredientRepository::new(),
            MockMediaStorage::new(),
        );

        let new_recipe = NewRecipe {
            user_id: 7,
            title: "Gumbo".to_string(),
            time_minutes: 430,
            price: Decimal::from_str("5.20").unwrap(),
            link: None,
            tag_ids: vec![2, 1, 2],
            ingredient_ids: vec![],
        };

        let recipe = service.create(new_recipe).await.unwrap();
        assert_eq!(recipe.tag_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let service = make_service(
            MockRecipeRepository::new(),
            MockTagRepository::new(),
            MockIngredientRepository::new(),
            MockMediaStorage::new(),
        );

        let new_recipe = NewRecipe {
            user_id: 7,
            title: "Free Lunch".to_string(),
            time_minutes: 1,
            price: Decimal::from_str("-1.00").unwrap(),
            link: None,
            tag_ids: vec![],
            ingredient_ids: vec![],
        };

        let err = service.create(new_recipe).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_recipe_is_not_found() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo.expect_update().times(1).returning(|_, _, _| Ok(None));

        let service = make_service(
            recipe_repo,
            MockTagRepository::new(),
            MockIngredientRepository::new(),
            MockMediaStorage::new(),
        );

        let err = service.update(7, 99, RecipePatch::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_attach_image_rejects_non_image() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_, id| Ok(Some(sample_recipe(id, 7))));
        recipe_repo.expect_set_image().times(0);

        let service = make_service(
            recipe_repo,
            MockTagRepository::new(),
            MockIngredientRepository::new(),
            MockMediaStorage::new(),
        );

        let err = service
            .attach_image(7, 1, b"definitely not an image", Some("x.jpg"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_attach_image_stores_and_updates() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_, id| Ok(Some(sample_recipe(id, 7))));
        recipe_repo
            .expect_set_image()
            .withf(|user_id, id, path| {
                *user_id == 7 && *id == 1 && path.starts_with("uploads/recipe/")
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let mut storage = MockMediaStorage::new();
        storage
            .expect_store()
            .withf(|path, _| path.ends_with(".png"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = make_service(
            recipe_repo,
            MockTagRepository::new(),
            MockIngredientRepository::new(),
            storage,
        );

        let recipe = service
            .attach_image(7, 1, &sample_png(), Some("photo.png"))
            .await
            .unwrap();

        assert!(recipe.image.is_some());
    }

    #[tokio::test]
    async fn test_attach_image_removes_previous_file() {
        let mut recipe_repo = MockRecipeRepository::new();
        recipe_repo.expect_find_by_id().times(1).returning(|_, id| {
            let mut recipe = sample_recipe(id, 7);
            recipe.image = Some("uploads/recipe/old.png".to_string());
            Ok(Some(recipe))
        });
        recipe_repo
            .expect_set_image()
            .times(1)
            .returning(|_, _, _| Ok(true));

        let mut storage = MockMediaStorage::new();
        storage.expect_store().times(1).returning(|_, _| Ok(()));
        storage
            .expect_remove()
            .withf(|path| path == "uploads/recipe/old.png")
            .times(1)
            .returning(|_| Ok(()));

        let service = make_service(
            recipe_repo,
            MockTagRepository::new(),
            MockIngredientRepository::new(),
            storage,
        );

        service
            .attach_image(7, 1, &sample_png(), None)
            .await
            .unwrap();
    }

    #[test]
    fn test_validate_price_boundaries() {
        assert!(validate_price(&Decimal::from_str("0").unwrap()).is_ok());
        assert!(validate_price(&Decimal::from_str("999.99").unwrap()).is_ok());
        assert!(validate_price(&Decimal::from_str("10.40").unwrap()).is_ok());

        assert!(validate_price(&Decimal::from_str("-0.01").unwrap()).is_err());
        assert!(validate_price(&Decimal::from_str("1000.00").unwrap()).is_err());
        assert!(validate_price(&Decimal::from_str("1.999").unwrap()).is_err());
    }

    #[test]
    fn test_normalize_ids() {
        assert_eq!(normalize_ids(vec![3, 1, 2, 3, 1]), vec![1, 2, 3]);
        assert!(normalize_ids(vec![]).is_empty());
    }
}
