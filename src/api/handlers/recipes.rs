//! Handlers for recipe endpoints (list, detail, create, update, delete,
//! image upload).

use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::recipe::{
    PatchRecipeRequest, RecipeDetailResponse, RecipeFilterQuery, RecipeImageResponse,
    RecipeRequest, RecipeResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::{NewRecipe, RecipePatch};
use crate::domain::repositories::RecipeFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Multipart field name carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// Lists the authenticated user's recipes, id-descending.
///
/// # Endpoint
///
/// `GET /recipe/recipes`
///
/// # Query Parameters
///
/// - `tags` (optional): comma-separated tag ID list, e.g. `tags=1,3`
/// - `ingredients` (optional): comma-separated ingredient ID list
///
/// A recipe matches when it carries at least one of the listed tags and at
/// least one of the listed ingredients ("any of" per parameter); results are
/// de-duplicated.
///
/// # Errors
///
/// Returns 400 Bad Request when an ID list does not parse as integers.
pub async fn recipe_list_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<RecipeFilterQuery>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let filter = RecipeFilter {
        tag_ids: query.tags.as_deref().map(parse_id_list).transpose()?,
        ingredient_ids: query
            .ingredients
            .as_deref()
            .map(parse_id_list)
            .transpose()?,
    };

    let recipes = state.recipe_service.list(user.id, &filter).await?;

    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// Returns a single recipe with nested tag/ingredient detail.
///
/// # Endpoint
///
/// `GET /recipe/recipes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for missing recipes and recipes owned by other
/// users — the two cases are indistinguishable.
pub async fn recipe_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<RecipeDetailResponse>, AppError> {
    let details = state.recipe_service.get_details(user.id, id).await?;

    Ok(Json(details.into()))
}

/// Creates a recipe for the authenticated user.
///
/// # Endpoint
///
/// `POST /recipe/recipes`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Jambalaya",
///   "time_minutes": 35,
///   "price": "10.40",
///   "link": "https://example.com/jambalaya",
///   "tags": [1, 2],
///   "ingredients": [3]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or a referenced tag or
/// ingredient does not belong to the requesting user.
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    payload.validate()?;

    let new_recipe = NewRecipe {
        user_id: user.id,
        title: payload.title,
        time_minutes: payload.time_minutes,
        price: payload.price,
        link: payload.link,
        tag_ids: payload.tags,
        ingredient_ids: payload.ingredients,
    };

    let recipe = state.recipe_service.create(new_recipe).await?;

    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// Fully replaces a recipe.
///
/// # Endpoint
///
/// `PUT /recipe/recipes/{id}`
///
/// An absent `link` clears the stored link; absent `tags`/`ingredients`
/// clear the association sets.
///
/// # Errors
///
/// Returns 404 Not Found if the recipe doesn't exist for this user.
/// Returns 400 Bad Request if validation fails.
pub async fn update_recipe_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    payload.validate()?;

    let patch = RecipePatch {
        title: Some(payload.title),
        time_minutes: Some(payload.time_minutes),
        price: Some(payload.price),
        link: Some(payload.link),
        tag_ids: Some(payload.tags),
        ingredient_ids: Some(payload.ingredients),
    };

    let recipe = state.recipe_service.update(user.id, id, patch).await?;

    Ok(Json(recipe.into()))
}

/// Partially updates a recipe.
///
/// # Endpoint
///
/// `PATCH /recipe/recipes/{id}`
///
/// All fields are optional. Only provided fields are changed; `link: null`
/// clears the link, and provided `tags`/`ingredients` replace the full
/// association set.
///
/// # Errors
///
/// Returns 404 Not Found if the recipe doesn't exist for this user.
/// Returns 400 Bad Request if validation fails.
pub async fn patch_recipe_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<PatchRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    payload.validate()?;

    let patch = RecipePatch {
        title: payload.title,
        time_minutes: payload.time_minutes,
        price: payload.price,
        link: payload.link,
        tag_ids: payload.tags,
        ingredient_ids: payload.ingredients,
    };

    let recipe = state.recipe_service.update(user.id, id, patch).await?;

    Ok(Json(recipe.into()))
}

/// Deletes a recipe.
///
/// # Endpoint
///
/// `DELETE /recipe/recipes/{id}`
///
/// Join rows cascade; a stored image file is removed best-effort.
///
/// # Errors
///
/// Returns 404 Not Found if the recipe doesn't exist for this user.
pub async fn delete_recipe_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.recipe_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Uploads an image for a recipe.
///
/// # Endpoint
///
/// `POST /recipe/recipes/{id}/upload-image`
///
/// Expects a multipart form with an `image` field. The payload must decode
/// as a real image; it is stored under a freshly generated UUID file name
/// with the original file extension and served below `/media/`.
///
/// # Errors
///
/// Returns 404 Not Found if the recipe doesn't exist for this user.
/// Returns 400 Bad Request if the field is missing or not a valid image.
pub async fn upload_recipe_image_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Json<RecipeImageResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Malformed multipart payload", json!({ "reason": e.to_string() }))
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            AppError::bad_request("Failed to read upload", json!({ "reason": e.to_string() }))
        })?;

        let recipe = state
            .recipe_service
            .attach_image(user.id, id, &bytes, filename.as_deref())
            .await?;

        return Ok(Json(RecipeImageResponse {
            id: recipe.id,
            image: recipe.image,
        }));
    }

    Err(AppError::bad_request(
        "Missing multipart field",
        json!({ "field": IMAGE_FIELD }),
    ))
}

/// Parses a comma-separated integer ID list, e.g. `"1,3,12"`.
///
/// No defense beyond integer parsing: whatever `i64::from_str` rejects comes
/// back as a 400 with the parse error attached.
fn parse_id_list(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|e| {
                AppError::bad_request(
                    "Invalid ID list",
                    json!({ "value": part.trim(), "reason": e.to_string() }),
                )
            })
        })
        .collect()
}
