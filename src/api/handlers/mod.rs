//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod tags;
pub mod users;

pub use health::health_handler;
pub use ingredients::{create_ingredient_handler, ingredient_list_handler};
pub use recipes::{
    create_recipe_handler, delete_recipe_handler, patch_recipe_handler, recipe_detail_handler,
    recipe_list_handler, update_recipe_handler, upload_recipe_image_handler,
};
pub use tags::{create_tag_handler, tag_list_handler};
pub use users::{
    create_token_handler, create_user_handler, me_handler, patch_profile_handler,
    update_profile_handler,
};
