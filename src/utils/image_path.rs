//! Storage path construction for uploaded recipe images.

use uuid::Uuid;

/// Directory under the media root where recipe images land.
const RECIPE_UPLOAD_DIR: &str = "uploads/recipe";

/// Longest extension accepted from a client-supplied filename.
const MAX_EXT_LEN: usize = 8;

/// Builds the relative storage path for a recipe image.
///
/// The file name is a freshly generated UUIDv4 so uploads never collide with
/// or overwrite each other. The extension is taken from the uploaded filename
/// when it carries a plausible one, otherwise `fallback_ext` (derived from
/// the detected image format) is used.
///
/// # Examples
///
/// ```
/// use recipe_api::utils::image_path::recipe_image_path;
///
/// let path = recipe_image_path(Some("myimage.jpg"), "png");
/// assert!(path.starts_with("uploads/recipe/"));
/// assert!(path.ends_with(".jpg"));
/// ```
pub fn recipe_image_path(original_name: Option<&str>, fallback_ext: &str) -> String {
    let ext = original_name
        .and_then(extension_of)
        .unwrap_or_else(|| fallback_ext.to_string());

    format!("{}/{}.{}", RECIPE_UPLOAD_DIR, Uuid::new_v4(), ext)
}

/// Extracts a sanitized, lowercased extension from a filename.
///
/// Returns `None` when the filename has no dot, an empty extension, or one
/// containing anything but ASCII alphanumerics.
fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXT_LEN {
        return None;
    }

    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}
