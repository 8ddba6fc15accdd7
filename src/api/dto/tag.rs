//! DTOs for tag endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tag;

/// Request body for `POST /recipe/tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: String,
}

/// JSON representation of a tag.
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        TagResponse {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// Query parameters shared by the tag and ingredient list endpoints.
///
/// `assigned_only=1` restricts the listing to attributes attached to at
/// least one recipe. Anything that does not parse as an integer is rejected
/// by query extraction.
#[derive(Debug, Deserialize, Default)]
pub struct AttributeFilterQuery {
    pub assigned_only: Option<i64>,
}

impl AttributeFilterQuery {
    /// Returns true when the assigned-only filter is active.
    pub fn is_assigned_only(&self) -> bool {
        self.assigned_only.is_some_and(|v| v != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_only_truthiness() {
        assert!(!AttributeFilterQuery::default().is_assigned_only());
        assert!(
            !AttributeFilterQuery {
                assigned_only: Some(0)
            }
            .is_assigned_only()
        );
        assert!(
            AttributeFilterQuery {
                assigned_only: Some(1)
            }
            .is_assigned_only()
        );
    }
}
