//! Tag listing and creation.

use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// Service for user-scoped tag operations.
pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    /// Creates a new tag service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the user's tags, name-descending.
    ///
    /// With `assigned_only`, only tags attached to at least one recipe are
    /// returned.
    pub async fn list(&self, user_id: i64, assigned_only: bool) -> Result<Vec<Tag>, AppError> {
        self.repository.list_for_user(user_id, assigned_only).await
    }

    /// Creates a tag owned by the user.
    pub async fn create(&self, user_id: i64, name: String) -> Result<Tag, AppError> {
        self.repository.create(NewTag { user_id, name }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTagRepository;

    #[tokio::test]
    async fn test_create_scopes_to_user() {
        let mut repo = MockTagRepository::new();

        repo.expect_create()
            .withf(|new_tag| new_tag.user_id == 7 && new_tag.name == "Vegan")
            .times(1)
            .returning(|new_tag| {
                Ok(Tag {
                    id: 1,
                    user_id: new_tag.user_id,
                    name: new_tag.name,
                })
            });

        let service = TagService::new(Arc::new(repo));

        let tag = service.create(7, "Vegan".to_string()).await.unwrap();

        assert_eq!(tag.name, "Vegan");
        assert_eq!(tag.user_id, 7);
    }

    #[tokio::test]
    async fn test_list_passes_assigned_only() {
        let mut repo = MockTagRepository::new();

        repo.expect_list_for_user()
            .withf(|user_id, assigned_only| *user_id == 7 && *assigned_only)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = TagService::new(Arc::new(repo));

        let tags = service.list(7, true).await.unwrap();
        assert!(tags.is_empty());
    }
}
