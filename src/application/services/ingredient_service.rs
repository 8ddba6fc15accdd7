//! Ingredient listing and creation.

use std::sync::Arc;

use crate::domain::entities::{Ingredient, NewIngredient};
use crate::domain::repositories::IngredientRepository;
use crate::error::AppError;

/// Service for user-scoped ingredient operations.
pub struct IngredientService<R: IngredientRepository> {
    repository: Arc<R>,
}

impl<R: IngredientRepository> IngredientService<R> {
    /// Creates a new ingredient service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the user's ingredients, name-descending.
    ///
    /// With `assigned_only`, only ingredients attached to at least one recipe
    /// are returned.
    pub async fn list(
        &self,
        user_id: i64,
        assigned_only: bool,
    ) -> Result<Vec<Ingredient>, AppError> {
        self.repository.list_for_user(user_id, assigned_only).await
    }

    /// Creates an ingredient owned by the user.
    pub async fn create(&self, user_id: i64, name: String) -> Result<Ingredient, AppError> {
        self.repository
            .create(NewIngredient { user_id, name })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockIngredientRepository;

    #[tokio::test]
    async fn test_create_scopes_to_user() {
        let mut repo = MockIngredientRepository::new();

        repo.expect_create()
            .withf(|new_ingredient| {
                new_ingredient.user_id == 7 && new_ingredient.name == "Swordfish"
            })
            .times(1)
            .returning(|new_ingredient| {
                Ok(Ingredient {
                    id: 1,
                    user_id: new_ingredient.user_id,
                    name: new_ingredient.name,
                })
            });

        let service = IngredientService::new(Arc::new(repo));

        let ingredient = service.create(7, "Swordfish".to_string()).await.unwrap();

        assert_eq!(ingredient.name, "Swordfish");
    }
}
