//! Recipe service: use-cases for managing recipes.

use std::future::Future;

use recipeboard_domain::error::{NotFoundError, RecipeBoardError, ValidationError};
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::{Recipe, RecipeType};
use recipeboard_domain::time::now;

use crate::ports::RecipeRepository;

/// Recipe life cycle operations consumed by request adapters.
///
/// Implementations own ids, creation timestamps and persistence. Callers
/// only forward what they received.
pub trait RecipeManager {
    /// Create a new recipe. The returned record carries the assigned id and
    /// creation time.
    fn create(&self, recipe: Recipe)
    -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send;

    /// Fetch a single recipe.
    fn get(&self, id: &RecipeId) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send;

    /// List all recipes of one type.
    fn list(
        &self,
        recipe_type: RecipeType,
    ) -> impl Future<Output = Result<Vec<Recipe>, RecipeBoardError>> + Send;

    /// Replace an existing recipe with `recipe`.
    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<(), RecipeBoardError>> + Send;

    /// Remove a recipe.
    fn delete(&self, id: &RecipeId) -> impl Future<Output = Result<(), RecipeBoardError>> + Send;
}

/// Application service for recipe CRUD backed by a repository.
pub struct RecipeService<R> {
    repo: R,
}

impl<R: RecipeRepository> RecipeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    async fn find(&self, id: &RecipeId) -> Result<Recipe, RecipeBoardError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Recipe",
                id: id.to_string(),
            }
            .into()
        })
    }
}

impl<R> RecipeManager for RecipeService<R>
where
    R: RecipeRepository + Sync,
{
    /// Any id or timestamp on the incoming record is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoardError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    async fn create(&self, mut recipe: Recipe) -> Result<Recipe, RecipeBoardError> {
        recipe.validate()?;
        let id = RecipeId::generate();
        recipe.id = Some(id.clone());
        recipe.created_at = Some(now());

        let created = self.repo.create(recipe).await?;
        tracing::debug!(recipe_id = %id, "recipe created");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns [`RecipeBoardError::NotFound`] when no recipe with `id` exists,
    /// or a storage error from the repository.
    async fn get(&self, id: &RecipeId) -> Result<Recipe, RecipeBoardError> {
        self.find(id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    async fn list(&self, recipe_type: RecipeType) -> Result<Vec<Recipe>, RecipeBoardError> {
        self.repo.list_by_type(recipe_type).await
    }

    /// The stored creation time is kept; everything else is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoardError::Validation`] when the record has no id or
    /// fails invariants, [`RecipeBoardError::NotFound`] when it does not
    /// exist, or a storage error from the repository.
    async fn update(&self, mut recipe: Recipe) -> Result<(), RecipeBoardError> {
        let id = recipe.id.clone().ok_or(ValidationError::MissingId)?;
        recipe.validate()?;
        let existing = self.find(&id).await?;
        recipe.created_at = existing.created_at;

        self.repo.update(recipe).await?;
        tracing::debug!(recipe_id = %id, "recipe updated");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    async fn delete(&self, id: &RecipeId) -> Result<(), RecipeBoardError> {
        self.repo.delete(id).await?;
        tracing::debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }
}
