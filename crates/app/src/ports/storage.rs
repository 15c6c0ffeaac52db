//! Storage port: repository trait for recipe persistence.

use std::future::Future;

use recipeboard_domain::error::RecipeBoardError;
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::{Recipe, RecipeType};

/// Repository for persisting and querying [`Recipe`]s.
///
/// Records handed to the repository always carry an id.
pub trait RecipeRepository {
    /// Store a new recipe.
    fn create(&self, recipe: Recipe)
    -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send;

    /// Get a recipe by its identifier.
    fn get_by_id(
        &self,
        id: &RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, RecipeBoardError>> + Send;

    /// Get all recipes of the given type, oldest first.
    fn list_by_type(
        &self,
        recipe_type: RecipeType,
    ) -> impl Future<Output = Result<Vec<Recipe>, RecipeBoardError>> + Send;

    /// Replace a stored recipe.
    fn update(&self, recipe: Recipe)
    -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send;

    /// Delete a recipe by its identifier. Deleting a missing recipe is a no-op.
    fn delete(&self, id: &RecipeId) -> impl Future<Output = Result<(), RecipeBoardError>> + Send;
}

impl<T: RecipeRepository + Send + Sync> RecipeRepository for std::sync::Arc<T> {
    fn create(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        (**self).create(recipe)
    }

    fn get_by_id(
        &self,
        id: &RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, RecipeBoardError>> + Send {
        (**self).get_by_id(id)
    }

    fn list_by_type(
        &self,
        recipe_type: RecipeType,
    ) -> impl Future<Output = Result<Vec<Recipe>, RecipeBoardError>> + Send {
        (**self).list_by_type(recipe_type)
    }

    fn update(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        (**self).update(recipe)
    }

    fn delete(&self, id: &RecipeId) -> impl Future<Output = Result<(), RecipeBoardError>> + Send {
        (**self).delete(id)
    }
}
