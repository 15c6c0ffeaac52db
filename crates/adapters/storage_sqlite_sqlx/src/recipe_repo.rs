//! `SQLite` implementation of [`RecipeRepository`].

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use recipeboard_app::ports::RecipeRepository;
use recipeboard_domain::error::{NotFoundError, RecipeBoardError};
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::{Recipe, RecipeType};
use recipeboard_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Recipe`].
struct Wrapper(Recipe);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Recipe> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let recipe_type: String = row.try_get("recipe_type")?;
        let created_at: Option<String> = row.try_get("created_at")?;

        let recipe_type = recipe_type
            .parse::<RecipeType>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = created_at
            .map(|s| DateTime::parse_from_rfc3339(&s).map(|ts| ts.with_timezone(&Utc)))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Recipe {
            id: Some(RecipeId::from(id)),
            recipe_type,
            title: row.try_get("title")?,
            ingredients: row.try_get("ingredients")?,
            description: row.try_get("description")?,
            created_at,
        }))
    }
}

/// Fixed-width text so that stored timestamps sort chronologically.
fn format_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

const INSERT: &str = "INSERT INTO recipes (id, recipe_type, title, ingredients, description, created_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM recipes WHERE id = ?";
const SELECT_BY_TYPE: &str =
    "SELECT * FROM recipes WHERE recipe_type = ? ORDER BY created_at ASC, id ASC";
const UPDATE: &str = "UPDATE recipes SET recipe_type = ?, title = ?, ingredients = ?, description = ?, created_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM recipes WHERE id = ?";

/// `SQLite`-backed recipe repository.
pub struct SqliteRecipeRepository {
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecipeRepository for SqliteRecipeRepository {
    fn create(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = recipe.id.as_ref().ok_or(StorageError::MissingId)?;
            sqlx::query(INSERT)
                .bind(id.as_str())
                .bind(recipe.recipe_type.as_str())
                .bind(&recipe.title)
                .bind(&recipe.ingredients)
                .bind(&recipe.description)
                .bind(recipe.created_at.map(format_timestamp))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(recipe)
        }
    }

    fn get_by_id(
        &self,
        id: &RecipeId,
    ) -> impl Future<Output = Result<Option<Recipe>, RecipeBoardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_by_type(
        &self,
        recipe_type: RecipeType,
    ) -> impl Future<Output = Result<Vec<Recipe>, RecipeBoardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_TYPE)
                .bind(recipe_type.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, RecipeBoardError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = recipe.id.as_ref().ok_or(StorageError::MissingId)?;
            let result = sqlx::query(UPDATE)
                .bind(recipe.recipe_type.as_str())
                .bind(&recipe.title)
                .bind(&recipe.ingredients)
                .bind(&recipe.description)
                .bind(recipe.created_at.map(format_timestamp))
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            // the row may have been deleted since the caller last read it
            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Recipe",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(recipe)
        }
    }

    fn delete(&self, id: &RecipeId) -> impl Future<Output = Result<(), RecipeBoardError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
