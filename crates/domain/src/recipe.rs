//! Recipe: the resource managed by recipeboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeBoardError, ValidationError};
use crate::id::RecipeId;
use crate::time::Timestamp;

/// The kind of a recipe.
///
/// On the wire a type is lowercase text (`"cooking"`, `"baking"`). Parsing is
/// case-insensitive and rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum RecipeType {
    Cooking,
    Baking,
}

impl RecipeType {
    /// Return the canonical wire form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cooking => "cooking",
            Self::Baking => "baking",
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("cooking") {
            Ok(Self::Cooking)
        } else if s.eq_ignore_ascii_case("baking") {
            Ok(Self::Baking)
        } else {
            Err(ValidationError::UnknownRecipeType(s.to_string()))
        }
    }
}

impl From<RecipeType> for &'static str {
    fn from(value: RecipeType) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for RecipeType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single recipe.
///
/// `id` and `created_at` are owned by the domain service: they are absent on
/// records that have not been created yet and are never invented by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Recipe {
    /// Create a builder for constructing a [`Recipe`].
    #[must_use]
    pub fn builder(recipe_type: RecipeType) -> RecipeBuilder {
        RecipeBuilder::new(recipe_type)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoardError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), RecipeBoardError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Recipe`].
#[derive(Debug)]
pub struct RecipeBuilder {
    id: Option<RecipeId>,
    recipe_type: RecipeType,
    title: String,
    ingredients: String,
    description: String,
    created_at: Option<Timestamp>,
}

impl RecipeBuilder {
    fn new(recipe_type: RecipeType) -> Self {
        Self {
            id: None,
            recipe_type,
            title: String::new(),
            ingredients: String::new(),
            description: String::new(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<RecipeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Recipe`].
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoardError::Validation`] if `title` is missing or blank.
    pub fn build(self) -> Result<Recipe, RecipeBoardError> {
        let recipe = Recipe {
            id: self.id,
            recipe_type: self.recipe_type,
            title: self.title,
            ingredients: self.ingredients,
            description: self.description,
            created_at: self.created_at,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}
