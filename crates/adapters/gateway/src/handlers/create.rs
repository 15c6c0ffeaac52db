//! `POST`: create a recipe from the request body.

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::recipe::Recipe;

use crate::codec;
use crate::error::{ExecuteError, ParseError};
use crate::event::GatewayRequest;

pub struct CreateHandler<'a, M> {
    service: &'a M,
}

impl<'a, M: RecipeManager> CreateHandler<'a, M> {
    pub(crate) fn new(service: &'a M) -> Self {
        Self { service }
    }

    /// # Errors
    ///
    /// Fails when the body is not a recipe object.
    pub fn parse(&self, request: &GatewayRequest) -> Result<Recipe, ParseError> {
        codec::decode_one(request.body()).map_err(ParseError::Body)
    }

    /// Create the recipe and return the stored record, server id included.
    ///
    /// # Errors
    ///
    /// Any service failure.
    pub async fn execute(&self, recipe: Recipe) -> Result<Option<String>, ExecuteError> {
        let created = self.service.create(recipe).await?;
        Ok(Some(codec::encode_one(&created)?))
    }
}
