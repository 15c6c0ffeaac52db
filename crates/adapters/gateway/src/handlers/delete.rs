//! `DELETE`: remove a recipe by path id.

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::id::RecipeId;

use super::required_id;
use crate::error::{ExecuteError, ParseError};
use crate::event::GatewayRequest;

pub struct DeleteHandler<'a, M> {
    service: &'a M,
}

impl<'a, M: RecipeManager> DeleteHandler<'a, M> {
    pub(crate) fn new(service: &'a M) -> Self {
        Self { service }
    }

    /// # Errors
    ///
    /// Fails when the `id` path parameter is missing.
    pub fn parse(&self, request: &GatewayRequest) -> Result<RecipeId, ParseError> {
        required_id(request)
    }

    /// Delete the recipe. There is no response body.
    ///
    /// # Errors
    ///
    /// Any service failure.
    pub async fn execute(&self, id: RecipeId) -> Result<Option<String>, ExecuteError> {
        self.service.delete(&id).await?;
        Ok(None)
    }
}
