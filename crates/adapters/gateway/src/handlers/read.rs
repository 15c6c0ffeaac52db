//! `GET`: fetch one recipe by id or list recipes of one type.

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::RecipeType;

use super::{RECIPE_ID_PARAM, RECIPE_TYPE_PARAM};
use crate::codec;
use crate::error::{ExecuteError, ParseError};
use crate::event::GatewayRequest;

/// What a read request asks for. A type takes precedence over an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadRequest {
    ByType(RecipeType),
    ById(RecipeId),
}

pub struct ReadHandler<'a, M> {
    service: &'a M,
}

impl<'a, M: RecipeManager> ReadHandler<'a, M> {
    pub(crate) fn new(service: &'a M) -> Self {
        Self { service }
    }

    /// Read the optional `recipetype` query parameter and `id` path parameter.
    ///
    /// # Errors
    ///
    /// Fails when the type is not a known recipe type (even if an id was
    /// given too), or when neither is present.
    pub fn parse(&self, request: &GatewayRequest) -> Result<ReadRequest, ParseError> {
        let recipe_type = request
            .query_parameter(RECIPE_TYPE_PARAM)
            .map(str::parse::<RecipeType>)
            .transpose()
            .map_err(ParseError::RecipeType)?;

        if let Some(recipe_type) = recipe_type {
            return Ok(ReadRequest::ByType(recipe_type));
        }

        request
            .path_parameter(RECIPE_ID_PARAM)
            .map(|id| ReadRequest::ById(RecipeId::from(id)))
            .ok_or(ParseError::MissingIdOrType)
    }

    /// # Errors
    ///
    /// Any service failure, a missing recipe included.
    pub async fn execute(&self, request: ReadRequest) -> Result<Option<String>, ExecuteError> {
        let body = match request {
            ReadRequest::ByType(recipe_type) => {
                let recipes = self.service.list(recipe_type).await?;
                tracing::debug!(%recipe_type, count = recipes.len(), "listed recipes");
                codec::encode_many(&recipes)?
            }
            ReadRequest::ById(id) => {
                let recipe = self.service.get(&id).await?;
                codec::encode_one(&recipe)?
            }
        };
        Ok(Some(body))
    }
}
