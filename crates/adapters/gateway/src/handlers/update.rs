//! `PUT`: replace a recipe with the request body.

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::Recipe;

use super::required_id;
use crate::codec;
use crate::error::{ExecuteError, ParseError};
use crate::event::GatewayRequest;

/// Replacement record plus the id taken from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: RecipeId,
    pub recipe: Recipe,
}

pub struct UpdateHandler<'a, M> {
    service: &'a M,
}

impl<'a, M: RecipeManager> UpdateHandler<'a, M> {
    pub(crate) fn new(service: &'a M) -> Self {
        Self { service }
    }

    /// Decode the body and require the `id` path parameter.
    ///
    /// # Errors
    ///
    /// Fails when the body is malformed, or when the id is missing even
    /// though the body decoded.
    pub fn parse(&self, request: &GatewayRequest) -> Result<UpdateRequest, ParseError> {
        let recipe = codec::decode_one(request.body()).map_err(ParseError::Body)?;
        let id = required_id(request)?;
        Ok(UpdateRequest { id, recipe })
    }

    /// Store the replacement under the path id and echo it back.
    ///
    /// The response is the record as sent by the caller with the path id
    /// applied; it is not read back from storage.
    ///
    /// # Errors
    ///
    /// Any service failure.
    pub async fn execute(&self, request: UpdateRequest) -> Result<Option<String>, ExecuteError> {
        let UpdateRequest { id, mut recipe } = request;
        recipe.id = Some(id);
        self.service.update(recipe.clone()).await?;
        Ok(Some(codec::encode_one(&recipe)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingRecipes, InMemoryRecipes, cake};

    const BODY: &str = r#"{"id":"from-body","type":"baking","title":"Bake a Pie","ingredients":"200g flour","description":"Roll. Bake."}"#;

    #[test]
    fn should_parse_body_and_path_id() {
        let service = InMemoryRecipes::default();
        let handler = UpdateHandler::new(&service);
        let request = GatewayRequest::new("PUT")
            .with_body(BODY)
            .with_path_parameter("id", "r-1");

        let parsed = handler.parse(&request).unwrap();
        assert_eq!(parsed.id, RecipeId::from("r-1"));
        assert_eq!(parsed.recipe.title, "Bake a Pie");
    }

    #[test]
    fn should_reject_missing_id_even_with_valid_body() {
        let service = InMemoryRecipes::default();
        let handler = UpdateHandler::new(&service);
        let request = GatewayRequest::new("PUT").with_body(BODY);

        assert!(matches!(
            handler.parse(&request),
            Err(ParseError::MissingId)
        ));
    }

    #[test]
    fn should_reject_malformed_body() {
        let service = InMemoryRecipes::default();
        let handler = UpdateHandler::new(&service);
        let request = GatewayRequest::new("PUT")
            .with_body("{\"type\":")
            .with_path_parameter("id", "r-1");

        assert!(matches!(handler.parse(&request), Err(ParseError::Body(_))));
    }

    #[tokio::test]
    async fn should_store_under_path_id_not_body_id() {
        let service = InMemoryRecipes::default();
        service.insert(cake("r-1"));
        let handler = UpdateHandler::new(&service);
        let request = GatewayRequest::new("PUT")
            .with_body(BODY)
            .with_path_parameter("id", "r-1");

        let parsed = handler.parse(&request).unwrap();
        let body = handler.execute(parsed).await.unwrap().unwrap();
        let echoed: Recipe = serde_json::from_str(&body).unwrap();

        assert_eq!(echoed.id, Some(RecipeId::from("r-1")));
        assert_eq!(echoed.title, "Bake a Pie");
        assert_eq!(service.stored("r-1").unwrap().title, "Bake a Pie");
        assert!(service.stored("from-body").is_none());
    }

    #[tokio::test]
    async fn should_fail_execute_when_service_fails() {
        let handler = UpdateHandler::new(&FailingRecipes);
        let request = UpdateRequest {
            id: RecipeId::from("r-1"),
            recipe: cake("r-1"),
        };

        assert!(matches!(
            handler.execute(request).await,
            Err(ExecuteError::Service(_))
        ));
    }
}
