//! Request router: the single entry point for proxy events.

use std::sync::Arc;

use tracing::Instrument;

use recipeboard_app::services::RecipeManager;

use crate::error::{DispatchError, error_chain};
use crate::event::{GatewayRequest, GatewayResponse, status};
use crate::factory::HandlerFactory;
use crate::flush::{FlushGuard, LogFlush, StdoutFlush};

/// Routes each request through select → parse → execute and turns the
/// outcome into a response.
///
/// | Outcome                  | Status |
/// |--------------------------|--------|
/// | success                  | 200    |
/// | parse failure            | 400    |
/// | execute failure          | 500    |
/// | unsupported method       | 501    |
pub struct RequestRouter<M, F = StdoutFlush> {
    factory: HandlerFactory<M>,
    flush: F,
}

impl<M: RecipeManager> RequestRouter<M> {
    /// Router that flushes stdout after every request.
    pub fn new(service: Arc<M>) -> Self {
        Self::with_flush(service, StdoutFlush)
    }
}

impl<M, F> RequestRouter<M, F>
where
    M: RecipeManager,
    F: LogFlush,
{
    pub fn with_flush(service: Arc<M>, flush: F) -> Self {
        Self {
            factory: HandlerFactory::new(service),
            flush,
        }
    }

    /// Handle one request.
    ///
    /// Always produces a response. When the request failed, the error that
    /// decided the status code is returned next to it.
    pub async fn handle(
        &self,
        request: GatewayRequest,
    ) -> (GatewayResponse, Option<DispatchError>) {
        let span = tracing::info_span!(
            "request",
            request_id = %request.request_id(),
            method = %request.http_method,
        );

        async {
            let _flush = FlushGuard::new(&self.flush);
            tracing::debug!(
                body = request.body(),
                path_parameters = ?request.path_parameters,
                query_parameters = ?request.query_string_parameters,
                "received request"
            );

            match self.dispatch(&request).await {
                Ok(body) => {
                    tracing::debug!("request processed");
                    (GatewayResponse::with_body(status::OK, body), None)
                }
                Err(err) => {
                    tracing::error!(
                        stage = err.stage(),
                        status = err.status_code(),
                        reason = %error_chain(&err),
                        "request failed"
                    );
                    (GatewayResponse::with_status(err.status_code()), Some(err))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, request: &GatewayRequest) -> Result<Option<String>, DispatchError> {
        let handler = self.factory.select(&request.http_method)?;
        tracing::debug!(handler = handler.name(), "selected handler");
        let parsed = handler.parse(request)?;
        Ok(parsed.execute().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExecuteError, ParseError};
    use crate::testing::{CapturedLogs, CountingFlush, FailingRecipes, InMemoryRecipes, cake, soup};
    use recipeboard_domain::id::RecipeId;
    use recipeboard_domain::recipe::{Recipe, RecipeType};

    const CAKE_BODY: &str = r#"{"type":"baking","title":"Bake a Cake","ingredients":"100g flour","description":"Mix. Bake."}"#;

    fn router_with(
        service: InMemoryRecipes,
    ) -> (
        RequestRouter<InMemoryRecipes, Arc<CountingFlush>>,
        Arc<InMemoryRecipes>,
        Arc<CountingFlush>,
    ) {
        let service = Arc::new(service);
        let flush = Arc::new(CountingFlush::default());
        let router = RequestRouter::with_flush(Arc::clone(&service), Arc::clone(&flush));
        (router, service, flush)
    }

    fn failing_router() -> RequestRouter<FailingRecipes, Arc<CountingFlush>> {
        RequestRouter::with_flush(Arc::new(FailingRecipes), Arc::new(CountingFlush::default()))
    }

    #[tokio::test]
    async fn should_create_recipe_with_generated_id() {
        let (router, service, _) = router_with(InMemoryRecipes::default());
        let request = GatewayRequest::new("POST")
            .with_body(CAKE_BODY)
            .with_request_id("req-1");

        let (response, error) = router.handle(request).await;

        assert!(error.is_none());
        assert_eq!(response.status_code, 200);
        let created: Recipe = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert!(!created.id.unwrap().as_str().is_empty());
        assert_eq!(service.len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_implemented_for_unknown_method() {
        let (router, _, _) = router_with(InMemoryRecipes::default());
        let request = GatewayRequest::new("PATCH")
            .with_body(CAKE_BODY)
            .with_path_parameter("id", "r-1");

        let (response, error) = router.handle(request).await;

        assert_eq!(response, GatewayResponse::with_status(501));
        assert!(matches!(error, Some(DispatchError::UnsupportedMethod(_))));
    }

    #[tokio::test]
    async fn should_return_bad_request_for_unknown_type() {
        let (router, _, _) = router_with(InMemoryRecipes::default());
        let request = GatewayRequest::new("GET").with_query_parameter("recipetype", "xxx");

        let (response, error) = router.handle(request).await;

        assert_eq!(response.status_code, 400);
        assert!(response.body.is_none());
        assert!(matches!(
            error,
            Some(DispatchError::Parse(ParseError::RecipeType(_)))
        ));
    }

    #[tokio::test]
    async fn should_return_bad_request_for_missing_parameters() {
        let (router, _, _) = router_with(InMemoryRecipes::default());
        let requests = [
            GatewayRequest::new("GET"),
            GatewayRequest::new("POST").with_body("xxx"),
            GatewayRequest::new("PUT").with_body("xxx").with_path_parameter("id", "r-1"),
            GatewayRequest::new("PUT").with_body(CAKE_BODY),
            GatewayRequest::new("DELETE"),
        ];

        for request in requests {
            let method = request.http_method.clone();
            let (response, error) = router.handle(request).await;
            assert_eq!(response.status_code, 400, "{method}");
            assert!(matches!(error, Some(DispatchError::Parse(_))), "{method}");
        }
    }

    #[tokio::test]
    async fn should_return_server_error_for_unknown_id() {
        let (router, _, _) = router_with(InMemoryRecipes::default());
        let request = GatewayRequest::new("GET").with_path_parameter("id", "missing");

        let (response, error) = router.handle(request).await;

        assert_eq!(response.status_code, 500);
        assert!(matches!(
            error,
            Some(DispatchError::Execute(ExecuteError::Service(_)))
        ));
    }

    #[tokio::test]
    async fn should_return_server_error_when_service_fails_for_every_method() {
        let router = failing_router();
        let requests = [
            GatewayRequest::new("GET").with_path_parameter("id", "r-1"),
            GatewayRequest::new("GET").with_query_parameter("recipetype", "cooking"),
            GatewayRequest::new("POST").with_body(CAKE_BODY),
            GatewayRequest::new("PUT").with_body(CAKE_BODY).with_path_parameter("id", "r-1"),
            GatewayRequest::new("DELETE").with_path_parameter("id", "r-1"),
        ];

        for request in requests {
            let (response, error) = router.handle(request).await;
            assert_eq!(response.status_code, 500);
            assert!(matches!(error, Some(DispatchError::Execute(_))));
        }
    }

    #[tokio::test]
    async fn should_list_recipes_by_type() {
        let service = InMemoryRecipes::default();
        service.insert(cake("c-1"));
        service.insert(soup("s-1"));
        service.insert(soup("s-2"));
        let (router, _, _) = router_with(service);

        let (response, error) = router
            .handle(GatewayRequest::new("GET").with_query_parameter("recipetype", "Cooking"))
            .await;

        assert!(error.is_none());
        let recipes: Vec<Recipe> = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| r.recipe_type == RecipeType::Cooking));
    }

    #[tokio::test]
    async fn should_update_with_path_id_over_body_id() {
        let service = InMemoryRecipes::default();
        service.insert(cake("r-1"));
        let (router, service, _) = router_with(service);
        let body = r#"{"id":"other","type":"baking","title":"xxx","ingredients":"yyy","description":"zzz"}"#;

        let (response, error) = router
            .handle(
                GatewayRequest::new("PUT")
                    .with_body(body)
                    .with_path_parameter("id", "r-1"),
            )
            .await;

        assert!(error.is_none());
        let echoed: Recipe = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(echoed.id, Some(RecipeId::from("r-1")));
        assert_eq!(service.stored("r-1").unwrap().title, "xxx");
        assert!(service.stored("other").is_none());
    }

    #[tokio::test]
    async fn should_delete_existing_recipe_with_empty_body() {
        let service = InMemoryRecipes::default();
        service.insert(cake("c-1"));
        service.insert(soup("s-1"));
        let (router, _, _) = router_with(service);

        let (response, error) = router
            .handle(GatewayRequest::new("DELETE").with_path_parameter("id", "c-1"))
            .await;
        assert!(error.is_none());
        assert_eq!(response, GatewayResponse::with_status(200));

        let (gone, _) = router
            .handle(GatewayRequest::new("GET").with_path_parameter("id", "c-1"))
            .await;
        assert_eq!(gone.status_code, 500);

        let (kept, _) = router
            .handle(GatewayRequest::new("GET").with_path_parameter("id", "s-1"))
            .await;
        assert_eq!(kept.status_code, 200);
    }

    #[tokio::test]
    async fn should_flush_logs_once_per_request_on_every_path() {
        let service = InMemoryRecipes::default();
        service.insert(cake("c-1"));
        let (router, _, flush) = router_with(service);
        let requests = [
            GatewayRequest::new("GET").with_path_parameter("id", "c-1"),
            GatewayRequest::new("GET"),
            GatewayRequest::new("GET").with_path_parameter("id", "missing"),
            GatewayRequest::new("TRACE"),
        ];
        let expected = requests.len();

        for request in requests {
            router.handle(request).await;
        }

        assert_eq!(flush.count(), expected);
    }

    #[tokio::test]
    async fn should_tag_request_logs_with_request_id() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());
        let service = InMemoryRecipes::default();
        service.insert(cake("c-1"));
        let (router, _, _) = router_with(service);

        router
            .handle(GatewayRequest::new("GET").with_request_id("req-failed"))
            .await;
        router
            .handle(
                GatewayRequest::new("GET")
                    .with_path_parameter("id", "c-1")
                    .with_request_id("req-ok"),
            )
            .await;

        let lines = logs.lines();
        let failed: Vec<&String> = lines
            .iter()
            .filter(|line| line.contains("request failed"))
            .collect();
        assert_eq!(failed.len(), 1, "{lines:#?}");
        assert!(failed[0].contains("request_id=req-failed"), "{lines:#?}");
        assert!(failed[0].contains("method=GET"), "{lines:#?}");

        let processed: Vec<&String> = lines
            .iter()
            .filter(|line| line.contains("request processed"))
            .collect();
        assert_eq!(processed.len(), 1, "{lines:#?}");
        assert!(processed[0].contains("request_id=req-ok"), "{lines:#?}");

        assert!(
            lines.iter().all(|line| line.contains("request_id=req-")),
            "{lines:#?}"
        );
    }
}
