//! # recipe-manager
//!
//! Composition root that wires the adapters together and runs the Lambda
//! event loop.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and recipe service
//! - Build the request router around the shared service
//! - Hand API Gateway proxy events to the router until the runtime stops
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing_subscriber::EnvFilter;

use recipeboard_adapter_gateway::event::{GatewayRequest, GatewayResponse};
use recipeboard_adapter_gateway::router::RequestRouter;
use recipeboard_adapter_storage_sqlite_sqlx::SqliteRecipeRepository;
use recipeboard_app::services::{RecipeManager, RecipeService};

use crate::config::{Config, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?} ({err}), using \"info\"", logging.filter);
        EnvFilter::new("info")
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Text => builder.init(),
    }
}

/// Route one invocation.
///
/// The proxy response is always returned to the runtime so that API Gateway
/// forwards the status code. Dispatch failures are already logged by the
/// router.
async fn handle_event<M: RecipeManager>(
    router: &RequestRouter<M>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    let (payload, context) = event.into_parts();
    let mut request = payload;
    if request.request_id().is_empty() {
        request.request_context.request_id = context.request_id;
    }

    let (response, _error) = router.handle(request).await;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config.logging);
    if config.database.is_instance_local() {
        tracing::warn!(
            url = %config.database.url,
            "using the instance-local default database, set RECIPEBOARD_DATABASE_URL to shared storage"
        );
    }

    let db = recipeboard_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;

    let repo = SqliteRecipeRepository::new(db.pool().clone());
    let service = RecipeService::new(repo);
    let router = RequestRouter::new(Arc::new(service));
    tracing::info!("recipe manager ready");

    let router = &router;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<GatewayRequest>| async move {
        handle_event(router, event).await
    }))
    .await
}
