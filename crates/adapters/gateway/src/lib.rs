//! # recipeboard-adapter-gateway
//!
//! Driving adapter for API Gateway proxy events.
//!
//! ## Responsibilities
//! - Model the inbound proxy event and the outbound proxy response
//! - Select a verb handler for the request method (`GET`, `POST`, `PUT`, `DELETE`)
//! - Parse path/query parameters and bodies into typed requests
//! - Execute the request against a [`RecipeManager`](recipeboard_app::services::RecipeManager)
//! - Map the outcome into a status code: `200` on success, `400` for parse
//!   failures, `500` for execution failures, `501` for unsupported methods
//!
//! ## Dependency rule
//! Depends on `recipeboard-app` (for the service interface) and
//! `recipeboard-domain` (for recipe types). Knows nothing about the Lambda
//! runtime or storage.

pub mod codec;
pub mod error;
pub mod event;
pub mod factory;
pub mod flush;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod testing;
