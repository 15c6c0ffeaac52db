//! Handler selection by HTTP method.

use std::sync::Arc;

use recipeboard_app::services::RecipeManager;

use crate::error::DispatchError;
use crate::handlers::{CreateHandler, DeleteHandler, ReadHandler, RecipeHandler, UpdateHandler};

/// Hands out verb handlers bound to one shared recipe service.
///
/// The service is built once by the composition root, before the first
/// request arrives, and shared by every handler for the life of the process.
pub struct HandlerFactory<M> {
    service: Arc<M>,
}

impl<M> Clone for HandlerFactory<M> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<M: RecipeManager> HandlerFactory<M> {
    pub fn new(service: Arc<M>) -> Self {
        Self { service }
    }

    /// Borrow the shared recipe service.
    #[must_use]
    pub fn service(&self) -> &M {
        &self.service
    }

    /// Pick the handler for `method`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedMethod`] for anything other than
    /// `GET`, `POST`, `PUT` and `DELETE`.
    pub fn select(&self, method: &str) -> Result<RecipeHandler<'_, M>, DispatchError> {
        let service = self.service();
        match method {
            "GET" => Ok(RecipeHandler::Read(ReadHandler::new(service))),
            "POST" => Ok(RecipeHandler::Create(CreateHandler::new(service))),
            "PUT" => Ok(RecipeHandler::Update(UpdateHandler::new(service))),
            "DELETE" => Ok(RecipeHandler::Delete(DeleteHandler::new(service))),
            other => Err(DispatchError::UnsupportedMethod(other.to_string())),
        }
    }
}
