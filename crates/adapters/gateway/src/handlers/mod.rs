//! Verb handlers.
//!
//! A handler is selected per HTTP method, parses the proxy event into a typed
//! request, and then executes that request against the recipe service. The
//! two steps are separate so the router can tell client errors (parse) from
//! server errors (execute).

mod create;
mod delete;
mod read;
mod update;

pub use create::CreateHandler;
pub use delete::DeleteHandler;
pub use read::{ReadHandler, ReadRequest};
pub use update::{UpdateHandler, UpdateRequest};

use recipeboard_app::services::RecipeManager;
use recipeboard_domain::id::RecipeId;
use recipeboard_domain::recipe::Recipe;

use crate::error::{ExecuteError, ParseError};
use crate::event::GatewayRequest;

/// Path parameter holding a recipe id.
pub const RECIPE_ID_PARAM: &str = "id";

/// Query parameter selecting a recipe type to list.
pub const RECIPE_TYPE_PARAM: &str = "recipetype";

/// Handler selected for a request, before parsing.
pub enum RecipeHandler<'a, M> {
    Read(ReadHandler<'a, M>),
    Create(CreateHandler<'a, M>),
    Update(UpdateHandler<'a, M>),
    Delete(DeleteHandler<'a, M>),
}

/// Handler together with the input it parsed, ready to execute.
pub enum ParsedRequest<'a, M> {
    Read(ReadHandler<'a, M>, ReadRequest),
    Create(CreateHandler<'a, M>, Recipe),
    Update(UpdateHandler<'a, M>, UpdateRequest),
    Delete(DeleteHandler<'a, M>, RecipeId),
}

impl<'a, M: RecipeManager> RecipeHandler<'a, M> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Read(_) => "read",
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// Extract everything the handler needs from `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when a required parameter is missing or a
    /// parameter or body is malformed.
    pub fn parse(self, request: &GatewayRequest) -> Result<ParsedRequest<'a, M>, ParseError> {
        Ok(match self {
            Self::Read(handler) => {
                let input = handler.parse(request)?;
                ParsedRequest::Read(handler, input)
            }
            Self::Create(handler) => {
                let input = handler.parse(request)?;
                ParsedRequest::Create(handler, input)
            }
            Self::Update(handler) => {
                let input = handler.parse(request)?;
                ParsedRequest::Update(handler, input)
            }
            Self::Delete(handler) => {
                let input = handler.parse(request)?;
                ParsedRequest::Delete(handler, input)
            }
        })
    }
}

impl<M: RecipeManager> ParsedRequest<'_, M> {
    /// Run the parsed request and return the response body, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] when the recipe service fails or the result
    /// cannot be encoded.
    pub async fn execute(self) -> Result<Option<String>, ExecuteError> {
        match self {
            Self::Read(handler, input) => handler.execute(input).await,
            Self::Create(handler, input) => handler.execute(input).await,
            Self::Update(handler, input) => handler.execute(input).await,
            Self::Delete(handler, input) => handler.execute(input).await,
        }
    }
}

/// Require the recipe id path parameter.
fn required_id(request: &GatewayRequest) -> Result<RecipeId, ParseError> {
    request
        .path_parameter(RECIPE_ID_PARAM)
        .map(RecipeId::from)
        .ok_or(ParseError::MissingId)
}
