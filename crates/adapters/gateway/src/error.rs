//! Dispatch errors and their status code mapping.
//!
//! Errors are classified by the pipeline stage that produced them, never by
//! their content: a recipe that does not exist is reported the same way as a
//! storage outage.

use recipeboard_domain::error::{RecipeBoardError, ValidationError};

use crate::codec::CodecError;
use crate::event::status;

/// A request could not be turned into a typed handler input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing recipe id")]
    MissingId,

    #[error("missing recipe id or recipe type")]
    MissingIdOrType,

    #[error("invalid recipe type")]
    RecipeType(#[source] ValidationError),

    #[error("malformed request body")]
    Body(#[source] CodecError),
}

/// A parsed request failed while running against the recipe service.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("recipe service failed")]
    Service(#[from] RecipeBoardError),

    #[error("unable to encode response body")]
    Encode(#[from] CodecError),
}

/// Any failure of the select → parse → execute pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("unable to parse request")]
    Parse(#[from] ParseError),

    #[error("unable to handle request")]
    Execute(#[from] ExecuteError),
}

impl DispatchError {
    /// Status code reported to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedMethod(_) => status::NOT_IMPLEMENTED,
            Self::Parse(_) => status::BAD_REQUEST,
            Self::Execute(_) => status::INTERNAL_SERVER_ERROR,
        }
    }

    /// Pipeline stage that failed, for logging.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::UnsupportedMethod(_) => "select",
            Self::Parse(_) => "parse",
            Self::Execute(_) => "execute",
        }
    }
}

/// Render an error and all of its sources as one line.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
