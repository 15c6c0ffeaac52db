//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RecipeBoardError`] via `#[from]`.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum RecipeBoardError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("recipe id is required")]
    MissingId,

    #[error("unsupported recipe type: {0}")]
    UnknownRecipeType(String),
}

/// A record looked up by id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: RecipeBoardError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            RecipeBoardError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_describe_missing_record() {
        let err = NotFoundError {
            entity: "Recipe",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Recipe abc not found");
    }

    #[test]
    fn should_expose_not_found_as_source() {
        let err: RecipeBoardError = NotFoundError {
            entity: "Recipe",
            id: "abc".to_string(),
        }
        .into();
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Recipe abc not found"));
    }
}
