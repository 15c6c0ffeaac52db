//! Storage-specific error type wrapping sqlx errors.

use recipeboard_domain::error::RecipeBoardError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A record handed to the repository had no id.
    #[error("recipe has no id")]
    MissingId,
}

impl From<StorageError> for RecipeBoardError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
