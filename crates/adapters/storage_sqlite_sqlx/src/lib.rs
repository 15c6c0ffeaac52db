//! # recipeboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `RecipeRepository` port defined in `recipeboard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `recipeboard-app` (for port traits) and `recipeboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod recipe_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use recipe_repo::SqliteRecipeRepository;
