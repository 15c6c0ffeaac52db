//! # recipeboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecipeRepository`: CRUD for recipes
//! - Define the **driving/inbound port** consumed by request adapters:
//!   - `RecipeManager`: create, get, list, update, delete
//! - Provide the `RecipeService` use-case implementation of `RecipeManager`
//!
//! ## Dependency rule
//! Depends on `recipeboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
