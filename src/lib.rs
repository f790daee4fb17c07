//! Recipe Share - An in-memory recipe catalog
//!
//! Recipes are created, read, updated, deleted and filtered by dietary tag
//! through the [`service::Catalog`], which validates input and delegates to a
//! shared [`storage::RecipeStore`].

pub mod domain;
pub mod storage;
pub mod service;
pub mod cli;

pub use domain::{Recipe, RecipeDraft, RecipeId, ValidationError};
pub use service::{Catalog, CatalogError};
pub use storage::RecipeStore;
