//! Catalog service layer
//!
//! Sits between callers and the [`RecipeStore`](crate::storage::RecipeStore):
//! validates input before any mutation, normalizes and matches dietary tag
//! filters, and reports failures as [`CatalogError`].

mod catalog;
mod filter;

pub use catalog::{BenchmarkReport, Catalog, CatalogError};
pub use filter::TagFilter;
