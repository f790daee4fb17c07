//! Catalog service
//!
//! Validates input, applies tag filters and shapes store results. Holds no
//! state of its own besides a handle to the store.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::filter::TagFilter;
use crate::domain::{Recipe, RecipeDraft, RecipeId, ValidationError};
use crate::storage::{RecipeStore, StoreError};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Id mismatch: path id {path} does not match body id {body}")]
    IdMismatch { path: RecipeId, body: RecipeId },

    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Timing of repeated unfiltered list calls
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub iterations: u32,
    pub total_ms: f64,
    pub average_ms: f64,
}

/// Request-level operations over a shared recipe store
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<RecipeStore>,
}

impl Catalog {
    pub fn new(store: Arc<RecipeStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &Arc<RecipeStore> {
        &self.store
    }

    /// Lists recipes, optionally keeping only those carrying a dietary tag
    ///
    /// An absent or blank filter returns every recipe.
    pub fn list_recipes(&self, tag_filter: Option<&str>) -> Vec<Recipe> {
        let all = self.store.list();

        let Some(filter) = TagFilter::parse(tag_filter) else {
            debug!(count = all.len(), "listed recipes");
            return all;
        };

        let matched: Vec<_> = all
            .into_iter()
            .filter(|r| filter.matches(&r.dietary_tags))
            .collect();
        debug!(tag = filter.as_str(), count = matched.len(), "listed recipes by tag");
        matched
    }

    /// Fetches a single recipe
    pub fn get_recipe(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        self.store.get(id).ok_or(CatalogError::NotFound(id))
    }

    /// Validates and stores a new recipe, returning it with its assigned id
    pub fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, CatalogError> {
        draft.validate()?;
        Ok(self.store.create(draft)?)
    }

    /// Replaces every field of an existing recipe
    ///
    /// The id embedded in `input` must equal `id`; that is checked before
    /// validation and before the store is touched.
    pub fn update_recipe(&self, id: RecipeId, input: Recipe) -> Result<(), CatalogError> {
        if input.id != id {
            return Err(CatalogError::IdMismatch {
                path: id,
                body: input.id,
            });
        }

        let draft = input.into_draft();
        draft.validate()?;

        self.store
            .update(id, draft)
            .map(|_| ())
            .ok_or(CatalogError::NotFound(id))
    }

    /// Removes a recipe
    pub fn delete_recipe(&self, id: RecipeId) -> Result<(), CatalogError> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(CatalogError::NotFound(id))
        }
    }

    /// Times `iterations` sequential unfiltered list calls
    pub fn benchmark(&self, iterations: u32) -> BenchmarkReport {
        let start = Instant::now();
        for _ in 0..iterations {
            let all = self.list_recipes(None);
            std::hint::black_box(all);
        }
        let total_ms = start.elapsed().as_secs_f64() * 1000.0;

        let average_ms = if iterations == 0 {
            0.0
        } else {
            total_ms / f64::from(iterations)
        };

        BenchmarkReport {
            iterations,
            total_ms,
            average_ms,
        }
    }
}
