//! In-memory recipe store
//!
//! Records live in an id-ordered map behind a single read/write lock that
//! also guards the id counter. Ids only ever grow, so id order is insertion
//! order. Every value handed out is a clone.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Recipe, RecipeDraft, RecipeId};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Recipe ID space exhausted; cannot store more recipes")]
    IdsExhausted,
}

#[derive(Debug)]
struct Inner {
    next_id: Option<RecipeId>,
    records: BTreeMap<RecipeId, Recipe>,
}

/// Authoritative, process-lifetime recipe storage
#[derive(Debug)]
pub struct RecipeStore {
    inner: RwLock<Inner>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// Creates an empty store whose first assigned id is 1
    pub fn new() -> Self {
        Self::starting_at(RecipeId::FIRST)
    }

    /// Creates an empty store that assigns ids starting from `first`
    pub fn starting_at(first: RecipeId) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: Some(first),
                records: BTreeMap::new(),
            }),
        }
    }

    /// Creates a store holding the built-in seed recipes
    pub fn with_seed() -> Result<Self, StoreError> {
        let store = Self::new();
        store.seed_if_empty(super::seed::builtin())?;
        Ok(store)
    }

    /// Persists a new recipe under a freshly assigned id
    pub fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.write();

        let Some(id) = inner.next_id else {
            warn!("recipe id counter exhausted");
            return Err(StoreError::IdsExhausted);
        };
        inner.next_id = id.next();

        let recipe = draft.into_recipe(id);
        inner.records.insert(id, recipe.clone());
        debug!(%id, title = %recipe.title, "created recipe");

        Ok(recipe)
    }

    /// Returns a snapshot of the recipe with the given id
    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.inner.read().records.get(&id).cloned()
    }

    /// Returns a snapshot of every recipe in insertion order
    pub fn list(&self) -> Vec<Recipe> {
        self.inner.read().records.values().cloned().collect()
    }

    /// Replaces all mutable fields of an existing recipe
    ///
    /// Returns the updated snapshot, or None if no recipe has this id.
    pub fn update(&self, id: RecipeId, draft: RecipeDraft) -> Option<Recipe> {
        let mut inner = self.inner.write();
        let recipe = inner.records.get_mut(&id)?;
        recipe.replace_fields(draft);
        debug!(%id, "updated recipe");
        Some(recipe.clone())
    }

    /// Removes a recipe, returning false if it did not exist
    pub fn delete(&self, id: RecipeId) -> bool {
        let removed = self.inner.write().records.remove(&id).is_some();
        if removed {
            debug!(%id, "deleted recipe");
        }
        removed
    }

    /// Inserts the given recipes only if the store holds none
    ///
    /// Returns the number of recipes inserted. Nothing is inserted when the
    /// remaining ID space cannot hold every draft.
    pub fn seed_if_empty<I>(&self, drafts: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = RecipeDraft>,
    {
        let mut inner = self.inner.write();
        if !inner.records.is_empty() {
            debug!(existing = inner.records.len(), "store not empty, skipping seed");
            return Ok(0);
        }

        let mut next_id = inner.next_id;
        let mut seeded = Vec::new();
        for draft in drafts {
            let Some(id) = next_id else {
                warn!(requested = seeded.len() + 1, "recipe id counter exhausted while seeding");
                return Err(StoreError::IdsExhausted);
            };
            next_id = id.next();
            seeded.push(draft.into_recipe(id));
        }

        let count = seeded.len();
        inner.next_id = next_id;
        inner.records.extend(seeded.into_iter().map(|recipe| (recipe.id, recipe)));

        debug!(count, "seeded recipe store");
        Ok(count)
    }

    /// Returns the number of stored recipes
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Returns true if the store holds no recipes
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}
