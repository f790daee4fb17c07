//! Domain models for the recipe catalog
//!
//! Contains the entity model and its validation rules without any I/O or
//! locking concerns.

mod id;
mod recipe;
mod validation;

pub use id::{IdError, RecipeId};
pub use recipe::{split_tags, Recipe, RecipeDraft, TAG_SEPARATOR};
pub use validation::{Field, FieldViolation, ValidationError, Validator};
