//! Recipe domain model
//!
//! A recipe is the sole catalog entity. Ingredients and steps are free-form
//! line-oriented text; dietary tags are a comma-separated list of arbitrary
//! tokens.

use serde::{Deserialize, Serialize};

use super::id::RecipeId;
use super::validation::{Field, ValidationError, Validator};

/// Separator between dietary tags
pub const TAG_SEPARATOR: char = ',';

/// Iterates over the trimmed, non-empty tokens of a comma-separated tag list
pub fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
    tags.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Recipe fields without an identifier
///
/// This is what callers submit on create and what the store replaces on
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    /// Human-readable title (required)
    pub title: String,

    /// One ingredient per line
    pub ingredients: String,

    /// One instruction per line
    pub steps: String,

    /// Total cooking time, at least one minute
    pub cooking_time_minutes: i32,

    /// Comma-separated dietary tags
    pub dietary_tags: String,
}

impl RecipeDraft {
    /// Creates a draft with the given title and cooking time
    pub fn new(title: impl Into<String>, cooking_time_minutes: i32) -> Self {
        Self {
            title: title.into(),
            cooking_time_minutes,
            ..Self::default()
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn with_tags(mut self, dietary_tags: impl Into<String>) -> Self {
        self.dietary_tags = dietary_tags.into();
        self
    }

    /// Checks the field constraints: non-blank title and cooking time >= 1
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check(!self.title.trim().is_empty(), Field::Title, "Title is required")
            .check(
                self.cooking_time_minutes >= 1,
                Field::CookingTimeMinutes,
                "Cooking time must be > 0",
            );
        v.finish()
    }

    /// Iterates over the dietary tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.dietary_tags)
    }

    /// Attaches an identifier, producing a full recipe
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            steps: self.steps,
            cooking_time_minutes: self.cooking_time_minutes,
            dietary_tags: self.dietary_tags,
        }
    }
}

/// A recipe as stored and as exposed to callers
///
/// Serializes with exactly the keys `id`, `title`, `ingredients`, `steps`,
/// `cookingTimeMinutes` and `dietaryTags`. A missing `id` decodes as 0, which
/// no stored recipe ever has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: RecipeId,

    pub title: String,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub steps: String,

    #[serde(default)]
    pub cooking_time_minutes: i32,

    #[serde(default)]
    pub dietary_tags: String,
}

impl Recipe {
    /// Iterates over the dietary tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.dietary_tags)
    }

    /// Iterates over non-blank ingredient lines
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        non_blank_lines(&self.ingredients)
    }

    /// Iterates over non-blank step lines
    pub fn step_lines(&self) -> impl Iterator<Item = &str> {
        non_blank_lines(&self.steps)
    }

    /// Drops the identifier
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft {
            title: self.title,
            ingredients: self.ingredients,
            steps: self.steps,
            cooking_time_minutes: self.cooking_time_minutes,
            dietary_tags: self.dietary_tags,
        }
    }

    /// Replaces every mutable field, keeping the identifier
    pub fn replace_fields(&mut self, draft: RecipeDraft) {
        let id = self.id;
        *self = draft.into_recipe(id);
    }
}
