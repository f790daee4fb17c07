//! Recipe identifiers
//!
//! IDs are positive integers handed out by the store from a monotonically
//! increasing counter. They render and parse as plain decimal numbers and
//! serialize as bare JSON integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid recipe ID: expected a positive integer, got '{0}'")]
    InvalidRecipeId(String),
}

/// Identifier of a stored recipe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecipeId(u64);

impl RecipeId {
    /// The first ID a fresh store assigns
    pub const FIRST: RecipeId = RecipeId(1);

    /// Wraps a raw integer
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the ID following this one, or None when the counter is exhausted
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(IdError::InvalidRecipeId(s.to_string())),
        }
    }
}
