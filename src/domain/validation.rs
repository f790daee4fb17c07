//! Field validation for recipe input
//!
//! Validation runs explicitly before any store mutation and reports every
//! violated field at once.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A recipe field that carries a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    CookingTimeMinutes,
}

impl Field {
    /// Returns the field name as it appears in the external representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::CookingTimeMinutes => "cookingTimeMinutes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input violated one or more field constraints
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns true if the given field is among the violations
    pub fn has_field(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Iterates over the violated fields
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects violations and turns them into a result
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field` unless `ok` holds
    pub fn check(&mut self, ok: bool, field: Field, message: &str) -> &mut Self {
        if !ok {
            self.violations.push(FieldViolation::new(field, message));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}
