//! Dietary tag filtering
//!
//! A filter is one token, trimmed and lower-cased. A recipe matches when any
//! of its own tags, normalized the same way, equals the filter exactly.

use crate::domain::split_tags;

/// A normalized dietary tag filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter(String);

impl TagFilter {
    /// Normalizes a raw filter, returning None when it is absent or blank
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Returns the normalized token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if any tag in the comma-separated list equals the filter
    pub fn matches(&self, dietary_tags: &str) -> bool {
        split_tags(dietary_tags).any(|tag| tag.to_lowercase() == self.0)
    }
}
