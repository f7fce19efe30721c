//! Free-text search over a listing.
//!
//! A part matches when the query appears in its name, its category token,
//! or the manufacturer key inferred from its name.

use crate::error::Result;
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{Part, resolve_manufacturer};

/// Keeps parts matching the search query.
///
/// ## Algorithm
/// 1. A blank query (only whitespace) keeps everything
/// 2. Otherwise lowercase the query and keep a part if it is a substring of
///    the lowercased name, the category token, or the resolved manufacturer
pub struct SearchFilter;

impl SearchFilter {
    /// Whether a single part matches an already-lowercased needle
    pub fn matches(part: &Part, needle: &str) -> bool {
        part.name.to_lowercase().contains(needle)
            || part.category.as_str().contains(needle)
            || resolve_manufacturer(&part.name).contains(needle)
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, parts: Vec<&'a Part>, state: &FilterState) -> Result<Vec<&'a Part>> {
        let Some(needle) = state.search_needle() else {
            return Ok(parts);
        };

        let filtered: Vec<&Part> = parts
            .into_iter()
            .filter(|part| Self::matches(part, &needle))
            .collect();

        Ok(filtered)
    }
}
