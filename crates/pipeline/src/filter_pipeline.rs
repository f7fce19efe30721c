//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::error::Result;
use crate::filters::{ManufacturerFilter, PriceRangeFilter, SearchFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Part;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(PriceRangeFilter)
///     .add_filter(ManufacturerFilter);
///
/// let filtered = pipeline.apply(parts.iter().collect(), &filters)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The storefront's filter chain: search, then price, then manufacturer.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(PriceRangeFilter)
            .add_filter(ManufacturerFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// Every filter keeps input order, so the result is always an
    /// order-preserving subsequence of `parts`.
    pub fn apply<'a>(&self, parts: Vec<&'a Part>, state: &FilterState) -> Result<Vec<&'a Part>> {
        let mut current = parts;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
