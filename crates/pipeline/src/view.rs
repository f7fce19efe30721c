//! End-to-end view computation: filter, then sort, then paginate.

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::paginate::{Page, paginate};
use crate::sort::sort_parts;
use crate::state::{FilterState, ViewState};
use catalog::Part;
use tracing::debug;

/// Runs the three view stages in their fixed order.
///
/// The pipeline keeps no state between calls; every call recomputes the
/// page from the full listing.
pub struct ViewPipeline {
    filters: FilterPipeline,
}

impl ViewPipeline {
    pub fn new(filters: FilterPipeline) -> Self {
        Self { filters }
    }

    /// View pipeline over [`FilterPipeline::standard`]
    pub fn standard() -> Self {
        Self::new(FilterPipeline::standard())
    }

    /// Filtered and sorted parts, without pagination
    pub fn select<'a>(&self, parts: &'a [Part], state: &ViewState) -> Result<Vec<&'a Part>> {
        let filtered = self.filters.apply(parts.iter().collect(), &state.filters)?;
        Ok(sort_parts(filtered, state.sort))
    }

    /// Compute the page described by `state`.
    ///
    /// # Errors
    /// Fails fast on a zero page size or page number, before any filtering.
    pub fn run<'a>(&self, parts: &'a [Part], state: &ViewState) -> Result<Page<&'a Part>> {
        state.validate()?;

        let selected = self.select(parts, state)?;
        let page = paginate(selected, state.page, state.page_size)?;

        debug!(
            "View for {}: {} of {} parts match, page {}/{} ({} shown, sort {})",
            state.category,
            page.total_items,
            parts.len(),
            page.page,
            page.total_pages,
            page.items.len(),
            state.sort
        );
        Ok(page)
    }
}

impl Default for ViewPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Apply the standard filter chain to a listing
pub fn filter_parts<'a>(parts: &'a [Part], filters: &FilterState) -> Result<Vec<&'a Part>> {
    FilterPipeline::standard().apply(parts.iter().collect(), filters)
}
