//! # Browse Session
//!
//! Holds everything one shopper's catalog view depends on:
//! 1. The categories the source offers
//! 2. The listing of the selected category
//! 3. The last load error, if any
//! 4. The current [`ViewState`] (filters, sort, page)
//!
//! The visible page is never cached. [`BrowseSession::current_page`] runs
//! the view pipeline over the fetched listing each time it is asked.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use catalog::{CategoryListing, Part, PartCategory};
use pipeline::{
    FilterState, Page, PipelineError, PriceRange, SortMode, ViewPipeline, ViewState,
    unique_manufacturers,
};

use crate::config::StorefrontConfig;
use crate::source::CatalogSource;

pub const CATEGORIES_ERROR: &str = "Failed to load categories";

/// Message recorded when a category listing cannot be fetched
pub fn load_error_message(category: PartCategory) -> String {
    format!("Failed to load {} products", category.display_name())
}

pub struct BrowseSession {
    source: Arc<dyn CatalogSource>,
    pipeline: ViewPipeline,
    categories: Vec<PartCategory>,
    parts: Vec<Part>,
    error: Option<String>,
    state: ViewState,
}

impl BrowseSession {
    /// Start a session: list categories, then fetch the default category.
    ///
    /// Failing to list categories or to fetch the default listing is not
    /// fatal; the session opens with the error recorded. Only an invalid
    /// configuration is an error here.
    pub async fn open(source: Arc<dyn CatalogSource>, config: &StorefrontConfig) -> Result<Self> {
        config.validate().context("Invalid storefront configuration")?;
        let state = ViewState::new(config.default_category, config.page_size)?;

        info!("Opening browse session on {}", source.name());

        let mut session = Self {
            source,
            pipeline: ViewPipeline::standard(),
            categories: Vec::new(),
            parts: Vec::new(),
            error: None,
            state,
        };

        match session.fetch_categories().await {
            Ok(categories) => {
                info!("Source offers {} categories", categories.len());
                session.categories = categories;
            }
            Err(e) => {
                warn!("{}: {:#}", CATEGORIES_ERROR, e);
                session.error = Some(CATEGORIES_ERROR.to_string());
            }
        }

        session.select_category(config.default_category).await;
        Ok(session)
    }

    /// Switch to `category` and fetch its listing.
    ///
    /// Filters are cleared and the page goes back to 1 whether or not the
    /// fetch succeeds. On failure the listing is emptied and
    /// [`BrowseSession::error`] holds the user-facing message.
    pub async fn select_category(&mut self, category: PartCategory) {
        let start_time = Instant::now();
        self.state = self.state.with_category(category);
        self.error = None;

        match self.fetch_listing(category).await {
            Ok(listing) => {
                self.parts = listing.parts;
                info!(
                    "Loaded {} {} parts in {:.2?}",
                    self.parts.len(),
                    category,
                    start_time.elapsed()
                );
            }
            Err(e) => {
                warn!("Fetching {} failed: {:#}", category, e);
                self.parts.clear();
                self.error = Some(load_error_message(category));
            }
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<PartCategory>> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.categories())
            .await
            .context("Category listing task panicked")?
    }

    async fn fetch_listing(&self, category: PartCategory) -> Result<CategoryListing> {
        let source = self.source.clone();
        let listing = tokio::task::spawn_blocking(move || source.fetch_category(category))
            .await
            .context("Category fetch task panicked")??;

        if listing.category != category {
            anyhow::bail!(
                "{} returned a {} listing when asked for {}",
                self.source.name(),
                listing.category,
                category
            );
        }
        Ok(listing)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state = self.state.with_search(query);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.state = self.state.with_price(range);
    }

    pub fn toggle_manufacturer(&mut self, key: &str) {
        self.state = self.state.with_manufacturer_toggled(key);
    }

    /// Replace all filters at once
    pub fn set_filters(&mut self, filters: FilterState) {
        self.state = self.state.with_filters(filters);
    }

    /// Drop every filter but stay on the current category
    pub fn clear_filters(&mut self) {
        self.set_filters(FilterState::default());
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.state = self.state.with_sort(sort);
    }

    /// Jump to a 1-indexed page. Pages past the end are allowed and show
    /// nothing.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        if page == 0 {
            return Err(PipelineError::InvalidPage(page).into());
        }
        self.state = self.state.with_page(page);
        Ok(())
    }

    /// Run the view pipeline for the current state
    pub fn current_page(&self) -> Result<Page<&Part>> {
        let page = self
            .pipeline
            .run(&self.parts, &self.state)
            .with_context(|| format!("Failed to compute view for {}", self.state.category))?;
        debug!(
            "Page {}/{} of {} ({} items)",
            page.page, page.total_pages, self.state.category, page.items.len()
        );
        Ok(page)
    }

    /// Manufacturer keys present in the fetched listing, sorted
    pub fn available_manufacturers(&self) -> Vec<&'static str> {
        unique_manufacturers(&self.parts)
    }

    /// Look up a part of the selected category by id
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == id)
    }

    pub fn categories(&self) -> &[PartCategory] {
        &self.categories
    }

    pub fn selected_category(&self) -> PartCategory {
        self.state.category
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
