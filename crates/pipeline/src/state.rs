//! View state threaded through the pipeline.
//!
//! Nothing here is mutated in place. Every change to the browsing state
//! produces a new [`ViewState`], and the pipeline recomputes the page from
//! scratch for it.

use crate::error::{PipelineError, Result};
use catalog::PartCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Number of parts shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 12;

// =============================================================================
// Price range
// =============================================================================

/// Inclusive price bounds; `max == None` means "no upper limit".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    min: f64,
    max: Option<f64>,
}

impl PriceRange {
    /// Build a validated range.
    ///
    /// A `max` of positive infinity is treated the same as `None`.
    pub fn new(min: f64, max: Option<f64>) -> Result<Self> {
        if !min.is_finite() || min < 0.0 {
            return Err(PipelineError::InvalidPriceBound { bound: "min", value: min });
        }

        let max = match max {
            Some(m) if m.is_nan() => {
                return Err(PipelineError::InvalidPriceBound { bound: "max", value: m });
            }
            Some(m) if m == f64::INFINITY => None,
            other => other,
        };

        if let Some(m) = max {
            if m < min {
                return Err(PipelineError::InvertedPriceRange { min, max: m });
            }
        }

        Ok(Self { min, max })
    }

    /// The range every price passes
    pub const fn unbounded() -> Self {
        Self { min: 0.0, max: None }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max.is_none()
    }

    /// Both bounds inclusive
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A preset price range offered in the filter panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub range: PriceRange,
}

const fn bucket(label: &'static str, min: f64, max: Option<f64>) -> PriceBucket {
    PriceBucket {
        label,
        range: PriceRange { min, max },
    }
}

/// Price presets, in the order the filter panel shows them
pub const PRICE_BUCKETS: [PriceBucket; 7] = [
    bucket("All Prices", 0.0, None),
    bucket("Under $50", 0.0, Some(50.0)),
    bucket("$50 - $100", 50.0, Some(100.0)),
    bucket("$100 - $250", 100.0, Some(250.0)),
    bucket("$250 - $500", 250.0, Some(500.0)),
    bucket("$500 - $1000", 500.0, Some(1000.0)),
    bucket("$1000+", 1000.0, None),
];

// =============================================================================
// Filter state
// =============================================================================

/// What the user has narrowed the listing down to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub price: PriceRange,
    /// Selected manufacturer keys; empty means no restriction
    pub manufacturers: BTreeSet<String>,
    /// Raw search text as typed
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_manufacturers<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manufacturers = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Add the key if absent, remove it if present
    pub fn with_manufacturer_toggled(mut self, key: &str) -> Self {
        if !self.manufacturers.remove(key) {
            self.manufacturers.insert(key.to_string());
        }
        self
    }

    /// Lowercased search needle, or `None` when the query is blank.
    ///
    /// Only emptiness is judged on the trimmed text; the needle keeps the
    /// query's own spacing.
    pub fn search_needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// True if no filter would remove anything
    pub fn is_empty(&self) -> bool {
        self.search_needle().is_none() && self.price.is_unbounded() && self.manufacturers.is_empty()
    }
}

// =============================================================================
// Sort mode
// =============================================================================

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Ascending by display name
    #[default]
    Name,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Keep catalog order; what unrecognised sort keys map to
    Unsorted,
}

impl SortMode {
    /// Parse the sort token used by the storefront (`name`, `price-low`,
    /// `price-high`). Anything else leaves the list in catalog order.
    pub fn parse(s: &str) -> Self {
        match s {
            "name" => Self::Name,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            _ => Self::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Unsorted => "unsorted",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Unsorted => "Catalog Order",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// View state
// =============================================================================

/// Everything needed to compute the page the user is looking at.
///
/// The `with_*` methods mirror how the storefront reacts to user input:
/// any change to filters or sort order starts again from page 1, and
/// switching category also clears the filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub category: PartCategory,
    pub filters: FilterState,
    pub sort: SortMode,
    /// 1-indexed
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(category: PartCategory, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(PipelineError::InvalidPageSize(page_size));
        }
        Ok(Self {
            category,
            filters: FilterState::default(),
            sort: SortMode::default(),
            page: 1,
            page_size,
        })
    }

    /// Reject states the paginator cannot serve
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PipelineError::InvalidPageSize(self.page_size));
        }
        if self.page == 0 {
            return Err(PipelineError::InvalidPage(self.page));
        }
        Ok(())
    }

    pub fn with_category(&self, category: PartCategory) -> Self {
        Self {
            category,
            filters: FilterState::default(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_filters(&self, filters: FilterState) -> Self {
        Self {
            filters,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_search(&self, query: impl Into<String>) -> Self {
        self.with_filters(self.filters.clone().with_search(query))
    }

    pub fn with_price(&self, price: PriceRange) -> Self {
        self.with_filters(self.filters.clone().with_price(price))
    }

    pub fn with_manufacturer_toggled(&self, key: &str) -> Self {
        self.with_filters(self.filters.clone().with_manufacturer_toggled(key))
    }

    pub fn with_sort(&self, sort: SortMode) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    /// Move to another page; the page number is not clamped here
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let range = PriceRange::new(50.0, Some(100.0)).unwrap();
        assert!(range.contains(50.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(49.99));
        assert!(!range.contains(100.01));
    }

    #[test]
    fn test_infinite_max_is_unbounded() {
        let range = PriceRange::new(450.0, Some(f64::INFINITY)).unwrap();
        assert_eq!(range.max(), None);
        assert!(range.contains(1_000_000.0));
    }

    #[test]
    fn test_degenerate_price_ranges_are_rejected() {
        assert!(matches!(
            PriceRange::new(f64::NAN, None),
            Err(PipelineError::InvalidPriceBound { bound: "min", .. })
        ));
        assert!(matches!(
            PriceRange::new(0.0, Some(f64::NAN)),
            Err(PipelineError::InvalidPriceBound { bound: "max", .. })
        ));
        assert!(matches!(
            PriceRange::new(-5.0, None),
            Err(PipelineError::InvalidPriceBound { bound: "min", .. })
        ));
        assert!(matches!(
            PriceRange::new(100.0, Some(50.0)),
            Err(PipelineError::InvertedPriceRange { .. })
        ));
    }

    #[test]
    fn test_price_buckets() {
        assert!(PRICE_BUCKETS[0].range.is_unbounded());
        let top = PRICE_BUCKETS[6];
        assert_eq!(top.label, "$1000+");
        assert!(top.range.contains(1000.0));
        assert!(!top.range.contains(999.99));
    }

    #[test]
    fn test_blank_search_has_no_needle() {
        assert_eq!(FilterState::new().with_search("   ").search_needle(), None);
        assert_eq!(
            FilterState::new().with_search("RTX").search_needle().as_deref(),
            Some("rtx")
        );
        assert!(FilterState::new().with_search("\t").is_empty());
    }

    #[test]
    fn test_manufacturer_toggle() {
        let filters = FilterState::new()
            .with_manufacturer_toggled("amd")
            .with_manufacturer_toggled("intel")
            .with_manufacturer_toggled("amd");
        assert_eq!(filters.manufacturers.len(), 1);
        assert!(filters.manufacturers.contains("intel"));
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("name"), SortMode::Name);
        assert_eq!(SortMode::parse("price-low"), SortMode::PriceLow);
        assert_eq!(SortMode::parse("price-high"), SortMode::PriceHigh);
        assert_eq!(SortMode::parse("rating"), SortMode::Unsorted);
        for mode in [SortMode::Name, SortMode::PriceLow, SortMode::PriceHigh] {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_view_state_rejects_zero_page_size() {
        assert_eq!(
            ViewState::new(PartCategory::Cpu, 0),
            Err(PipelineError::InvalidPageSize(0))
        );
    }

    #[test]
    fn test_filter_and_sort_changes_reset_page() {
        let state = ViewState::new(PartCategory::Cpu, 12).unwrap().with_page(4);
        assert_eq!(state.page, 4);

        assert_eq!(state.with_search("amd").page, 1);
        assert_eq!(state.with_sort(SortMode::PriceHigh).page, 1);
        assert_eq!(state.with_manufacturer_toggled("amd").page, 1);
        assert_eq!(state.with_price(PriceRange::unbounded()).page, 1);
    }

    #[test]
    fn test_category_change_clears_filters_keeps_sort() {
        let state = ViewState::new(PartCategory::Cpu, 12)
            .unwrap()
            .with_search("ryzen")
            .with_sort(SortMode::PriceLow)
            .with_page(2);

        let next = state.with_category(PartCategory::VideoCard);
        assert_eq!(next.category, PartCategory::VideoCard);
        assert!(next.filters.is_empty());
        assert_eq!(next.sort, SortMode::PriceLow);
        assert_eq!(next.page, 1);
        // the original value is untouched
        assert_eq!(state.filters.search, "ryzen");
    }

    #[test]
    fn test_validate_rejects_page_zero() {
        let state = ViewState::new(PartCategory::Cpu, 12).unwrap().with_page(0);
        assert_eq!(state.validate(), Err(PipelineError::InvalidPage(0)));
    }
}
