//! View pipeline for browsing a category listing.
//!
//! This crate provides:
//! - Filter trait and implementations (search, price range, manufacturer)
//! - FilterPipeline for composing filters
//! - Sorting, pagination, and the ViewPipeline that runs all three stages
//! - Display formatting for prices and part properties
//!
//! ## Architecture
//! Every state change recomputes the visible page from the full listing:
//! 1. Filters narrow the listing down (order-preserving)
//! 2. The sort stage orders what is left
//! 3. The paginator cuts out the requested page and reports totals
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{SortMode, ViewPipeline, ViewState};
//!
//! let state = ViewState::new(PartCategory::Cpu, 12)?
//!     .with_search("ryzen")
//!     .with_sort(SortMode::PriceLow);
//!
//! let page = ViewPipeline::standard().run(&parts, &state)?;
//! println!("page {}/{}", page.page, page.total_pages);
//! ```

pub mod error;
pub mod traits;
pub mod state;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod paginate;
pub mod view;
pub mod format;

// Re-export main types
pub use error::{PipelineError, Result};
pub use traits::Filter;
pub use state::{
    DEFAULT_PAGE_SIZE, FilterState, PRICE_BUCKETS, PriceBucket, PriceRange, SortMode, ViewState,
};
pub use filter_pipeline::FilterPipeline;
pub use sort::sort_parts;
pub use paginate::{Page, paginate};
pub use view::{ViewPipeline, filter_parts};
pub use format::{
    card_properties, format_price, format_property_key, format_property_value,
    unique_manufacturers,
};
