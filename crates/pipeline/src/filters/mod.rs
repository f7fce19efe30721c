//! Filter implementations for the view pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod manufacturer;
pub mod price_range;
pub mod search;

// Re-export for convenience
pub use manufacturer::ManufacturerFilter;
pub use price_range::PriceRangeFilter;
pub use search::SearchFilter;
