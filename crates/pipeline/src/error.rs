//! Error types for the view pipeline.
//!
//! The pipeline itself is pure; the only way it fails is degenerate input.
//! Those inputs are rejected up front instead of producing NaN page counts
//! or silently empty pages.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Page size must be at least one item
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// Pages are 1-indexed
    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(usize),

    /// A price bound that is NaN, negative or otherwise unusable
    #[error("Invalid {bound} price bound: {value}")]
    InvalidPriceBound { bound: &'static str, value: f64 },

    #[error("Price range is inverted: min {min} is greater than max {max}")]
    InvertedPriceRange { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
