//! Error types for the catalog crate.
//!
//! Every failure that can happen while reading a category listing or
//! building the catalog index ends up in [`CatalogError`].

use thiserror::Error;

/// Errors that can occur while loading and validating catalog listings
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Listing file could not be found
    #[error("Failed to open listing: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a listing
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Listing payload is not valid JSON or does not match the expected shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A category token that is not one of the known part types
    #[error("Unknown part category: {0}")]
    UnknownCategory(String),

    /// A part field had an invalid value
    #[error("Invalid value for {field} on part {part_id}: {value}")]
    InvalidValue {
        part_id: String,
        field: String,
        value: String,
    },

    /// Two parts in the same category share an id
    #[error("Duplicate part id {part_id} in category {category}")]
    DuplicatePart { category: String, part_id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
