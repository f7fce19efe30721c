//! # Catalog Crate
//!
//! Domain types and data access for the PC parts catalog.
//!
//! ## Main Components
//!
//! - **types**: Parts, categories and property values
//! - **manufacturer**: Static manufacturer registry and name-based inference
//! - **parser**: Parse category listing payloads (API responses or files)
//! - **index**: In-memory catalog built from a directory of listings
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, PartCategory, resolve_manufacturer};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_dir(Path::new("data/catalog"))?;
//! for part in index.parts(PartCategory::Cpu) {
//!     println!("{} by {}", part.name, resolve_manufacturer(&part.name));
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod manufacturer;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{CatalogIndex, discover_categories, listing_path};
pub use manufacturer::{
    ManufacturerInfo,
    UNKNOWN_MANUFACTURER,
    is_known_manufacturer,
    manufacturer_info,
    manufacturer_info_for,
    manufacturer_keys,
    resolve_manufacturer,
};
pub use types::{CategoryListing, Part, PartCategory, PartId, PropertyValue};
