//! Storefront crate for the rigshop parts catalog.
//!
//! This crate ties the catalog and the view pipeline together:
//! - [`StorefrontConfig`]: environment-driven settings
//! - [`CatalogSource`]: where category listings are fetched from
//! - [`BrowseSession`]: the async browsing state machine front ends drive

pub mod config;
pub mod session;
pub mod source;

pub use config::StorefrontConfig;
pub use session::{BrowseSession, load_error_message};
pub use source::{CatalogSource, DirectorySource, InMemorySource};
