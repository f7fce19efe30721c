//! Where category listings come from.
//!
//! A [`CatalogSource`] plays the role of the remote catalog API: it lists
//! the available categories and hands back one category's listing per
//! fetch. Fetches are blocking; the session moves them off the async
//! runtime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use catalog::{CatalogError, CatalogIndex, CategoryListing, PartCategory};

pub trait CatalogSource: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Categories the source can serve, in selector order
    fn categories(&self) -> Result<Vec<PartCategory>>;

    /// Fetch the full listing for one category
    fn fetch_category(&self, category: PartCategory) -> Result<CategoryListing>;
}

/// Reads `<data_dir>/<category>.json` on every fetch
#[derive(Debug, Clone)]
pub struct DirectorySource {
    data_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl CatalogSource for DirectorySource {
    fn name(&self) -> &str {
        "DirectorySource"
    }

    fn categories(&self) -> Result<Vec<PartCategory>> {
        catalog::discover_categories(&self.data_dir)
            .with_context(|| format!("Failed to list categories in {:?}", self.data_dir))
    }

    fn fetch_category(&self, category: PartCategory) -> Result<CategoryListing> {
        let path = catalog::listing_path(&self.data_dir, category);
        debug!("Reading {} listing from {:?}", category, path);
        let listing = catalog::parser::parse_listing(&path)
            .with_context(|| format!("Failed to fetch {category} listing"))?;
        Ok(listing)
    }
}

/// Serves listings from a catalog that was loaded up front
#[derive(Debug, Clone)]
pub struct InMemorySource {
    index: Arc<CatalogIndex>,
}

impl InMemorySource {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// Preload every listing in `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self> {
        let index = CatalogIndex::load_from_dir(data_dir)
            .with_context(|| format!("Failed to load catalog from {data_dir:?}"))?;
        Ok(Self::new(Arc::new(index)))
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }
}

impl CatalogSource for InMemorySource {
    fn name(&self) -> &str {
        "InMemorySource"
    }

    fn categories(&self) -> Result<Vec<PartCategory>> {
        Ok(self.index.categories())
    }

    fn fetch_category(&self, category: PartCategory) -> Result<CategoryListing> {
        self.index
            .listing(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))
            .with_context(|| format!("Failed to fetch {category} listing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Part;

    fn index() -> Arc<CatalogIndex> {
        let mut index = CatalogIndex::new();
        index.insert_listing(CategoryListing::new(
            PartCategory::Cpu,
            vec![
                Part::new("1", "AMD Ryzen 7 7800X3D", PartCategory::Cpu, 449.0),
                Part::new("2", "Intel Core i5-14600K", PartCategory::Cpu, 319.0),
            ],
        ));
        Arc::new(index)
    }

    #[test]
    fn test_in_memory_fetch() {
        let source = InMemorySource::new(index());
        assert_eq!(source.categories().unwrap(), vec![PartCategory::Cpu]);

        let listing = source.fetch_category(PartCategory::Cpu).unwrap();
        assert_eq!(listing.count, 2);
        assert_eq!(listing.parts[1].id, "2");
    }

    #[test]
    fn test_in_memory_missing_category() {
        let source = InMemorySource::new(index());
        let err = source.fetch_category(PartCategory::Mouse).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownCategory(c)) if c == "mouse"
        ));
    }

    #[test]
    fn test_directory_missing_file() {
        let source = DirectorySource::new("/nonexistent/catalog");
        assert!(source.fetch_category(PartCategory::Cpu).is_err());
        assert!(source.categories().is_err());
    }
}
