//! CatalogIndex building and lookups.
//!
//! The index keeps every loaded listing in memory, keyed by category, so a
//! whole catalog directory can be preloaded once and browsed without going
//! back to disk.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the optional file listing which categories a directory serves
pub const CATEGORY_LIST_FILE: &str = "categories.json";

/// Path of the listing file for `category` inside `data_dir`
pub fn listing_path(data_dir: &Path, category: PartCategory) -> PathBuf {
    data_dir.join(format!("{}.json", category.as_str()))
}

/// Categories a catalog directory serves.
///
/// If `categories.json` exists it is authoritative; otherwise every
/// category with a `<category>.json` listing file is served.
pub fn discover_categories(data_dir: &Path) -> Result<Vec<PartCategory>> {
    let list_path = data_dir.join(CATEGORY_LIST_FILE);
    if list_path.exists() {
        let content = fs::read_to_string(&list_path)?;
        return parser::parse_category_list(&content, CATEGORY_LIST_FILE);
    }

    if !data_dir.is_dir() {
        return Err(CatalogError::FileNotFound {
            path: data_dir.display().to_string(),
        });
    }

    Ok(PartCategory::ALL
        .iter()
        .copied()
        .filter(|category| listing_path(data_dir, *category).exists())
        .collect())
}

/// In-memory catalog: every part of every loaded category
#[derive(Debug, Default)]
pub struct CatalogIndex {
    pub(crate) listings: BTreeMap<PartCategory, Vec<Part>>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self {
            listings: BTreeMap::new(),
        }
    }

    /// Load every listing in a catalog directory
    ///
    /// Steps:
    /// 1. Work out which categories the directory serves
    /// 2. Parse all listing files in parallel with Rayon
    /// 3. Insert them and validate id uniqueness
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let categories = discover_categories(data_dir)?;

        let listings: Vec<CategoryListing> = categories
            .par_iter()
            .map(|category| parser::parse_listing(&listing_path(data_dir, *category)))
            .collect::<Result<Vec<_>>>()?;

        let mut index = CatalogIndex::new();
        for listing in listings {
            index.insert_listing(listing);
        }

        index.validate()?;

        let (category_count, part_count) = index.counts();
        info!("Loaded {} parts across {} categories", part_count, category_count);
        Ok(index)
    }

    /// Insert a listing, replacing whatever was stored for its category
    pub fn insert_listing(&mut self, listing: CategoryListing) {
        debug!(
            "Indexing {} parts for category {}",
            listing.parts.len(),
            listing.category
        );
        self.listings.insert(listing.category, listing.parts);
    }

    /// Categories present in the index, in selector order
    pub fn categories(&self) -> Vec<PartCategory> {
        self.listings.keys().copied().collect()
    }

    /// All parts of a category; empty if the category was never loaded
    pub fn parts(&self, category: PartCategory) -> &[Part] {
        self.listings
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Owned listing for a category, if it was loaded
    pub fn listing(&self, category: PartCategory) -> Option<CategoryListing> {
        self.listings
            .get(&category)
            .map(|parts| CategoryListing::new(category, parts.clone()))
    }

    /// Find one part by id
    pub fn get_part(&self, category: PartCategory, id: &str) -> Option<&Part> {
        self.parts(category).iter().find(|part| part.id == id)
    }

    /// (categories, parts) for logging and sanity checks
    pub fn counts(&self) -> (usize, usize) {
        let parts = self.listings.values().map(|v| v.len()).sum();
        (self.listings.len(), parts)
    }

    /// Check that part ids are unique within each category
    pub fn validate(&self) -> Result<()> {
        for (category, parts) in &self.listings {
            let mut seen = HashSet::with_capacity(parts.len());
            for part in parts {
                if !seen.insert(part.id.as_str()) {
                    return Err(CatalogError::DuplicatePart {
                        category: category.to_string(),
                        part_id: part.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
