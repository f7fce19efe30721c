//! Storefront configuration.
//!
//! Values come from the environment with a logged fallback to defaults.
//! Front ends may override individual fields afterwards (the CLI does so
//! from its flags) and must call [`StorefrontConfig::validate`] before use.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use catalog::PartCategory;
use pipeline::DEFAULT_PAGE_SIZE;
use tracing::{debug, info};

pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";
pub const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";
pub const ENV_DEFAULT_CATEGORY: &str = "STOREFRONT_DEFAULT_CATEGORY";

/// Catalog directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "data/catalog";

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Directory holding `<category>.json` listing files
    pub data_dir: PathBuf,
    pub page_size: usize,
    /// Category opened when a session starts
    pub default_category: PartCategory,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            default_category: PartCategory::DEFAULT,
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value lookup.
    ///
    /// Unset or blank keys keep their defaults. Set but unparseable values
    /// are errors rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match get(ENV_DATA_DIR) {
            Some(dir) => config.data_dir = PathBuf::from(dir),
            None => debug!("{} not set, using {}", ENV_DATA_DIR, DEFAULT_DATA_DIR),
        }

        if let Some(raw) = get(ENV_PAGE_SIZE) {
            config.page_size = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_PAGE_SIZE} must be a positive integer, got {raw:?}"))?;
        }

        if let Some(raw) = get(ENV_DEFAULT_CATEGORY) {
            config.default_category = raw
                .parse()
                .with_context(|| format!("Invalid {ENV_DEFAULT_CATEGORY}"))?;
        }

        config.validate()?;
        info!(
            "Storefront config: data_dir={:?}, page_size={}, default_category={}",
            config.data_dir, config.page_size, config.default_category
        );
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_default_category(mut self, category: PartCategory) -> Self {
        self.default_category = category;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page size must be at least 1");
        }
        if self.data_dir.as_os_str().is_empty() {
            bail!("data directory must not be empty");
        }
        Ok(())
    }
}
