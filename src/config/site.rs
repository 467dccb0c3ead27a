//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::category::Category;

/// Errors raised while loading `_config.yml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    /// Suffix repeated heading ids with `-1`, `-2`, ...
    pub unique_heading_ids: bool,

    // Server
    pub server: ServerConfig,

    /// Per-category overrides, keyed by category key (`states`, `tools`, ...)
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Firm6102".to_string(),
            url: "https://firm6102.com".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            unique_heading_ids: false,

            server: ServerConfig::default(),

            categories: BTreeMap::new(),
        }
    }
}

/// Dev server defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 8000,
        }
    }
}

/// Override for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Input directory, relative to the base directory
    pub input: Option<String>,
    pub enabled: bool,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            input: None,
            enabled: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Input directory for a category, relative to the base directory
    pub fn input_dir(&self, category: Category) -> PathBuf {
        match self
            .categories
            .get(category.key())
            .and_then(|c| c.input.as_deref())
        {
            Some(input) => PathBuf::from(input),
            None => Path::new(&self.content_dir).join(category.key()),
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories
            .get(category.key())
            .map(|c| c.enabled)
            .unwrap_or(true)
    }

    /// Absolute canonical URL for a site-relative path
    pub fn full_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
