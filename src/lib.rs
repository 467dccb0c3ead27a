//! guidegen: static guide pages for a Bitcoin estate planning site
//!
//! Markdown sources in five categories (articles, state guides, professional
//! guides, tools and wealth-tier guides) are rendered into complete HTML
//! pages using Tera layouts embedded in the binary.

pub mod category;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod server;
pub mod templates;

use std::path::{Path, PathBuf};

pub use category::Category;
pub use config::{ConfigError, SiteConfig};
pub use generator::{BatchReport, BuildSummary, Generator};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (input) directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open a site, reading `_config.yml` when the base directory has one
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// A site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Generate pages for the given categories (all enabled ones when empty)
    pub fn generate(&self, only: &[Category]) -> anyhow::Result<BuildSummary> {
        commands::generate::run(self, only)
    }

    /// Clean the public directory
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert_eq!(site.config.title, "Firm6102");
        assert_eq!(site.content_dir, dir.path().join("content"));
        assert_eq!(site.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "public_dir: dist\n").unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.public_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "server: [unclosed\n").unwrap();

        assert!(matches!(
            Site::new(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
