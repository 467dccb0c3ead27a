//! Content loader - lists and reads a category's source files

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::item::{file_name, ContentItem};
use super::title::DerivedTitle;
use crate::category::{Category, CategoryDescriptor, SourceKind};
use crate::generator::ItemError;
use crate::Site;

/// Failure to enumerate a category as a whole
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input directory {} does not exist", path.display())]
    MissingInputDir { path: PathBuf },
}

/// Loads content for one category
pub struct ContentLoader {
    descriptor: CategoryDescriptor,
    input_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader for a category of the given site
    pub fn new(site: &Site, category: Category) -> Self {
        Self {
            descriptor: category.descriptor(),
            input_dir: site.base_dir.join(site.config.input_dir(category)),
        }
    }

    /// Source files in filename order.
    ///
    /// Manifest categories return every listed file, present or not, so a
    /// missing one shows up as a per-item failure.
    pub fn sources(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.input_dir.is_dir() {
            return Err(SourceError::MissingInputDir {
                path: self.input_dir.clone(),
            });
        }

        let files = match self.descriptor.sources {
            SourceKind::Manifest(manifest) => manifest
                .iter()
                .map(|article| self.input_dir.join(article.file))
                .collect(),
            SourceKind::Directory => WalkDir::new(&self.input_dir)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable entry: {}", e);
                        None
                    }
                })
                .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
                .map(|e| e.into_path())
                .collect(),
        };

        Ok(files)
    }

    /// Title and slug for a source file, without reading it
    pub fn derive(&self, path: &Path) -> DerivedTitle {
        self.descriptor.title_rule.derive(file_name(path))
    }

    /// Read a source file and derive its title and slug
    pub fn load(&self, path: &Path) -> Result<ContentItem, ItemError> {
        let raw_markdown =
            fs::read_to_string(path).map_err(|e| ItemError::from_read(path.to_path_buf(), e))?;
        let derived = self.derive(path);

        Ok(ContentItem {
            source_path: path.to_path_buf(),
            raw_markdown,
            title: derived.title,
            slug: derived.slug,
            category: self.descriptor.category,
            curated: derived.curated,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension().map(|ext| ext == "md").unwrap_or(false)
}
