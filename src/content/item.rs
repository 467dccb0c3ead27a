//! The unit of work: one source file and what was derived from its name

use std::path::{Path, PathBuf};

use super::title::CuratedArticle;
use crate::category::Category;

/// Average reading speed used for read-time estimates
const WORDS_PER_MINUTE: usize = 200;

/// A Markdown source file loaded for rendering
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub source_path: PathBuf,
    pub raw_markdown: String,
    pub title: String,
    pub slug: String,
    pub category: Category,
    /// Curated manifest entry, when the category has one for this file
    pub curated: Option<&'static CuratedArticle>,
}

impl ContentItem {
    pub fn word_count(&self) -> usize {
        self.raw_markdown.split_whitespace().count()
    }

    /// Reading time such as `"12 min"`, rounded up, never below one minute
    pub fn estimated_read_time(&self) -> String {
        let minutes = self.word_count().div_ceil(WORDS_PER_MINUTE).max(1);
        format!("{} min", minutes)
    }
}

/// File name of a source, used in logs and failure reports; empty when it
/// is not valid UTF-8
pub(crate) fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
