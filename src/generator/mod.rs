//! Generator module - turns every category's Markdown into HTML pages
//!
//! Items are processed one at a time. A failing item is logged and recorded
//! in the category's [`BatchReport`]; it never stops the rest of the batch.

mod error;

pub use error::ItemError;

use anyhow::Result;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::category::{Category, CategoryDescriptor};
use crate::content::{ContentLoader, MarkdownRenderer, SourceError};
use crate::templates::{PageMetadata, TemplateRenderer};
use crate::Site;

/// A page that made it to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// A source file that could not be turned into a page
#[derive(Debug)]
pub struct ItemFailure {
    pub filename: String,
    pub error: ItemError,
}

/// Outcome of one category's batch
#[derive(Debug)]
pub struct BatchReport {
    pub category: Category,
    pub written: Vec<WrittenPage>,
    pub failures: Vec<ItemFailure>,
    /// Set when the category could not be enumerated at all
    pub source_error: Option<SourceError>,
}

impl BatchReport {
    fn new(category: Category) -> Self {
        Self {
            category,
            written: Vec::new(),
            failures: Vec::new(),
            source_error: None,
        }
    }

    /// Failed items, counting an unreadable category as one failure
    pub fn failed(&self) -> usize {
        self.failures.len() + usize::from(self.source_error.is_some())
    }
}

/// Reports for every category of one run
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub reports: Vec<BatchReport>,
}

impl BuildSummary {
    pub fn written(&self) -> usize {
        self.reports.iter().map(|r| r.written.len()).sum()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().map(BatchReport::failed).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages written, {} failed", self.written(), self.failed())
    }
}

/// Static page generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the given categories, or every enabled one when `only` is empty
    pub fn generate(&self, only: &[Category]) -> BuildSummary {
        let categories: Vec<Category> = if only.is_empty() {
            Category::ALL
                .into_iter()
                .filter(|c| self.site.config.is_enabled(*c))
                .collect()
        } else {
            Category::ALL
                .into_iter()
                .filter(|c| only.contains(c))
                .collect()
        };

        let reports = categories
            .into_iter()
            .map(|category| self.generate_category(category))
            .collect();

        BuildSummary { reports }
    }

    /// Run the whole batch for one category
    pub fn generate_category(&self, category: Category) -> BatchReport {
        let descriptor = category.descriptor();
        let loader = ContentLoader::new(&self.site, category);
        let mut report = BatchReport::new(category);

        tracing::info!("Generating {}", category.label().to_lowercase());

        let sources = match loader.sources() {
            Ok(sources) => sources,
            Err(e) => {
                tracing::error!("{}: {}", category, e);
                report.source_error = Some(e);
                return report;
            }
        };

        let markdown = MarkdownRenderer::new(descriptor.flavor)
            .with_unique_heading_ids(self.site.config.unique_heading_ids);

        // output path -> source that wrote it
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for source in sources {
            match self.generate_item(&loader, &descriptor, &markdown, &source, &claimed) {
                Ok(page) => {
                    tracing::debug!("Generated: {:?}", page.output);
                    claimed.insert(page.output.clone(), page.source.clone());
                    report.written.push(page);
                }
                Err(error) => {
                    let filename = crate::content::file_name(&source).to_string();
                    tracing::error!("{}: {}", filename, error);
                    report.failures.push(ItemFailure { filename, error });
                }
            }
        }

        tracing::info!(
            "{}: {} pages written, {} failed",
            category,
            report.written.len(),
            report.failed()
        );

        report
    }

    fn generate_item(
        &self,
        loader: &ContentLoader,
        descriptor: &CategoryDescriptor,
        markdown: &MarkdownRenderer,
        source: &Path,
        claimed: &HashMap<PathBuf, PathBuf>,
    ) -> Result<WrittenPage, ItemError> {
        let item = loader.load(source)?;
        if item.slug.is_empty() {
            return Err(ItemError::EmptySlug {
                path: item.source_path,
            });
        }

        let output = self
            .site
            .public_dir
            .join(descriptor.layout.output_path(descriptor.category, &item.slug));
        if let Some(first) = claimed.get(&output) {
            return Err(ItemError::DuplicateOutput {
                path: item.source_path,
                output,
                first: first.clone(),
            });
        }

        let body = descriptor.preprocess.apply(&item.raw_markdown);
        let fragment = markdown.render(&body);
        let page = PageMetadata::build(&item, descriptor.template, &self.site.config);

        let html = self
            .renderer
            .assemble(descriptor.template, &page, &fragment, &self.site.config)
            .map_err(|source| ItemError::Render {
                path: item.source_path.clone(),
                source,
            })?;

        write_atomic(&output, &html).map_err(|source| ItemError::Write {
            path: output.clone(),
            source,
        })?;

        Ok(WrittenPage {
            source: item.source_path,
            output,
        })
    }
}

/// Write `contents` to a temporary file next to `path`, then rename it over
/// `path`. Readers see either the old file or the complete new one.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn site_in(dir: &Path) -> Site {
        Site::with_config(dir, SiteConfig::default())
    }

    #[test]
    fn test_generate_state_pages() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("content/states/05_New_York_Bitcoin_Estate_Planning.md"),
            "# New York Bitcoin Estate Planning\n\n## Overview\n\nText.\n",
        );
        write(&dir.path().join("content/states/notes.txt"), "ignored");

        let site = site_in(dir.path());
        let report = Generator::new(&site)
            .unwrap()
            .generate_category(Category::States);

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.failed(), 0);

        let output = dir.path().join("public/states/new-york/index.html");
        assert_eq!(report.written[0].output, output);

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"<h2 id="overview" class="scroll-mt-20">Overview</h2>"#));
        assert!(!html.contains(r#"<h1 id="new-york-bitcoin-estate-planning""#));
    }

    #[test]
    fn test_missing_input_dir_is_one_failure() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("content/tools/01_Security_Framework.md"), "## A\n");

        let site = site_in(dir.path());
        let summary = Generator::new(&site)
            .unwrap()
            .generate(&[Category::States, Category::Tools]);

        assert_eq!(summary.reports.len(), 2);
        assert!(matches!(
            summary.reports[0].source_error,
            Some(SourceError::MissingInputDir { .. })
        ));
        assert_eq!(summary.reports[1].written.len(), 1);
        assert_eq!(summary.to_string(), "1 pages written, 1 failed");
        assert!(!summary.is_success());
    }

    #[test]
    fn test_unreadable_item_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("content/wealth/01_Retirement.md"), "## A\n");
        fs::write(dir.path().join("content/wealth/02_Inheritance.md"), [0xff, 0xfe, 0x00]).unwrap();
        write(&dir.path().join("content/wealth/03_Business_Owner.md"), "## B\n");

        let site = site_in(dir.path());
        let report = Generator::new(&site)
            .unwrap()
            .generate_category(Category::Wealth);

        assert_eq!(report.written.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "02_Inheritance.md");
        assert!(matches!(report.failures[0].error, ItemError::Read { .. }));
    }

    #[test]
    fn test_colliding_slugs_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("content/wealth/08_Retirement_Accounts.md"), "first\n");
        write(&dir.path().join("content/wealth/09_Retirement_Income.md"), "second\n");

        let site = site_in(dir.path());
        let report = Generator::new(&site)
            .unwrap()
            .generate_category(Category::Wealth);

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "09_Retirement_Income.md");
        match &report.failures[0].error {
            ItemError::DuplicateOutput { output, first, .. } => {
                assert_eq!(output, &report.written[0].output);
                assert!(first.ends_with("08_Retirement_Accounts.md"));
            }
            other => panic!("unexpected error: {}", other),
        }

        let html = fs::read_to_string(&report.written[0].output).unwrap();
        assert!(html.contains("first"));
        assert!(!html.contains("second"));
    }

    #[test]
    fn test_empty_slug_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("content/tools/01_!!!.md"), "## A\n");

        let site = site_in(dir.path());
        let report = Generator::new(&site)
            .unwrap()
            .generate_category(Category::Tools);

        assert!(report.written.is_empty());
        assert!(matches!(report.failures[0].error, ItemError::EmptySlug { .. }));
        assert!(!dir.path().join("public/tools/index.html").exists());
    }

    #[test]
    fn test_selected_category_runs_even_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("content/tools/01_Security_Framework.md"), "## A\n");

        let mut config = SiteConfig::default();
        config.categories.insert(
            "tools".to_string(),
            crate::config::CategoryConfig {
                input: None,
                enabled: false,
            },
        );
        let site = Site::with_config(dir.path(), config);
        let generator = Generator::new(&site).unwrap();

        let summary = generator.generate(&[]);
        assert!(summary.reports.iter().all(|r| r.category != Category::Tools));

        let summary = generator.generate(&[Category::Tools]);
        assert_eq!(summary.written(), 1);
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/index.html");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(fs::read_dir(dir.path().join("a/b")).unwrap().count(), 1);
    }
}
