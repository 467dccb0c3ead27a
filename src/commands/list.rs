//! List site content

use anyhow::Result;
use std::path::PathBuf;

use crate::category::Category;
use crate::content::{file_name, ContentLoader, SourceError};
use crate::Site;

/// What `generate` would do with one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub filename: String,
    pub title: String,
    pub output: PathBuf,
}

/// Derive the entries of one category without reading or writing any page
pub fn entries(site: &Site, category: Category) -> Result<Vec<ListEntry>, SourceError> {
    let descriptor = category.descriptor();
    let loader = ContentLoader::new(site, category);

    let entries = loader
        .sources()?
        .iter()
        .map(|source| {
            let derived = loader.derive(source);
            ListEntry {
                filename: file_name(source).to_string(),
                output: site
                    .public_dir
                    .join(descriptor.layout.output_path(category, &derived.slug)),
                title: derived.title,
            }
        })
        .collect();

    Ok(entries)
}

/// List one category, or every enabled category when none is given
pub fn run(site: &Site, category: Option<Category>) -> Result<()> {
    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::ALL
            .into_iter()
            .filter(|c| site.config.is_enabled(*c))
            .collect(),
    };

    for category in categories {
        match entries(site, category) {
            Ok(entries) => {
                println!("{} ({}):", category.label(), entries.len());
                for entry in entries {
                    println!(
                        "  {} - {} [{}]",
                        entry.filename,
                        entry.title,
                        entry.output.display()
                    );
                }
            }
            Err(e) => {
                println!("{}: {}", category.label(), e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    #[test]
    fn test_entries_for_states() {
        let dir = tempfile::tempdir().unwrap();
        let states = dir.path().join("content/states");
        fs::create_dir_all(&states).unwrap();
        fs::write(states.join("02_Texas_Bitcoin_Estate_Planning.md"), "").unwrap();
        fs::write(states.join("01_New_York_Bitcoin_Estate_Planning.md"), "").unwrap();

        let site = Site::with_config(dir.path(), SiteConfig::default());
        let entries = entries(&site, Category::States).unwrap();

        assert_eq!(
            entries,
            vec![
                ListEntry {
                    filename: "01_New_York_Bitcoin_Estate_Planning.md".to_string(),
                    title: "New York".to_string(),
                    output: site.public_dir.join("states/new-york/index.html"),
                },
                ListEntry {
                    filename: "02_Texas_Bitcoin_Estate_Planning.md".to_string(),
                    title: "Texas".to_string(),
                    output: site.public_dir.join("states/texas/index.html"),
                },
            ]
        );
        assert!(!site.public_dir.exists());
    }

    #[test]
    fn test_entries_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());

        assert!(entries(&site, Category::Learn).is_err());
    }
}
