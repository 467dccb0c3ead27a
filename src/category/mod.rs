//! Content categories and the per-category pipeline settings

mod catalog;
mod template;

pub use catalog::{ARTICLES, PROFESSIONAL_TITLES, STATE_SUFFIX, TOOL_TITLES, WEALTH_MARKERS};
pub use template::{
    fill, Breadcrumb, CallToAction, CategoryTemplate, FooterColumn, NavLink, RelatedCard,
    RelatedSection, SchemaCopy,
};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::content::markdown::Flavor;
use crate::content::preprocess::Preprocess;
use crate::content::title::{CuratedArticle, TitleRule};

/// One of the five content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Learn,
    States,
    Professionals,
    Tools,
    Wealth,
}

impl Category {
    /// All categories, in generation order
    pub const ALL: [Category; 5] = [
        Category::Learn,
        Category::States,
        Category::Professionals,
        Category::Tools,
        Category::Wealth,
    ];

    /// Directory name used for both the default input and the output tree
    pub fn key(self) -> &'static str {
        match self {
            Category::Learn => "learn",
            Category::States => "states",
            Category::Professionals => "professionals",
            Category::Tools => "tools",
            Category::Wealth => "wealth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Learn => "Articles",
            Category::States => "State guides",
            Category::Professionals => "Professional guides",
            Category::Tools => "Tools & templates",
            Category::Wealth => "Wealth-tier guides",
        }
    }

    /// Pipeline settings for this category
    pub fn descriptor(self) -> CategoryDescriptor {
        match self {
            Category::Learn => CategoryDescriptor {
                category: self,
                layout: OutputLayout::Flat,
                sources: SourceKind::Manifest(ARTICLES),
                title_rule: TitleRule::Curated(ARTICLES),
                flavor: Flavor::Basic,
                preprocess: Preprocess::StripTableOfContents,
                template: &catalog::ARTICLE_TEMPLATE,
            },
            Category::States => CategoryDescriptor {
                category: self,
                layout: OutputLayout::DirectoryIndex,
                sources: SourceKind::Directory,
                title_rule: TitleRule::StripSuffix(STATE_SUFFIX),
                flavor: Flavor::Extra,
                preprocess: Preprocess::StripTitleHeading,
                template: &catalog::STATE_TEMPLATE,
            },
            Category::Professionals => CategoryDescriptor {
                category: self,
                layout: OutputLayout::DirectoryIndex,
                sources: SourceKind::Directory,
                title_rule: TitleRule::SubstringMap(PROFESSIONAL_TITLES),
                flavor: Flavor::Extra,
                preprocess: Preprocess::StripTitleHeading,
                template: &catalog::PROFESSIONAL_TEMPLATE,
            },
            Category::Tools => CategoryDescriptor {
                category: self,
                layout: OutputLayout::DirectoryIndex,
                sources: SourceKind::Directory,
                title_rule: TitleRule::SubstringMap(TOOL_TITLES),
                flavor: Flavor::Extra,
                preprocess: Preprocess::StripTitleHeading,
                template: &catalog::TOOL_TEMPLATE,
            },
            Category::Wealth => CategoryDescriptor {
                category: self,
                layout: OutputLayout::DirectoryIndex,
                sources: SourceKind::Directory,
                title_rule: TitleRule::FilenameMarkers(WEALTH_MARKERS),
                flavor: Flavor::Extra,
                preprocess: Preprocess::StripTitleHeading,
                template: &catalog::WEALTH_TEMPLATE,
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
                format!("Unknown category: {}. Available: {}", s, known.join(", "))
            })
    }
}

/// Where a page lands inside its category directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<category>/<slug>.html`
    Flat,
    /// `<category>/<slug>/index.html`
    DirectoryIndex,
}

impl OutputLayout {
    /// Output file path relative to the public directory
    pub fn output_path(self, category: Category, slug: &str) -> PathBuf {
        let dir = PathBuf::from(category.key());
        match self {
            OutputLayout::Flat => dir.join(format!("{}.html", slug)),
            OutputLayout::DirectoryIndex => dir.join(slug).join("index.html"),
        }
    }

    /// Site-relative URL of a page
    pub fn url_path(self, category: Category, slug: &str) -> String {
        match self {
            OutputLayout::Flat => format!("/{}/{}.html", category.key(), slug),
            OutputLayout::DirectoryIndex => format!("/{}/{}/", category.key(), slug),
        }
    }
}

/// How a category discovers its source files
#[derive(Debug, Clone, Copy)]
pub enum SourceKind {
    /// Every `*.md` file in the input directory
    Directory,
    /// A fixed list of files; a missing one is a per-item failure
    Manifest(&'static [CuratedArticle]),
}

/// Everything the pipeline needs to know about a category
#[derive(Debug, Clone, Copy)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub layout: OutputLayout,
    pub sources: SourceKind,
    pub title_rule: TitleRule,
    pub flavor: Flavor,
    pub preprocess: Preprocess,
    pub template: &'static CategoryTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_category_from_str() {
        assert_eq!("states".parse::<Category>(), Ok(Category::States));
        assert_eq!(" Wealth ".parse::<Category>(), Ok(Category::Wealth));
        let err = "posts".parse::<Category>().unwrap_err();
        assert!(err.contains("learn, states, professionals, tools, wealth"));
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(
            OutputLayout::Flat.output_path(Category::Learn, "executive-order-6102"),
            Path::new("learn/executive-order-6102.html")
        );
        assert_eq!(
            OutputLayout::DirectoryIndex.output_path(Category::States, "new-york"),
            Path::new("states/new-york/index.html")
        );
        assert_eq!(
            OutputLayout::DirectoryIndex.url_path(Category::States, "new-york"),
            "/states/new-york/"
        );
    }

    #[test]
    fn test_descriptors_match_layouts() {
        for category in Category::ALL {
            let descriptor = category.descriptor();
            assert_eq!(descriptor.category, category);
            let expected = if category == Category::Learn {
                OutputLayout::Flat
            } else {
                OutputLayout::DirectoryIndex
            };
            assert_eq!(descriptor.layout, expected);
        }
    }
}
