//! Title and URL slug derivation from source filenames
//!
//! Source files follow the `NN_Descriptive_Name.md` convention. Each category
//! turns that filename into a display title and a URL slug through a
//! [`TitleRule`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ORDER_PREFIX: Regex = Regex::new(r"^\d+_").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref SEPARATOR_RUNS: Regex = Regex::new(r"[-\s]+").unwrap();
}

/// A hand-curated article entry, matched by exact filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedArticle {
    pub file: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub read_time: &'static str,
}

/// How a category turns a filename into a title
#[derive(Debug, Clone, Copy)]
pub enum TitleRule {
    /// Exact filename lookup in a curated manifest
    Curated(&'static [CuratedArticle]),
    /// Base name with a fixed trailing phrase removed
    StripSuffix(&'static str),
    /// First ordered key that is a substring of the base name
    SubstringMap(&'static [(&'static str, &'static str)]),
    /// First ordered marker that is a substring of the raw filename
    FilenameMarkers(&'static [(&'static str, &'static str)]),
}

/// Result of applying a [`TitleRule`] to a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTitle {
    pub title: String,
    pub slug: String,
    pub curated: Option<&'static CuratedArticle>,
}

impl TitleRule {
    /// Derive the display title and slug for a source filename.
    ///
    /// Never fails: an unmatched filename falls back to its naive base name.
    pub fn derive(&self, filename: &str) -> DerivedTitle {
        let base = base_name(filename);

        match *self {
            TitleRule::Curated(manifest) => {
                if let Some(entry) = manifest.iter().find(|a| a.file == filename) {
                    return DerivedTitle {
                        title: entry.title.to_string(),
                        slug: entry.slug.to_string(),
                        curated: Some(entry),
                    };
                }
                DerivedTitle::from_title(base)
            }
            TitleRule::StripSuffix(suffix) => {
                let name = base.strip_suffix(suffix).unwrap_or(base.as_str()).trim().to_string();
                DerivedTitle::from_title(name)
            }
            TitleRule::SubstringMap(table) => {
                let title = table
                    .iter()
                    .find(|(key, _)| base.contains(key))
                    .map(|(_, title)| title.to_string())
                    .unwrap_or(base);
                DerivedTitle::from_title(title)
            }
            TitleRule::FilenameMarkers(markers) => {
                let title = markers
                    .iter()
                    .find(|(marker, _)| filename.contains(marker))
                    .map(|(_, title)| title.to_string())
                    .unwrap_or(base);
                DerivedTitle::from_title(title)
            }
        }
    }
}

impl DerivedTitle {
    fn from_title(title: String) -> Self {
        let slug = slugify(&title);
        Self {
            title,
            slug,
            curated: None,
        }
    }
}

/// Strip the ordering prefix and `.md` extension, turn underscores into spaces.
///
/// `05_New_York_Bitcoin_Estate_Planning.md` -> `New York Bitcoin Estate Planning`
pub fn base_name(filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    ORDER_PREFIX.replace(stem, "").replace('_', " ")
}

/// Lower-case, URL-safe slug of a title.
///
/// Characters other than word characters, whitespace and hyphens are dropped;
/// runs of whitespace and hyphens collapse into a single `-`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lower, "");
    let joined = SEPARATOR_RUNS.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}
