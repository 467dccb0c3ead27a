//! Content module - source discovery, title derivation and Markdown rendering

mod abbr;
mod item;
pub mod loader;
pub mod markdown;
pub mod preprocess;
pub mod title;

pub(crate) use item::file_name;
pub use item::ContentItem;
pub use loader::{ContentLoader, SourceError};
pub use markdown::{Flavor, MarkdownRenderer, RenderedFragment, TocEntry};
pub use preprocess::Preprocess;
pub use title::{slugify, DerivedTitle, TitleRule};
