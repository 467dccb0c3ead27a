//! Source clean-up applied before Markdown rendering

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref TITLE_HEADING: Regex = Regex::new(r"\A#[^#].*?\n").unwrap();
}

const TOC_MARKER: &str = "## Table of Contents";

/// Preprocessing step a category applies to its raw Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocess {
    /// Drop a leading `# Title` line; the page header already shows the title
    StripTitleHeading,
    /// Drop hand-written `## Table of Contents` sections
    StripTableOfContents,
}

impl Preprocess {
    pub fn apply<'a>(&self, markdown: &'a str) -> Cow<'a, str> {
        match self {
            Preprocess::StripTitleHeading => strip_title_heading(markdown),
            Preprocess::StripTableOfContents => strip_table_of_contents(markdown),
        }
    }
}

/// Remove the first line when the document opens with a level-1 heading.
pub fn strip_title_heading(markdown: &str) -> Cow<'_, str> {
    TITLE_HEADING.replace(markdown, "")
}

/// Remove every `## Table of Contents` block up to the next `##`.
///
/// A marker with no later `##` is left in place.
pub fn strip_table_of_contents(markdown: &str) -> Cow<'_, str> {
    let mut output = String::new();
    let mut rest = markdown;
    let mut stripped = false;

    while let Some(start) = rest.find(TOC_MARKER) {
        let after = &rest[start + TOC_MARKER.len()..];
        let Some(end) = after.find("##") else {
            break;
        };
        output.push_str(&rest[..start]);
        rest = &after[end..];
        stripped = true;
    }

    if !stripped {
        return Cow::Borrowed(markdown);
    }
    output.push_str(rest);
    Cow::Owned(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_title_heading() {
        let md = "# Bitcoin Estate Planning in Texas\n\n## Overview\nText\n";
        assert_eq!(strip_title_heading(md), "\n## Overview\nText\n");
    }

    #[test]
    fn test_strip_title_heading_only_at_start() {
        let md = "Intro\n# Not a title\n";
        assert_eq!(strip_title_heading(md), md);

        let md = "## Section\nBody\n";
        assert_eq!(strip_title_heading(md), md);
    }

    #[test]
    fn test_strip_title_heading_removes_only_first() {
        let md = "# One\n# Two\n";
        assert_eq!(strip_title_heading(md), "# Two\n");
    }

    #[test]
    fn test_strip_table_of_contents() {
        let md = "Intro\n\n## Table of Contents\n- [A](#a)\n- [B](#b)\n\n## A\nText\n";
        assert_eq!(strip_table_of_contents(md), "Intro\n\n## A\nText\n");
    }

    #[test]
    fn test_strip_table_of_contents_without_following_section() {
        let md = "Intro\n\n## Table of Contents\n- [A](#a)\n";
        assert!(matches!(strip_table_of_contents(md), Cow::Borrowed(_)));
        assert_eq!(strip_table_of_contents(md), md);
    }

    #[test]
    fn test_strip_table_of_contents_multiple_blocks() {
        let md = "## Table of Contents\nx\n## A\n## Table of Contents\ny\n## B\n";
        assert_eq!(strip_table_of_contents(md), "## A\n## B\n");
    }

    #[test]
    fn test_preprocess_apply() {
        let md = "# Title\nBody\n";
        assert_eq!(Preprocess::StripTitleHeading.apply(md), "Body\n");
        assert_eq!(Preprocess::StripTableOfContents.apply(md), md);
    }
}
