//! Typed page copy for a category
//!
//! Patterns may contain `{name}`, replaced with the page's display name
//! (state name, tier title, guide title) when metadata is built.

use serde::Serialize;

/// A labelled link
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// A footer column: heading plus links
#[derive(Debug, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

/// Card in the related-guides section
#[derive(Debug, Serialize)]
pub struct RelatedCard {
    pub url: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RelatedSection {
    pub heading: &'static str,
    pub cards: &'static [RelatedCard],
    pub view_all: Option<NavLink>,
}

/// Closing call-to-action box
#[derive(Debug, Serialize)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub primary: NavLink,
    pub secondary: Option<NavLink>,
}

/// Middle crumb between "Home" and the page title
#[derive(Debug, Serialize)]
pub struct Breadcrumb {
    pub label: &'static str,
    pub url: &'static str,
}

/// Copy for the schema.org Article block
#[derive(Debug, Serialize)]
pub struct SchemaCopy {
    pub headline: &'static str,
    pub description: &'static str,
    pub date_published: &'static str,
}

/// Everything static about a category's page
#[derive(Debug, Serialize)]
pub struct CategoryTemplate {
    /// Tera template used to render the page
    pub layout: &'static str,
    pub kicker: &'static str,
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    /// `og:title`; the `<title>` element appends `title_suffix`
    pub document_title: &'static str,
    pub title_suffix: &'static str,
    /// Meta description; `None` uses the curated or estimated description
    pub description: Option<&'static str>,
    /// Open Graph description; `None` repeats the meta description
    pub og_description: Option<&'static str>,
    pub schema: Option<SchemaCopy>,
    /// Reading time shown in the byline; `None` means estimate it
    pub read_time: Option<&'static str>,
    /// Shown in place of the reading time
    pub badge: Option<&'static str>,
    pub last_updated: &'static str,
    pub breadcrumb: Option<Breadcrumb>,
    pub banner: Option<&'static str>,
    pub quick_actions: &'static [NavLink],
    pub cta: CallToAction,
    pub related: RelatedSection,
    pub nav: &'static [NavLink],
    pub footer: &'static [FooterColumn],
    pub checklist_styles: bool,
}

/// Substitute the display name into a pattern
pub fn fill(pattern: &str, name: &str) -> String {
    pattern.replace("{name}", name)
}
