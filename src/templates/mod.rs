//! Page layouts using the Tera template engine
//!
//! The layouts are embedded directly in the binary. Every value rendered
//! through them is HTML-escaped; only the Markdown fragment and the
//! pre-serialized JSON-LD are inserted raw.

mod metadata;

pub use metadata::PageMetadata;

use serde::Serialize;
use tera::{Context, Tera};

use crate::category::CategoryTemplate;
use crate::config::SiteConfig;
use crate::content::RenderedFragment;

/// Site-wide values available to every layout as `site`
#[derive(Debug, Serialize)]
struct SiteData<'a> {
    title: &'a str,
    url: &'a str,
}

/// Template renderer with the embedded layouts
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all layouts loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("base.html", include_str!("site/base.html")),
            ("article.html", include_str!("site/article.html")),
            ("guide.html", include_str!("site/guide.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("site/partials/head.html"),
            ),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            ("partials/cta.html", include_str!("site/partials/cta.html")),
            (
                "partials/related.html",
                include_str!("site/partials/related.html"),
            ),
            (
                "partials/byline.html",
                include_str!("site/partials/byline.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a complete page for one item.
    ///
    /// `template` picks the layout and supplies the static copy, `page`
    /// carries the per-item values and `fragment` becomes the body.
    pub fn assemble(
        &self,
        template: &CategoryTemplate,
        page: &PageMetadata,
        fragment: &RenderedFragment,
        site: &SiteConfig,
    ) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert(
            "site",
            &SiteData {
                title: &site.title,
                url: &site.url,
            },
        );
        context.insert("chrome", template);
        context.insert("page", page);
        context.insert("content", &fragment.html);
        context.insert("toc", &fragment.headings_at(2));

        self.tera.render(template.layout, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::content::{ContentItem, MarkdownRenderer};
    use std::path::PathBuf;

    fn render_page(category: Category, filename: &str, title: Option<&str>, markdown: &str) -> String {
        render_page_for(&SiteConfig::default(), category, filename, title, markdown)
    }

    fn render_page_for(
        site: &SiteConfig,
        category: Category,
        filename: &str,
        title: Option<&str>,
        markdown: &str,
    ) -> String {
        let descriptor = category.descriptor();
        let derived = descriptor.title_rule.derive(filename);
        let item = ContentItem {
            source_path: PathBuf::from(filename),
            raw_markdown: markdown.to_string(),
            title: title.map(str::to_string).unwrap_or(derived.title),
            slug: derived.slug,
            category,
            curated: derived.curated,
        };
        let fragment = MarkdownRenderer::new(descriptor.flavor).render(&item.raw_markdown);
        let page = PageMetadata::build(&item, descriptor.template, site);

        TemplateRenderer::new()
            .unwrap()
            .assemble(descriptor.template, &page, &fragment, site)
            .unwrap()
    }

    #[test]
    fn test_state_page() {
        let html = render_page(
            Category::States,
            "05_New_York_Bitcoin_Estate_Planning.md",
            None,
            "## Overview\n\nText.\n\n## Tax Rules\n\nMore.\n",
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Bitcoin Estate Planning in New York - Complete Guide | Firm6102</title>"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains(r##"<a href="#overview" class="block py-1 text-gray-600 hover:text-bitcoin-gold toc-link">Overview</a>"##));
        assert!(html.contains("15 min read"));
        assert!(html.contains("Explore Other State Guides"));
    }

    #[test]
    fn test_toc_in_document_order() {
        let html = render_page(
            Category::Wealth,
            "10_Retirement_Bitcoin_Estate_Planning.md",
            None,
            "## Zeta\n\n### Skipped\n\n## Alpha\n",
        );

        let zeta = html.find(r##"href="#zeta""##).unwrap();
        let alpha = html.find(r##"href="#alpha""##).unwrap();
        assert!(zeta < alpha);
        assert!(!html.contains(r##"href="#skipped""##));
    }

    #[test]
    fn test_article_page() {
        let html = render_page(
            Category::Learn,
            "02_Executive_Order_6102_Bitcoin_Lessons.md",
            None,
            "## History\n\nGold.\n",
        );

        assert!(html.contains("35 min read"));
        assert!(html.contains("COMPREHENSIVE GUIDE"));
        assert!(!html.contains("application/ld+json"));
        assert!(!html.contains("table-of-contents"));
        assert!(html.contains(r#"<h2 id="history">History</h2>"#));
    }

    #[test]
    fn test_tool_page_chrome() {
        let html = render_page(
            Category::Tools,
            "01_Bitcoin_Estate_Planning_Assessment_Checklist.md",
            None,
            "## Step One\n",
        );

        assert!(html.contains("Professional Grade"));
        assert!(html.contains("Quick Actions"));
        assert!(html.contains(".checklist-item"));
        assert!(!html.contains(" read</span>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_page(
            Category::Learn,
            "09_Notes.md",
            Some("<script>alert(1)</script>"),
            "Body.\n",
        );

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }

    #[test]
    fn test_canonical_url_is_escaped() {
        let site = SiteConfig {
            url: r#"https://firm6102.com/"><script>x</script>"#.to_string(),
            ..SiteConfig::default()
        };
        let html = render_page_for(
            &site,
            Category::Learn,
            "09_Notes.md",
            None,
            "Body.\n",
        );

        assert!(!html.contains(r#""><script>x"#));
        assert!(html.contains(r#"<link rel="canonical" href="https:&#x2F;&#x2F;firm6102.com&#x2F;&quot;&gt;&lt;script&gt;"#));
    }

    #[test]
    fn test_fragment_is_not_escaped() {
        let html = render_page(
            Category::States,
            "01_Texas.md",
            None,
            "| A |\n|---|\n| 1 |\n",
        );

        assert!(html.contains(r#"<table class="table-auto w-full mb-8 border-collapse">"#));
    }
}
