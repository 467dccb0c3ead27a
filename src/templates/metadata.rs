//! Per-page metadata derived from a content item and its category copy

use serde::Serialize;
use serde_json::json;

use crate::category::{fill, CategoryTemplate};
use crate::config::SiteConfig;
use crate::content::ContentItem;

/// Everything page-specific the layouts need besides the HTML fragment
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    /// `<title>` element text
    pub title: String,
    pub og_title: String,
    /// Visible `<h1>` text
    pub heading: String,
    /// State name, tier title or guide title
    pub display_name: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub og_description: String,
    pub read_time: Option<String>,
    pub canonical_url: String,
    pub cta_heading: String,
    pub cta_body: String,
    /// Pretty-printed JSON-LD, safe to embed in a `<script>` element
    pub schema_json: Option<String>,
}

impl PageMetadata {
    /// Build the metadata for one item
    pub fn build(item: &ContentItem, template: &CategoryTemplate, site: &SiteConfig) -> Self {
        let name = item.title.as_str();
        let layout = item.category.descriptor().layout;
        let canonical_url = site.full_url(&layout.url_path(item.category, &item.slug));

        let description = match (template.description, item.curated) {
            (Some(pattern), _) => fill(pattern, name),
            (None, Some(article)) => article.description.to_string(),
            (None, None) => format!("In-depth guide to {} from {}.", name, site.title),
        };
        let og_description = template
            .og_description
            .map(|pattern| fill(pattern, name))
            .unwrap_or_else(|| description.clone());

        let read_time = if template.badge.is_some() {
            None
        } else if let Some(read_time) = template.read_time {
            Some(read_time.to_string())
        } else if let Some(article) = item.curated {
            Some(article.read_time.to_string())
        } else {
            Some(item.estimated_read_time())
        };

        let og_title = fill(template.document_title, name);
        let schema_json = template.schema.as_ref().map(|schema| {
            schema_script(json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": fill(schema.headline, name),
                "description": fill(schema.description, name),
                "author": {
                    "@type": "Organization",
                    "name": site.title,
                },
                "publisher": {
                    "@type": "Organization",
                    "name": site.title,
                    "logo": {
                        "@type": "ImageObject",
                        "url": site.full_url("/images/logo.png"),
                    },
                },
                "datePublished": schema.date_published,
                "dateModified": schema.date_published,
                "mainEntityOfPage": {
                    "@type": "WebPage",
                    "@id": canonical_url,
                },
            }))
        });

        Self {
            title: format!("{}{}", og_title, template.title_suffix),
            og_title,
            heading: fill(template.heading, name),
            display_name: name.to_string(),
            subtitle: template.subtitle.map(|pattern| fill(pattern, name)),
            description,
            og_description,
            read_time,
            canonical_url,
            cta_heading: fill(template.cta.heading, name),
            cta_body: fill(template.cta.body, name),
            schema_json,
        }
    }
}

/// Pretty-print JSON-LD so that no value can close the enclosing script
fn schema_script(value: serde_json::Value) -> String {
    format!("{:#}", value).replace("</", "<\\/")
}
