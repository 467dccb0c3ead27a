use std::fs;
use std::path::Path;

use guidegen::category::ARTICLES;
use guidegen::commands::list;
use guidegen::generator::ItemError;
use guidegen::{Category, Site, SiteConfig};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A site with four of the five articles and one page in every other category
fn fixture(dir: &Path) -> Site {
    for article in &ARTICLES[1..] {
        write(
            &dir.join("content/learn").join(article.file),
            "# Title\n\n## Table of Contents\n\n- [History](#history)\n\n## History\n\nGold was seized in 1933.\n",
        );
    }
    write(
        &dir.join("content/states/05_New_York_Bitcoin_Estate_Planning.md"),
        "# New York Bitcoin Estate Planning\n\n## My Header!\n\n```rust\nfn main() {}\n```\n",
    );
    write(
        &dir.join("content/professionals/01_Estate_Planning_Attorney_Bitcoin_Guide.md"),
        "# Guide\n\n## Practice\n",
    );
    write(
        &dir.join("content/tools/01_Bitcoin_Estate_Planning_Assessment_Checklist.md"),
        "# Checklist\n\n## Step One\n",
    );
    write(
        &dir.join("content/wealth/06_Bitcoin_Estate_Planning_10M_Plus.md"),
        "# Plan\n\n## Dynasty Trusts\n",
    );

    Site::with_config(dir, SiteConfig::default())
}

#[test]
fn test_full_build() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());

    let summary = site.generate(&[]).unwrap();
    assert_eq!(summary.written(), 8);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.to_string(), "8 pages written, 1 failed");

    let learn = &summary.reports[0];
    assert_eq!(learn.category, Category::Learn);
    assert_eq!(learn.failures.len(), 1);
    assert_eq!(learn.failures[0].filename, ARTICLES[0].file);
    assert!(matches!(learn.failures[0].error, ItemError::NotFound { .. }));

    let public = &site.public_dir;
    for path in [
        "learn/executive-order-6102.html",
        "states/new-york/index.html",
        "professionals/estate-planning-attorney-bitcoin-guide/index.html",
        "tools/bitcoin-estate-planning-assessment-checklist/index.html",
        "wealth/bitcoin-estate-planning-for-10m/index.html",
    ] {
        assert!(public.join(path).is_file(), "missing {}", path);
    }
}

#[test]
fn test_article_page() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());
    site.generate(&[Category::Learn]).unwrap();

    let html = fs::read_to_string(site.public_dir.join("learn/executive-order-6102.html")).unwrap();
    assert!(html.contains("<title>Executive Order 6102: Bitcoin Lessons from Gold Confiscation - Firm6102</title>"));
    assert!(html.contains(r#"<h2 id="history">History</h2>"#));
    assert!(!html.contains("Table of Contents"));
    assert!(html.contains("35 min read"));
}

#[test]
fn test_state_page() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());
    site.generate(&[Category::States]).unwrap();

    let html = fs::read_to_string(site.public_dir.join("states/new-york/index.html")).unwrap();
    assert!(html.contains(r#"<h2 id="my-header" class="scroll-mt-20">My Header!</h2>"#));
    assert!(html.contains(r#"<code class="language-rust bg-gray-100 px-2 py-1 rounded text-sm">"#));
    assert!(html.contains(r##"href="#my-header""##));
    assert!(!html.contains(r#"id="new-york-bitcoin-estate-planning""#));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());

    let first = site.generate(&[]).unwrap();
    let snapshot: Vec<Vec<u8>> = first
        .reports
        .iter()
        .flat_map(|r| r.written.iter())
        .map(|page| fs::read(&page.output).unwrap())
        .collect();

    let second = site.generate(&[]).unwrap();
    let rerun: Vec<Vec<u8>> = second
        .reports
        .iter()
        .flat_map(|r| r.written.iter())
        .map(|page| fs::read(&page.output).unwrap())
        .collect();

    assert_eq!(snapshot, rerun);
}

#[test]
fn test_list_matches_generate() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());

    for category in [Category::States, Category::Wealth, Category::Tools] {
        let listed: Vec<_> = list::entries(&site, category)
            .unwrap()
            .into_iter()
            .map(|entry| entry.output)
            .collect();

        let summary = site.generate(&[category]).unwrap();
        let written: Vec<_> = summary.reports[0]
            .written
            .iter()
            .map(|page| page.output.clone())
            .collect();

        assert_eq!(listed, written);
    }
}

#[test]
fn test_clean_after_generate() {
    let dir = tempfile::tempdir().unwrap();
    let site = fixture(dir.path());

    site.generate(&[]).unwrap();
    assert!(site.public_dir.exists());

    site.clean().unwrap();
    assert!(!site.public_dir.exists());
}
