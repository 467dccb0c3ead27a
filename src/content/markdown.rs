//! Markdown rendering with presentation classes and heading anchors
//!
//! Classes are attached while walking the pulldown-cmark event stream, so a
//! tag the renderer already decorates (a fenced block's `language-*` class, a
//! table cell's alignment style) ends up with a single merged attribute.
//! Raw HTML written into the source gets the same classes on its start tags.

use lazy_static::lazy_static;
use pulldown_cmark::{
    html, Alignment, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use regex::{Captures, Regex};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

use super::abbr::Abbreviations;
use super::title::slugify;

lazy_static! {
    static ref RAW_OPEN_TAG: Regex =
        Regex::new(r"(?i)<(table|th|td|blockquote|code)\b([^>]*)>").unwrap();
    static ref CLASS_ATTR: Regex =
        Regex::new(r#"(?i)(^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#).unwrap();
}

/// Id given to headings whose text has no slug characters
const FALLBACK_HEADING_ID: &str = "section";

/// CSS classes injected into rendered elements
#[derive(Debug)]
pub struct ClassSet {
    pub table: &'static str,
    pub th: &'static str,
    pub td: &'static str,
    pub blockquote: &'static str,
    pub code: &'static str,
    pub heading: Option<&'static str>,
}

impl ClassSet {
    fn for_tag(&self, tag: &str) -> &'static str {
        match tag {
            "table" => self.table,
            "th" => self.th,
            "td" => self.td,
            "blockquote" => self.blockquote,
            _ => self.code,
        }
    }
}

static BASIC_CLASSES: ClassSet = ClassSet {
    table: "table-auto w-full mb-8",
    th: "px-4 py-2 font-semibold text-left",
    td: "px-4 py-2",
    blockquote: "border-l-4 border-bitcoin-gold pl-4 italic my-6",
    code: "bg-gray-100 px-2 py-1 rounded text-sm",
    heading: None,
};

static EXTRA_CLASSES: ClassSet = ClassSet {
    table: "table-auto w-full mb-8 border-collapse",
    th: "border px-4 py-2 bg-gray-100 font-semibold text-left",
    td: "border px-4 py-2",
    blockquote: "border-l-4 border-bitcoin-gold pl-4 italic my-6 text-gray-700",
    code: "bg-gray-100 px-2 py-1 rounded text-sm",
    heading: Some("scroll-mt-20"),
};

/// Markdown dialect and class set used by a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Tables and fenced code; used for long-form articles
    Basic,
    /// Basic plus footnotes, definition lists, abbreviations and heading
    /// attributes; used for guides
    Extra,
}

impl Flavor {
    pub fn options(self) -> Options {
        match self {
            Flavor::Basic => Options::ENABLE_TABLES,
            Flavor::Extra => {
                Options::ENABLE_TABLES
                    | Options::ENABLE_FOOTNOTES
                    | Options::ENABLE_DEFINITION_LIST
                    | Options::ENABLE_HEADING_ATTRIBUTES
            }
        }
    }

    fn expands_abbreviations(self) -> bool {
        self == Flavor::Extra
    }

    pub fn classes(self) -> &'static ClassSet {
        match self {
            Flavor::Basic => &BASIC_CLASSES,
            Flavor::Extra => &EXTRA_CLASSES,
        }
    }
}

/// A heading collected while rendering, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

/// HTML fragment produced from one Markdown document
#[derive(Debug, Clone)]
pub struct RenderedFragment {
    pub html: String,
    pub headings: Vec<TocEntry>,
}

impl RenderedFragment {
    /// Headings of the given level, in document order
    pub fn headings_at(&self, level: u8) -> Vec<TocEntry> {
        self.headings
            .iter()
            .filter(|h| h.level == level)
            .cloned()
            .collect()
    }
}

/// Markdown renderer with class injection and heading ids
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    flavor: Flavor,
    unique_heading_ids: bool,
}

impl MarkdownRenderer {
    /// Create a renderer for the given flavor
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            unique_heading_ids: false,
        }
    }

    /// Suffix repeated heading ids with `-1`, `-2`, ...
    pub fn with_unique_heading_ids(mut self, unique: bool) -> Self {
        self.unique_heading_ids = unique;
        self
    }

    /// Render markdown to an HTML fragment
    pub fn render(&self, markdown: &str) -> RenderedFragment {
        let (markdown, abbreviations) = if self.flavor.expands_abbreviations() {
            Abbreviations::extract(markdown)
        } else {
            (Cow::Borrowed(markdown), Abbreviations::default())
        };
        let parser = Parser::new_ext(&markdown, self.flavor.options());

        let mut decorator = Decorator::new(
            self.flavor.classes(),
            self.unique_heading_ids,
            abbreviations,
        );
        for event in parser {
            decorator.push(event);
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, decorator.events.into_iter());

        RenderedFragment {
            html: html_output,
            headings: decorator.headings,
        }
    }
}

/// Heading whose events are held back until its id is known
struct PendingHeading<'a> {
    level: HeadingLevel,
    /// Explicit `{#id}` from an attribute list
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    events: Vec<Event<'a>>,
}

/// Allocates heading ids, optionally de-duplicating them
struct HeadingIds {
    unique: bool,
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    fn new(unique: bool) -> Self {
        Self {
            unique,
            seen: HashMap::new(),
        }
    }

    fn assign(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = FALLBACK_HEADING_ID.to_string();
        }
        if !self.unique {
            return base;
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        id
    }

    /// Record an explicit id so generated ones steer around it
    fn reserve(&mut self, id: &str) {
        if self.unique {
            *self.seen.entry(id.to_string()).or_insert(0) += 1;
        }
    }
}

/// Rewrites the event stream: classes on tables, quotes and code, ids on headings
struct Decorator<'a> {
    classes: &'static ClassSet,
    ids: HeadingIds,
    events: Vec<Event<'a>>,
    headings: Vec<TocEntry>,
    heading: Option<PendingHeading<'a>>,
    alignments: Vec<Alignment>,
    cell_index: usize,
    in_table_head: bool,
    in_code_block: bool,
    abbreviations: Abbreviations,
}

impl<'a> Decorator<'a> {
    fn new(classes: &'static ClassSet, unique_ids: bool, abbreviations: Abbreviations) -> Self {
        Self {
            classes,
            ids: HeadingIds::new(unique_ids),
            events: Vec::new(),
            headings: Vec::new(),
            heading: None,
            alignments: Vec::new(),
            cell_index: 0,
            in_table_head: false,
            in_code_block: false,
            abbreviations,
        }
    }

    fn push(&mut self, event: Event<'a>) {
        match event {
            Event::Start(Tag::Heading {
                level, id, classes, ..
            }) => {
                self.heading = Some(PendingHeading {
                    level,
                    id: id.map(|id| id.to_string()),
                    classes: classes.iter().map(|c| c.to_string()).collect(),
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = self.heading.take() {
                    self.close_heading(heading);
                }
            }
            Event::Start(Tag::Table(alignments)) => {
                self.alignments = alignments;
                let open = format!("<table class=\"{}\">", self.classes.table);
                self.emit(Event::Html(open.into()));
            }
            Event::Start(Tag::TableHead) => {
                self.in_table_head = true;
                self.cell_index = 0;
                self.emit(event);
            }
            Event::End(TagEnd::TableHead) => {
                self.in_table_head = false;
                self.emit(event);
            }
            Event::Start(Tag::TableRow) => {
                self.cell_index = 0;
                self.emit(event);
            }
            Event::Start(Tag::TableCell) => {
                let open = self.table_cell_open();
                self.emit(Event::Html(open.into()));
            }
            Event::End(TagEnd::TableCell) => {
                self.cell_index += 1;
                self.emit(event);
            }
            Event::Start(Tag::BlockQuote(_)) => {
                let open = format!("<blockquote class=\"{}\">\n", self.classes.blockquote);
                self.emit(Event::Html(open.into()));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                self.in_code_block = true;
                let class = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split(' ').next().unwrap_or_default();
                        if lang.is_empty() {
                            self.classes.code.to_string()
                        } else {
                            format!("language-{} {}", escape_html(lang), self.classes.code)
                        }
                    }
                    CodeBlockKind::Indented => self.classes.code.to_string(),
                };
                self.emit(Event::Html(format!("<pre><code class=\"{}\">", class).into()));
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.emit(event);
            }
            Event::Code(code) => {
                if let Some(heading) = self.heading.as_mut() {
                    heading.text.push_str(&code);
                }
                let span = format!(
                    "<code class=\"{}\">{}</code>",
                    self.classes.code,
                    escape_html(&code)
                );
                self.emit(Event::InlineHtml(span.into()));
            }
            Event::Text(text) => {
                if let Some(heading) = self.heading.as_mut() {
                    heading.text.push_str(&text);
                }
                let expanded = if self.in_code_block {
                    None
                } else {
                    self.abbreviations.expand(&text)
                };
                match expanded {
                    Some(events) => {
                        for expanded_event in events {
                            self.emit(expanded_event);
                        }
                    }
                    None => self.emit(Event::Text(text)),
                }
            }
            Event::Html(html) => {
                let html = self.class_raw_tags(html);
                self.emit(Event::Html(html));
            }
            Event::InlineHtml(html) => {
                let html = self.class_raw_tags(html);
                self.emit(Event::InlineHtml(html));
            }
            Event::SoftBreak => {
                if let Some(heading) = self.heading.as_mut() {
                    heading.text.push(' ');
                }
                self.emit(Event::HardBreak);
            }
            _ => self.emit(event),
        }
    }

    /// Route an event into the open heading, or straight to the output
    fn emit(&mut self, event: Event<'a>) {
        match self.heading.as_mut() {
            Some(heading) => heading.events.push(event),
            None => self.events.push(event),
        }
    }

    fn close_heading(&mut self, heading: PendingHeading<'a>) {
        let level = heading.level as usize;
        let id = match heading.id {
            Some(id) => {
                self.ids.reserve(&id);
                id
            }
            None => self.ids.assign(&heading.text),
        };

        let classes: Vec<&str> = self
            .classes
            .heading
            .into_iter()
            .chain(heading.classes.iter().map(String::as_str))
            .collect();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", escape_html(&classes.join(" ")))
        };

        self.events.push(Event::Html(
            format!("<h{} id=\"{}\"{}>", level, escape_html(&id), class_attr).into(),
        ));
        self.events.extend(heading.events);
        self.events.push(Event::Html(format!("</h{}>\n", level).into()));

        self.headings.push(TocEntry {
            level: level as u8,
            id,
            text: heading.text.trim().to_string(),
        });
    }

    fn table_cell_open(&self) -> String {
        let (tag, class) = if self.in_table_head {
            ("th", self.classes.th)
        } else {
            ("td", self.classes.td)
        };

        let mut open = format!("<{} class=\"{}\"", tag, class);
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => open.push_str(" style=\"text-align: left\""),
            Some(Alignment::Center) => open.push_str(" style=\"text-align: center\""),
            Some(Alignment::Right) => open.push_str(" style=\"text-align: right\""),
            _ => {}
        }
        open.push('>');
        open
    }

    /// Add the flavor's classes to table, quote and code start tags in raw HTML
    fn class_raw_tags(&self, html: CowStr<'a>) -> CowStr<'a> {
        if !RAW_OPEN_TAG.is_match(&html) {
            return html;
        }

        let classes = self.classes;
        let rewritten = RAW_OPEN_TAG.replace_all(&html, |caps: &Captures| {
            let tag = &caps[1];
            let class = classes.for_tag(&tag.to_ascii_lowercase());
            format!("<{}{}>", tag, merge_class_attr(&caps[2], class))
        });
        CowStr::from(rewritten.into_owned())
    }
}

/// Attribute text of a start tag with `class` merged into its class list
fn merge_class_attr(attrs: &str, class: &str) -> String {
    let Some(caps) = CLASS_ATTR.captures(attrs) else {
        return format!(" class=\"{}\"{}", class, attrs);
    };

    let existing = caps
        .get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map_or("", |m| m.as_str());
    let mut merged: Vec<&str> = existing.split_whitespace().collect();
    for name in class.split_whitespace() {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }

    let whole = caps.get(0).map_or(0..0, |m| m.range());
    format!(
        "{}{}class=\"{}\"{}",
        &attrs[..whole.start],
        &caps[1],
        merged.join(" "),
        &attrs[whole.end..]
    )
}

/// Simple HTML escaping
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
