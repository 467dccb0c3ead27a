//! Abbreviation definitions (`*[HTML]: Hyper Text Markup Language`)

use lazy_static::lazy_static;
use pulldown_cmark::{CowStr, Event};
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

use super::markdown::escape_html;

lazy_static! {
    static ref DEFINITION: Regex =
        Regex::new(r"(?m)^\*\[([^\]]+)\]:[ \t]*(.*?)[ \t]*(?:\r?\n|\z)").unwrap();
}

/// Abbreviations defined by a document, applied to its body text
#[derive(Debug, Default)]
pub(crate) struct Abbreviations {
    titles: HashMap<String, String>,
    pattern: Option<Regex>,
}

impl Abbreviations {
    /// Collect the definition lines and return the document without them.
    /// A later definition of the same abbreviation replaces an earlier one.
    pub(crate) fn extract(markdown: &str) -> (Cow<'_, str>, Self) {
        let mut titles = HashMap::new();
        for caps in DEFINITION.captures_iter(markdown) {
            titles.insert(caps[1].trim().to_string(), caps[2].to_string());
        }
        titles.retain(|abbr: &String, _| !abbr.is_empty());

        if titles.is_empty() {
            return (Cow::Borrowed(markdown), Self::default());
        }

        let mut keys: Vec<&String> = titles.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|abbr| regex::escape(abbr))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation)).ok();

        let stripped = DEFINITION.replace_all(markdown, "");
        (Cow::Owned(stripped.into_owned()), Self { titles, pattern })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Split `text` around defined abbreviations, or `None` when none occur
    pub(crate) fn expand<'a>(&self, text: &str) -> Option<Vec<Event<'a>>> {
        let pattern = self.pattern.as_ref()?;
        if !pattern.is_match(text) {
            return None;
        }

        let mut events = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                events.push(Event::Text(CowStr::from(text[last..m.start()].to_string())));
            }
            let title = self.titles.get(m.as_str()).map(String::as_str).unwrap_or_default();
            events.push(Event::InlineHtml(CowStr::from(format!(
                "<abbr title=\"{}\">{}</abbr>",
                escape_html(title),
                escape_html(m.as_str())
            ))));
            last = m.end();
        }
        if last < text.len() {
            events.push(Event::Text(CowStr::from(text[last..].to_string())));
        }
        Some(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_definitions() {
        let md = "*[HTML]: Hyper Text Markup Language\nHTML is great.\n*[W3C]:  World Wide Web Consortium  \n";
        let (body, abbrs) = Abbreviations::extract(md);
        assert_eq!(body, "HTML is great.\n");
        assert_eq!(abbrs.titles["HTML"], "Hyper Text Markup Language");
        assert_eq!(abbrs.titles["W3C"], "World Wide Web Consortium");
    }

    #[test]
    fn test_no_definitions_borrows() {
        let (body, abbrs) = Abbreviations::extract("Plain *[text] here\n");
        assert!(matches!(body, Cow::Borrowed(_)));
        assert!(abbrs.is_empty());
    }

    #[test]
    fn test_expand_whole_words_only() {
        let (_, abbrs) = Abbreviations::extract("*[IRA]: Individual Retirement Account\n");
        assert!(abbrs.expand("IRAS and PIRATE").is_none());

        let events = abbrs.expand("Roth IRA rules").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Text("Roth ".into()),
                Event::InlineHtml(
                    "<abbr title=\"Individual Retirement Account\">IRA</abbr>".into()
                ),
                Event::Text(" rules".into()),
            ]
        );
    }

    #[test]
    fn test_longest_abbreviation_wins() {
        let (_, abbrs) =
            Abbreviations::extract("*[BTC]: Bitcoin\n*[BTC ETF]: Bitcoin exchange-traded fund\n");
        let events = abbrs.expand("A BTC ETF").unwrap();
        assert_eq!(
            events[1],
            Event::InlineHtml("<abbr title=\"Bitcoin exchange-traded fund\">BTC ETF</abbr>".into())
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let (_, abbrs) = Abbreviations::extract("*[Q&A]: \"Questions\" & <answers>\n");
        let events = abbrs.expand("Q&A").unwrap();
        assert_eq!(
            events,
            vec![Event::InlineHtml(
                "<abbr title=\"&quot;Questions&quot; &amp; &lt;answers&gt;\">Q&amp;A</abbr>".into()
            )]
        );
    }
}
