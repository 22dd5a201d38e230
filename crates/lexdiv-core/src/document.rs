//! Documents: a filename plus the text to analyze.
//!
//! Text extraction from binary formats happens upstream. This module only
//! assembles text that is already in hand: page-by-page extractions are
//! joined with line breaks, and Markdown sources are flattened to their
//! visible words.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One input to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// Name reported in the output row.
    pub filename: String,
    /// Full document text.
    pub text: String,
}

impl Document {
    /// A document from text that needs no further processing.
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Join per-page extractions with `\n`, skipping pages that produced no text.
    pub fn from_pages<I, S>(filename: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let text = pages
            .into_iter()
            .flatten()
            .filter(|page| !page.as_ref().is_empty())
            .fold(String::new(), |mut acc, page| {
                if !acc.is_empty() {
                    acc.push('\n');
                }
                acc.push_str(page.as_ref());
                acc
            });
        Self::new(filename, text)
    }

    /// A document from Markdown source, reduced to its readable text.
    pub fn from_markdown(filename: impl Into<String>, source: &str) -> Self {
        Self::new(filename, markdown_to_text(source))
    }

    /// Whether the document has no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Flatten Markdown to the words a reader sees.
///
/// Headings, paragraphs, list items, quotes, and table cells are kept, one
/// block per line. Code (fenced, indented, and inline), raw HTML, image
/// targets, link targets, and YAML frontmatter are dropped.
#[tracing::instrument(skip_all, fields(input_len = source.len()))]
pub fn markdown_to_text(source: &str) -> String {
    let body = strip_frontmatter(source);
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;

    let mut out = String::with_capacity(body.len());
    let mut in_code = false;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code = true,
            Event::End(TagEnd::CodeBlock) => in_code = false,
            Event::Text(text) if !in_code => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::TableCell) => out.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => end_line(&mut out),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn end_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Body of `text` after a leading `---` delimited frontmatter block.
fn strip_frontmatter(text: &str) -> &str {
    let Some(rest) = text.trim_start().strip_prefix("---") else {
        return text;
    };
    match rest.find("\n---") {
        Some(close) => {
            let after = &rest[close + 4..];
            after.strip_prefix('\n').unwrap_or(after)
        }
        None => text,
    }
}
