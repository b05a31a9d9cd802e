//! Front-matter extraction.
//!
//! A document may open with a block delimited by lines of exactly three
//! hyphens:
//!
//! ```text
//! ---
//! title: "Getting started"
//! difficulty: beginner
//! ---
//! # Body
//! ```
//!
//! Each line inside the block is split on its first colon. Keys and values
//! are trimmed, and a value wrapped in double quotes loses the quotes.
//! Lines without a colon, or with nothing before it, are skipped. Extraction
//! never fails: a document without a well-formed block simply has no
//! metadata.

use std::sync::LazyLock;

use regex::Regex;

use crate::metadata::Metadata;

const BOM: char = '\u{feff}';

/// Opening line, optional block body, closing line.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("front-matter pattern is valid")
});

/// Parse the front-matter block, or `None` when the document has none.
///
/// ```
/// use docsite_content::frontmatter::parse;
///
/// let meta = parse("---\ntitle: A\n---\nbody").unwrap();
/// assert_eq!(meta.title(), Some("A"));
/// assert!(parse("# no block").is_none());
/// ```
pub fn parse(text: &str) -> Option<Metadata> {
    split(text).0
}

/// Extract metadata, treating a missing block as empty metadata.
pub fn extract(text: &str) -> Metadata {
    parse(text).unwrap_or_default()
}

/// Split a document into its metadata and the body after the block.
///
/// Without a block the whole text (minus any BOM) is the body.
pub fn split(text: &str) -> (Option<Metadata>, &str) {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    match BLOCK.captures(text) {
        Some(caps) => {
            let block = caps.get(1).map_or("", |m| m.as_str());
            let end = caps.get(0).map_or(0, |m| m.end());
            (Some(parse_block(block)), &text[end..])
        }
        None => (None, text),
    }
}

fn parse_block(block: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        metadata.insert(key, unquote(value.trim()));
    }
    metadata
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
