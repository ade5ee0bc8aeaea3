//! Catalog result page parsing.
//!
//! The catalog renders search results as an HTML table; the version column is a
//! `<td>` whose class attribute is exactly [`VERSION_CELL_CLASS`]. That markup is
//! the whole contract: if it changes, extraction finds nothing.

use apklock_types::ids::VERSION_CELL_CLASS;
use regex::Regex;
use std::sync::OnceLock;

fn version_cell() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            let class = regex::escape(VERSION_CELL_CLASS);
            Regex::new(&format!(
                r#"(?is)<td\b(?:[^>]*?\s)?class\s*=\s*(?:"{class}"[^>]*|'{class}'[^>]*|{class}(?:\s[^>]*)?)>(.*?)</td\s*>"#
            ))
            .ok()
        })
        .as_ref()
}

fn inner_tag() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<[^>]*>").ok()).as_ref()
}

/// Text content of the first version cell, untrimmed.
///
/// Nested tags (links, emphasis) are dropped and the common character
/// entities decoded. `None` when the page has no version cell.
pub fn extract_version_cell(html: &str) -> Option<String> {
    let caps = version_cell()?.captures(html)?;
    let inner = caps.get(1)?.as_str();
    let text = match inner_tag() {
        Some(tag) => tag.replace_all(inner, ""),
        None => inner.into(),
    };
    Some(decode_entities(&text))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
