//! Anchor-tag listing parsing
//!
//! Repository pages (Nexus raw repositories, plain web server indexes) list
//! artifacts as `<a href="...">filename</a>`. Parsing is lenient: anything
//! that does not look like a complete anchor is skipped, never reported.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Anchor with an href attribute and plain text content
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a [^>]*href="([^"]+)"[^>]*>([^<]+)</a>"#).expect("anchor regex is valid")
});

/// One anchor found in a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Raw text between the opening and closing tag, entities untouched
    pub text: String,

    /// Value of the href attribute
    pub href: String,
}

/// Extract anchors from `html` in document order
pub fn parse_listing(html: &[u8]) -> Vec<ListingEntry> {
    ANCHOR_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let href = caps.get(1)?;
            let text = caps.get(2)?;
            Some(ListingEntry {
                text: String::from_utf8_lossy(text.as_bytes()).into_owned(),
                href: String::from_utf8_lossy(href.as_bytes()).into_owned(),
            })
        })
        .collect()
}
