// src/core/html.rs
// Thin helpers over `scraper` for the roster page, plus output escaping.

use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};

/// Parse a CSS selector, turning the parser's borrowed error into ours.
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// All text nodes below `el`, joined with a space so digits in neighbouring
/// elements never merge into one run.
pub fn visible_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

/// The element itself serialized back to markup, tags included.
pub fn outer_html(el: ElementRef<'_>) -> String {
    el.html()
}

/// Escape text for use between tags (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}
