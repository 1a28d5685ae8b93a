//! Utility functions and helpers.

pub mod http;
pub mod console;

use url::Url;

/// Resolve a potentially relative href against a base URL.
///
/// Returns `None` when the href cannot be turned into an absolute URL.
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|u| u.to_string())
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every occurrence of each label, then trim.
pub fn strip_labels(text: &str, labels: &[String]) -> String {
    labels
        .iter()
        .fold(text.to_string(), |acc, label| acc.replace(label.as_str(), ""))
        .trim()
        .to_string()
}
