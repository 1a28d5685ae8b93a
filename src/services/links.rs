//! Link collection shared by the category and listing stages.

use scraper::Html;
use url::Url;

use crate::models::LinkItem;
use crate::services::SeenRegistry;
use crate::services::markup::{self, Query};
use crate::utils::{collapse_whitespace, resolve_url};

/// How anchor text becomes a link title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// Trimmed text fragments, inner whitespace kept
    Trimmed,
    /// Trimmed and with whitespace runs collapsed to one space
    Collapsed,
}

/// Collect the links matched by `query` on the page at `page_url`.
///
/// Anchors without visible text or with an unresolvable href are ignored.
/// A link is emitted only if its absolute URL enters `seen` for the first
/// time.
pub fn collect_links(
    document: &Html,
    query: &Query,
    page_url: &Url,
    seen: &SeenRegistry,
    style: TitleStyle,
) -> Vec<LinkItem> {
    let mut links = Vec::new();

    for node in query.select(document) {
        let title = markup::text(node);
        if title.is_empty() {
            continue;
        }

        let Some(href) = markup::attr(node, "href") else {
            continue;
        };
        let Some(url) = resolve_url(page_url, href) else {
            log::debug!("Ignoring unresolvable href '{}' on {}", href, page_url);
            continue;
        };

        let title = match style {
            TitleStyle::Trimmed => title,
            TitleStyle::Collapsed => collapse_whitespace(&title),
        };

        if seen.insert_if_absent(&url) {
            links.push(LinkItem::new(title, url, page_url.as_str()));
        }
    }

    links
}
