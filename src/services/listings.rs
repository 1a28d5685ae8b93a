// src/services/listings.rs

//! Listing pagination service.
//!
//! Walks each category's "next page" chain and collects the article cards
//! found on every page.

use std::collections::HashSet;
use std::sync::Arc;

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::{LinkItem, SelectorConfig};
use crate::services::SeenRegistry;
use crate::services::links::{TitleStyle, collect_links};
use crate::services::markup::{self, Query};
use crate::utils::console;
use crate::utils::http::Fetcher;
use crate::utils::resolve_url;

/// Article links and the next page found on one listing page.
#[derive(Debug, Default)]
struct ListingPage {
    links: Vec<LinkItem>,
    next: Option<String>,
}

/// Service for walking paginated category listings.
pub struct ListingPaginator {
    fetcher: Arc<dyn Fetcher>,
    seen: Arc<SeenRegistry>,
    cards: Query,
    next_page: Query,
    show_progress: bool,
}

impl ListingPaginator {
    /// Create a paginator using the configured card and next-page selectors.
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        seen: Arc<SeenRegistry>,
        selectors: &SelectorConfig,
    ) -> Result<Self> {
        Ok(Self {
            fetcher,
            seen,
            cards: Query::compile(&selectors.listing_card_link)?,
            next_page: Query::compile(&selectors.next_page)?,
            show_progress: true,
        })
    }

    /// Toggle per-link progress lines.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Collect article links from every category, in category order.
    pub async fn paginate(&self, categories: &[LinkItem]) -> Vec<LinkItem> {
        let mut articles = Vec::new();

        for category in categories {
            log::info!("Processing category: {}", category.title);
            let found = self.walk_category(category).await;
            log::info!("  {} article links in {}", found.len(), category.title);
            articles.extend(found);
        }

        articles
    }

    /// Follow one category's pages until there is no next page, the next
    /// page was already read, or a page fails.
    async fn walk_category(&self, category: &LinkItem) -> Vec<LinkItem> {
        let mut links = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut current = Some(category.url.clone());

        while let Some(page_url) = current.take() {
            if page_url.is_empty() || visited.contains(&page_url) {
                break;
            }

            console::separator();
            log::info!("Reading listing page: {}", page_url);

            let page = match self.read_page(&page_url).await {
                Ok(page) => page,
                Err(e) => {
                    log::warn!("Failed to read listing page {}: {}", page_url, e);
                    break;
                }
            };

            links.extend(page.links);
            visited.insert(page_url);
            current = page.next;
        }

        links
    }

    async fn read_page(&self, page_url: &str) -> Result<ListingPage> {
        let url = Url::parse(page_url)?;
        let body = self.fetcher.fetch(page_url).await?;
        Ok(self.parse_page(&body, &url))
    }

    fn parse_page(&self, body: &str, url: &Url) -> ListingPage {
        let document = Html::parse_document(body);
        let links = collect_links(
            &document,
            &self.cards,
            url,
            &self.seen,
            TitleStyle::Trimmed,
        );

        let level = console::progress_level(self.show_progress);
        for link in &links {
            log::log!(level, "Article link found: {}", link.title);
        }

        let next = self
            .next_page
            .select_one(&document)
            .and_then(|node| markup::attr(node, "href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .and_then(|href| resolve_url(url, href));

        ListingPage { links, next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http::testing::StaticFetcher;

    const HOST: &str = "https://example.com";

    fn url(path: &str) -> String {
        format!("{HOST}{path}")
    }

    fn listing(cards: &[(&str, &str)], next: Option<&str>) -> String {
        let cards: String = cards
            .iter()
            .map(|(href, title)| {
                format!(r#"<div class="post postcard"><a href="{href}">{title}</a></div>"#)
            })
            .collect();
        let next = next
            .map(|href| format!(r#"<a class="next page-numbers" href="{href}">Próxima</a>"#))
            .unwrap_or_default();
        format!("<html><body>{cards}<nav>{next}</nav></body></html>")
    }

    fn category(path: &str) -> LinkItem {
        LinkItem::new(path, url(path), url("/"))
    }

    fn paginator(fetcher: Arc<StaticFetcher>, seen: Arc<SeenRegistry>) -> ListingPaginator {
        ListingPaginator::new(fetcher, seen, &SelectorConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn follows_next_links_across_pages() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .page(
                    &url("/cat/ti/"),
                    &listing(&[("/tec/1/", "Um"), ("/tec/2/", "Dois")], Some("page/2/")),
                )
                .page(
                    &url("/cat/ti/page/2/"),
                    &listing(&[("/tec/3/", "Três")], None),
                ),
        );
        let seen = Arc::new(SeenRegistry::new());

        let links = paginator(fetcher.clone(), seen)
            .paginate(&[category("/cat/ti/")])
            .await;

        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Um", "Dois", "Três"]);
        assert_eq!(links[2].source_list_url, url("/cat/ti/page/2/"));
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[tokio::test]
    async fn stops_when_next_page_was_already_visited() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .page(
                    &url("/cat/saude/"),
                    &listing(&[("/tec/a/", "A")], Some("/cat/saude/page/2/")),
                )
                .page(
                    &url("/cat/saude/page/2/"),
                    &listing(
                        &[("/tec/b/", "B"), ("/tec/c/", "C"), ("/tec/d/", "D")],
                        Some("/cat/saude/"),
                    ),
                ),
        );

        let links = paginator(fetcher.clone(), Arc::new(SeenRegistry::new()))
            .paginate(&[category("/cat/saude/")])
            .await;

        assert_eq!(links.len(), 4);
        assert_eq!(fetcher.request_count(&url("/cat/saude/")), 1);
        assert_eq!(fetcher.request_count(&url("/cat/saude/page/2/")), 1);
    }

    #[tokio::test]
    async fn page_linking_to_itself_is_read_once() {
        let fetcher = Arc::new(StaticFetcher::new().page(
            &url("/cat/energia/"),
            &listing(
                &[("/tec/x/", "X"), ("/tec/y/", "Y"), ("/tec/z/", "Z")],
                Some("/cat/energia/"),
            ),
        ));

        let links = paginator(fetcher.clone(), Arc::new(SeenRegistry::new()))
            .paginate(&[category("/cat/energia/")])
            .await;

        assert_eq!(links.len(), 3);
        assert_eq!(fetcher.requests(), vec![url("/cat/energia/")]);
    }

    #[tokio::test]
    async fn failed_page_ends_only_its_category() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .page(
                    &url("/cat/ti/"),
                    &listing(&[("/tec/1/", "Um")], Some("/cat/ti/page/2/")),
                )
                .page(&url("/cat/agro/"), &listing(&[("/tec/9/", "Nove")], None)),
        );

        let links = paginator(fetcher, Arc::new(SeenRegistry::new()))
            .paginate(&[category("/cat/ti/"), category("/cat/agro/")])
            .await;

        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Um", "Nove"]);
    }

    #[tokio::test]
    async fn article_links_are_unique_across_categories() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .page(
                    &url("/cat/ti/"),
                    &listing(&[("/tec/1/", "Um"), ("/tec/shared/", "Shared")], None),
                )
                .page(
                    &url("/cat/agro/"),
                    &listing(&[("/tec/shared/", "Shared"), ("/tec/2/", "Dois")], None),
                ),
        );
        let seen = Arc::new(SeenRegistry::new());

        let links = paginator(fetcher, Arc::clone(&seen))
            .paginate(&[category("/cat/ti/"), category("/cat/agro/")])
            .await;

        let urls: HashSet<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(links.len(), 3);
        assert_eq!(urls.len(), 3);
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn card_titles_keep_inner_whitespace() {
        let fetcher = Arc::new(StaticFetcher::new().page(
            &url("/cat/ti/"),
            &listing(&[("/tec/1/", "  Sensor   óptico ")], None),
        ));

        let links = paginator(fetcher, Arc::new(SeenRegistry::new()))
            .paginate(&[category("/cat/ti/")])
            .await;

        assert_eq!(links[0].title, "Sensor   óptico");
    }
}
