// src/services/categories.rs

//! Category discovery service.
//!
//! Reads the showcase front page and turns every category heading link into a
//! [`LinkItem`].

use std::sync::Arc;

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::{LinkItem, SelectorConfig};
use crate::services::links::{TitleStyle, collect_links};
use crate::services::markup::Query;
use crate::services::SeenRegistry;
use crate::utils::console;
use crate::utils::http::Fetcher;

/// Service for discovering category pages.
pub struct CategoryDiscoverer {
    fetcher: Arc<dyn Fetcher>,
    seen: Arc<SeenRegistry>,
    links: Query,
    show_progress: bool,
}

impl CategoryDiscoverer {
    /// Create a discoverer using the configured category selector.
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        seen: Arc<SeenRegistry>,
        selectors: &SelectorConfig,
    ) -> Result<Self> {
        Ok(Self {
            fetcher,
            seen,
            links: Query::compile(&selectors.category_link)?,
            show_progress: true,
        })
    }

    /// Toggle per-category progress lines.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch the front page and return the categories not seen before.
    ///
    /// A front page that cannot be fetched is an error: without categories
    /// there is nothing left to crawl.
    pub async fn discover(&self, base_url: &str) -> Result<Vec<LinkItem>> {
        log::info!("Reading showcase front page: {}", base_url);

        let base = Url::parse(base_url)?;
        let body = self.fetcher.fetch(base.as_str()).await?;
        let categories = self.parse(&body, &base);

        log::info!("Found {} categories", categories.len());
        Ok(categories)
    }

    fn parse(&self, body: &str, base: &Url) -> Vec<LinkItem> {
        let document = Html::parse_document(body);
        let categories = collect_links(
            &document,
            &self.links,
            base,
            &self.seen,
            TitleStyle::Collapsed,
        );

        let level = console::progress_level(self.show_progress);
        for category in &categories {
            log::log!(level, "Category found: {}", category.title);
        }
        categories
    }
}
