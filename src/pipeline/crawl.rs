// src/pipeline/crawl.rs

//! Showcase crawling pipeline.
//!
//! Categories and listings are read sequentially; the article stage runs on
//! the executor handed in by the caller.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, CrawlOutcome, CrawlStats};
use crate::services::{
    ArticleExecutor, ArticleExtractor, CategoryDiscoverer, ListingPaginator, SeenRegistry,
};
use crate::storage::ArticleStorage;
use crate::utils::console;
use crate::utils::http::Fetcher;

const TOTAL_STEPS: usize = 3;

/// Run the three crawl stages and return the extracted articles.
///
/// Only a failure to read the showcase front page is returned as an error.
pub async fn crawl(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
    executor: &dyn ArticleExecutor,
) -> Result<CrawlOutcome> {
    let start_time = Utc::now();
    let show_progress = config.logging.show_progress;
    let seen = Arc::new(SeenRegistry::new());

    // Build every stage up front so selector errors surface before any fetch.
    let discoverer =
        CategoryDiscoverer::new(Arc::clone(&fetcher), Arc::clone(&seen), &config.selectors)?
            .with_progress(show_progress);
    let paginator =
        ListingPaginator::new(Arc::clone(&fetcher), Arc::clone(&seen), &config.selectors)?
            .with_progress(show_progress);
    let extractor =
        ArticleExtractor::new(fetcher, &config.selectors)?.with_progress(show_progress);

    console::step(1, TOTAL_STEPS, "Discovering categories");
    let categories = discoverer.discover(&config.site.base_url).await?;

    console::step(2, TOTAL_STEPS, "Walking category listings");
    let links = paginator.paginate(&categories).await;
    let link_count = links.len();

    console::step(
        3,
        TOTAL_STEPS,
        &format!("Extracting {} articles ({})", link_count, executor.name()),
    );
    let extraction = executor.execute(&extractor, links).await;

    let stats = CrawlStats {
        start_time,
        end_time: Utc::now(),
        category_count: categories.len(),
        link_count,
        article_count: extraction.articles.len(),
        skipped_count: extraction.skipped,
        failed_count: extraction.failures,
    };

    console::summary(
        "Crawl Results",
        &[
            ("Categories", stats.category_count.to_string()),
            ("Article links", stats.link_count.to_string()),
            ("Articles read", stats.article_count.to_string()),
            ("Not article pages", stats.skipped_count.to_string()),
            ("Failed", stats.failed_count.to_string()),
            ("Elapsed (s)", stats.elapsed_secs().to_string()),
        ],
    );

    Ok(CrawlOutcome {
        articles: extraction.articles,
        stats,
    })
}

/// Crawl the showcase and write the articles to storage.
pub async fn run_crawler(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
    executor: &dyn ArticleExecutor,
    storage: &dyn ArticleStorage,
) -> Result<CrawlOutcome> {
    console::header("Showcase crawler starting");

    let outcome = crawl(config, fetcher, executor).await?;
    let metadata = storage.write_articles(&outcome.articles).await?;

    log::info!(
        "Saved {} articles to {}",
        metadata.article_count,
        metadata.location
    );
    if config.logging.show_progress {
        console::sub_item(&format!("Written at: {}", metadata.timestamp));
    }
    log::info!("Done: {} articles read", outcome.articles.len());

    Ok(outcome)
}
