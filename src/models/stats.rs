//! Crawl run outcome and statistics.

use chrono::{DateTime, Utc};

use crate::models::ArticleRecord;

/// Result of the article extraction stage.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    /// Successfully extracted records
    pub articles: Vec<ArticleRecord>,

    /// Pages that did not match the article template
    pub skipped: usize,

    /// Pages that could not be fetched or processed
    pub failures: usize,
}

impl ExtractionOutcome {
    /// Number of article links that were attempted.
    pub fn attempted(&self) -> usize {
        self.articles.len() + self.skipped + self.failures
    }
}

/// Summary statistics for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category_count: usize,
    pub link_count: usize,
    pub article_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
}

impl CrawlStats {
    /// Elapsed wall time of the run in seconds.
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// Everything a crawl run produced.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub articles: Vec<ArticleRecord>,
    pub stats: CrawlStats,
}
