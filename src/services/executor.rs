// src/services/executor.rs

//! Article stage executors.
//!
//! The article stage is the only stage that runs concurrently. Both executors
//! share the same contract: take every article link, run the extractor on each
//! one, and collect what succeeded. A failed or skipped article never stops
//! the others.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{ArticleRecord, ExtractionOutcome, LinkItem};
use crate::services::ArticleExtractor;
use crate::utils::console;

/// Runs the article extractor over a batch of links.
#[async_trait]
pub trait ArticleExecutor: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &'static str;

    /// Extract every item and collect the outcome.
    async fn execute(&self, extractor: &ArticleExtractor, items: Vec<LinkItem>)
    -> ExtractionOutcome;
}

/// Extracts articles one at a time, in input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

#[async_trait]
impl ArticleExecutor for SequentialExecutor {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn execute(
        &self,
        extractor: &ArticleExtractor,
        items: Vec<LinkItem>,
    ) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();
        let level = console::progress_level(extractor.show_progress());
        for item in items {
            let result = extractor.extract(&item).await;
            record(&mut outcome, level, &item, result);
        }
        outcome
    }
}

/// Extracts articles on a bounded number of concurrent workers.
///
/// Records are collected in completion order.
#[derive(Debug, Clone, Copy)]
pub struct PooledExecutor {
    workers: usize,
}

impl PooledExecutor {
    /// Create a pool with `workers` concurrent extractions (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

#[async_trait]
impl ArticleExecutor for PooledExecutor {
    fn name(&self) -> &'static str {
        "pooled"
    }

    async fn execute(
        &self,
        extractor: &ArticleExtractor,
        items: Vec<LinkItem>,
    ) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();
        let level = console::progress_level(extractor.show_progress());

        // Each task hands back its input so failures can name the URL.
        let mut results = stream::iter(items)
            .map(|item| async move {
                let result = extractor.extract(&item).await;
                (item, result)
            })
            .buffer_unordered(self.workers);

        while let Some((item, result)) = results.next().await {
            record(&mut outcome, level, &item, result);
        }
        outcome
    }
}

/// Pick the executor for a run.
pub fn executor_for(sequential: bool, workers: usize) -> Box<dyn ArticleExecutor> {
    if sequential {
        Box::new(SequentialExecutor)
    } else {
        Box::new(PooledExecutor::new(workers))
    }
}

fn record(
    outcome: &mut ExtractionOutcome,
    level: log::Level,
    item: &LinkItem,
    result: Result<Option<ArticleRecord>>,
) {
    match result {
        Ok(Some(article)) => {
            log::log!(level, "Article read: {}", article.title);
            outcome.articles.push(article);
        }
        Ok(None) => {
            log::debug!("Skipping {}: no article title on page", item.url);
            outcome.skipped += 1;
        }
        Err(e) => {
            log::warn!("Failed to read article {}: {}", item.url, e);
            outcome.failures += 1;
        }
    }
}
