//! Storage abstractions for article persistence.
//!
//! A run produces one JSON file: an array with one object per extracted
//! article, pretty-printed, with non-ASCII text written as-is.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ArticleRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of articles written
    pub article_count: usize,
    /// Where the articles were written
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for article storage backends.
#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Persist the articles of one run, replacing any previous output.
    async fn write_articles(&self, articles: &[ArticleRecord]) -> Result<WriteMetadata>;

    /// Load the articles of the last run.
    async fn load_articles(&self) -> Result<Vec<ArticleRecord>>;
}
