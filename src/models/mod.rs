// src/models/mod.rs

//! Domain models for the showcase crawler.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod link;
mod selectors;
mod stats;

// Re-export all public types
pub use article::ArticleRecord;
pub use config::{Config, CrawlerConfig, LoggingConfig, OutputConfig, SiteConfig};
pub use link::LinkItem;
pub use selectors::{ArticleSelectors, LabelConfig, QuerySpec, SelectorConfig};
pub use stats::{CrawlOutcome, CrawlStats, ExtractionOutcome};
