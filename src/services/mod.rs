//! Service layer for the showcase crawler.
//!
//! This module contains the business logic for:
//! - Category discovery (`CategoryDiscoverer`)
//! - Listing pagination (`ListingPaginator`)
//! - Article extraction (`ArticleExtractor`)
//! - Article stage scheduling (`ArticleExecutor`)
//! - Run-wide URL deduplication (`SeenRegistry`)

mod articles;
mod categories;
pub mod executor;
mod links;
mod listings;
pub mod markup;
mod registry;

pub use articles::{ArticleExtractor, ArticleTemplate};
pub use categories::CategoryDiscoverer;
pub use executor::{ArticleExecutor, PooledExecutor, SequentialExecutor, executor_for};
pub use links::{TitleStyle, collect_links};
pub use listings::ListingPaginator;
pub use registry::SeenRegistry;
