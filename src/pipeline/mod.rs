//! Pipeline entry points for crawler operations.
//!
//! - `crawl`: Discover categories, walk listings and extract articles
//! - `run_crawler`: Crawl and persist the extracted articles
//! - `run_validate`: Check configuration and selectors

pub mod crawl;
pub mod validate;

pub use crawl::{crawl, run_crawler};
pub use validate::run_validate;
