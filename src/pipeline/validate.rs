// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;
use crate::utils::console;

/// Validate configuration and compile every selector.
pub fn run_validate(config: &Config) -> Result<()> {
    console::header("Validating configuration");

    if let Err(e) = config.validate() {
        log::error!("Validation failed: {}", e);
        return Err(e);
    }

    log::info!("✓ Config OK");
    console::sub_item(&format!("Base URL: {}", config.site.base_url));
    console::sub_item(&format!("User agent: {}", config.crawler.user_agent));
    console::sub_item(&format!("Timeout: {}s", config.crawler.timeout_secs));
    console::sub_item(&format!("Workers: {}", config.crawler.max_concurrent));
    console::sub_item(&format!("Output: {}", config.output.path));

    log::info!("✓ Selectors OK");
    let selectors = &config.selectors;
    console::sub_item(&format!("Categories: {}", selectors.category_link.css));
    console::sub_item(&format!("Listing cards: {}", selectors.listing_card_link.css));
    console::sub_item(&format!("Next page: {}", selectors.next_page.css));
    for (field, spec) in selectors.article.named() {
        console::sub_item(&format!("Article {}: {}", field, spec.css));
    }

    Ok(())
}
