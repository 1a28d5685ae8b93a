//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;
use crate::services::markup::Query;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Showcase site entry point
    #[serde(default)]
    pub site: SiteConfig,

    /// Markup selectors for every stage
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Console output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values and compile every selector.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }

        let base = url::Url::parse(&self.site.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "site.base_url must be http(s), got '{}'",
                base.scheme()
            )));
        }

        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }

        let selectors = &self.selectors;
        Query::compile(&selectors.category_link)?;
        Query::compile(&selectors.listing_card_link)?;
        Query::compile(&selectors.next_page)?;
        for (field, spec) in selectors.article.named() {
            Query::compile(spec).map_err(|e| {
                AppError::validation(format!("selectors.article.{field}: {e}"))
            })?;
        }

        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Worker count for the pooled article stage
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Showcase site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Front page listing the technology categories
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON file receiving the extracted articles
    #[serde(default = "defaults::output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log every link and article as it is read
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:118.0) Gecko/20100101 Firefox/118.0".into()
    }
    pub fn timeout() -> u64 {
        20
    }
    pub fn max_concurrent() -> usize {
        12
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://ufcinova.ufc.br/pt/vitrinetecnologica/".into()
    }

    // Output defaults
    pub fn output_path() -> String {
        "artigos.json".into()
    }
    pub fn show_progress() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.crawler.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_base_url() {
        let mut config = Config::default();
        config.site.base_url = "/pt/vitrinetecnologica/".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));
    }

    #[test]
    fn validate_rejects_broken_article_selector() {
        let mut config = Config::default();
        config.selectors.article.phone.css = "[[broken".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("selectors.article.phone"));
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("absent.toml"));
        assert_eq!(Config::load_or_default(&path).output.path, "artigos.json");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\npath = \"saida.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.path, "saida.json");
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../../data/config.toml")).unwrap();
        let defaults = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.site.base_url, defaults.site.base_url);
        assert_eq!(config.selectors.article.department, defaults.selectors.article.department);
        assert_eq!(config.selectors.labels.department, defaults.selectors.labels.department);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [crawler]
            max_concurrent = 4

            [selectors.article]
            title = "article h1"
            "#,
        )
        .unwrap();

        assert_eq!(config.crawler.max_concurrent, 4);
        assert_eq!(config.crawler.timeout_secs, 20);
        assert_eq!(config.selectors.article.title.css, "article h1");
        assert_eq!(config.selectors.article.trl.css, "div.elementor-icon-box-title span");
        assert_eq!(config.output.path, "artigos.json");
    }
}
