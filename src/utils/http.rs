// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
///
/// The client keeps a connection pool, so one instance is shared by every
/// stage and every article worker.
pub fn create_async_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Retrieves page bodies by URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return its body. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with the configured identity header and timeout.
    pub fn from_config(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
