//! Local filesystem storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::ArticleRecord;
use crate::storage::{ArticleStorage, WriteMetadata};

/// Writes articles to a single JSON file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Create a storage writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Sibling temp file: the full file name with `.tmp` appended.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.tmp_path();
        let result = Self::write_then_rename(&tmp, &self.path, bytes).await;
        if result.is_err() {
            let _ = tokio::fs::remove_file(&tmp).await;
        }
        result
    }

    async fn write_then_rename(tmp: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = tokio::fs::File::create(tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(tmp, target).await?;
        Ok(())
    }
}

#[async_trait]
impl ArticleStorage for LocalStorage {
    async fn write_articles(&self, articles: &[ArticleRecord]) -> Result<WriteMetadata> {
        let mut bytes = serde_json::to_vec_pretty(articles)?;
        bytes.push(b'\n');
        self.write_bytes(&bytes).await?;

        Ok(WriteMetadata {
            article_count: articles.len(),
            location: self.path.display().to_string(),
            timestamp: Utc::now(),
        })
    }

    async fn load_articles(&self) -> Result<Vec<ArticleRecord>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
