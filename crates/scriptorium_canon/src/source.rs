//! Catalog text sources.

use crate::verify_integrity;
use async_trait::async_trait;
use scriptorium_cache::{CacheKey, MemoCache};
use scriptorium_error::{CatalogError, CatalogErrorKind, HttpError, ScriptoriumResult};
use scriptorium_interface::CatalogSource;
use std::path::PathBuf;
use tracing::{debug, error, instrument, warn};

/// Downloads the catalog dump over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `url` with a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Create a source for `url` that shares an existing client.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> ScriptoriumResult<String> {
        debug!("Downloading catalog");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!(error = ?e, "Catalog request failed");
            HttpError::new(format!("Request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Catalog server returned error");
            return Err(HttpError::new(format!("{} returned status {}", self.url, status)).into());
        }

        let text = response.text().await.map_err(|e| {
            HttpError::new(format!("Failed to read body from {}: {}", self.url, e))
        })?;
        debug!(bytes = text.len(), "Catalog downloaded");
        Ok(text)
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}

/// Reads the catalog dump from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> ScriptoriumResult<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::new(CatalogErrorKind::Read(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves catalog text held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Create a source that always yields `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> ScriptoriumResult<String> {
        Ok(self.text.clone())
    }

    fn origin(&self) -> String {
        "<memory>".to_string()
    }
}

/// Wraps another source with the memo cache, keyed by the inner origin.
///
/// With an expected digest, only text that matches it is stored, and a cached
/// copy that no longer matches is dropped and fetched again.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache: MemoCache,
    expected_sha256: Option<String>,
}

impl<S: CatalogSource> CachedSource<S> {
    /// Cache tag for catalog text entries.
    pub const TAG: &'static str = "catalog_text";

    /// Wrap `inner` with `cache`.
    pub fn new(inner: S, cache: MemoCache) -> Self {
        Self {
            inner,
            cache,
            expected_sha256: None,
        }
    }

    /// Refuse to cache text whose digest differs from `expected_sha256`.
    pub fn with_expected_sha256(mut self, expected_sha256: Option<String>) -> Self {
        self.expected_sha256 = expected_sha256;
        self
    }

    /// Key the inner source's text is cached under.
    pub fn key(&self) -> ScriptoriumResult<CacheKey> {
        CacheKey::new(Self::TAG, &self.inner.origin())
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachedSource<S> {
    #[instrument(skip(self), fields(origin = %self.inner.origin()))]
    async fn fetch(&self) -> ScriptoriumResult<String> {
        let key = self.key()?;

        if let Some(text) = self.cache.get_text(&key).await? {
            match &self.expected_sha256 {
                Some(expected) if verify_integrity(&text, expected).is_err() => {
                    warn!("Cached catalog fails digest check, fetching again");
                    self.cache.remove(&key).await?;
                }
                _ => return Ok(text),
            }
        }

        let text = self.inner.fetch().await?;
        if let Some(expected) = &self.expected_sha256 {
            verify_integrity(&text, expected)?;
        }
        self.cache.put_text(&key, &text).await?;
        Ok(text)
    }

    fn origin(&self) -> String {
        self.inner.origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_yields_text() {
        let source = StaticSource::new("Omni 1:1     Behold");
        assert_eq!(source.fetch().await.unwrap(), "Omni 1:1     Behold");
        assert_eq!(source.origin(), "<memory>");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let source = FileSource::new("/nonexistent/lds-scriptures.txt");
        let err = source.fetch().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog source"));
    }
}
