//! Configuration for catalog loading and the memo cache.
//!
//! Layered with the `config` crate:
//! - Bundled defaults (include_str! from scriptorium.toml)
//! - User overrides (~/.config/scriptorium/scriptorium.toml, then ./scriptorium.toml)
//! - Later layers take precedence

use crate::{CachedSource, CatalogLoader, FileSource, HttpSource};
use config::{Config, File, FileFormat};
use scriptorium_cache::{MemoCache, MemoCacheConfig};
use scriptorium_error::{ConfigError, ScriptoriumError, ScriptoriumResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Where the catalog comes from and how it is verified.
///
/// ```toml
/// [catalog]
/// url = "https://example.org/lds-scriptures.txt"
/// expected_sha256 = "ccbd4765..."
/// # path = "lds-scriptures.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Remote location of the catalog dump
    pub url: String,

    /// Pinned SHA-256 hex digest; no check when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_sha256: Option<String>,

    /// Local copy to read instead of downloading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptoriumConfig {
    /// Catalog source settings
    pub catalog: CatalogConfig,

    /// Memo cache settings
    #[serde(default)]
    pub cache: MemoCacheConfig,
}

impl ScriptoriumConfig {
    /// Load configuration from a specific file, without the bundled defaults.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScriptoriumResult<Self> {
        debug!("Loading configuration from file");
        Self::deserialize_from(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    #[instrument]
    pub fn load() -> ScriptoriumResult<Self> {
        Self::load_with(None)
    }

    /// Like [`ScriptoriumConfig::load`], with `extra` layered on top when given.
    #[instrument]
    pub fn load_with(extra: Option<&std::path::Path>) -> ScriptoriumResult<Self> {
        const DEFAULT_CONFIG: &str = include_str!("../../../scriptorium.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptorium/scriptorium.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scriptorium").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path));
        }

        Self::deserialize_from(builder)
    }

    fn deserialize_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ScriptoriumResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Build the memo cache described by `[cache]`.
    pub fn memo_cache(&self) -> ScriptoriumResult<MemoCache> {
        MemoCache::new(self.cache.clone())
    }

    /// Build a catalog loader for `[catalog]`.
    ///
    /// A configured `path` is read directly. Otherwise the URL is downloaded,
    /// through the memo cache when it is enabled; only text matching the
    /// expected digest is cached.
    pub fn catalog_loader(&self) -> ScriptoriumResult<CatalogLoader> {
        let expected = self.catalog.expected_sha256.clone();
        if let Some(path) = &self.catalog.path {
            return Ok(CatalogLoader::new(FileSource::new(path), expected));
        }

        let http = HttpSource::new(&self.catalog.url);
        if *self.cache.enabled() {
            let source = CachedSource::new(http, self.memo_cache()?)
                .with_expected_sha256(expected.clone());
            Ok(CatalogLoader::new(source, expected))
        } else {
            Ok(CatalogLoader::new(http, expected))
        }
    }
}
