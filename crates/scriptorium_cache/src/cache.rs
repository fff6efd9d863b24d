//! Filesystem memo cache implementation.

use derive_getters::Getters;
use scriptorium_error::{CacheError, CacheErrorKind, JsonError, ScriptoriumResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};
use std::future::Future;
use std::path::PathBuf;

/// Hex characters of the argument digest kept in file names.
const KEY_HASH_LEN: usize = 16;

/// Cache key: a type tag plus a digest of the call arguments.
///
/// The tag names what is cached (a function or a result type) and becomes the
/// file name prefix, so different producers never share an entry even when
/// their arguments hash alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct CacheKey {
    tag: String,
    hash: String,
}

impl CacheKey {
    /// Derive a key from a tag and serializable arguments.
    ///
    /// # Errors
    ///
    /// Fails if the tag is empty or contains characters unsafe in a file name,
    /// or if the arguments cannot be serialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_cache::CacheKey;
    ///
    /// let a = CacheKey::new("catalog_text", &("https://example.org/canon.txt",)).unwrap();
    /// let b = CacheKey::new("catalog_text", &("https://example.org/canon.txt",)).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.hash().len(), 16);
    /// ```
    pub fn new<A: Serialize + ?Sized>(tag: &str, args: &A) -> ScriptoriumResult<Self> {
        if !is_valid_tag(tag) {
            return Err(CacheError::new(CacheErrorKind::InvalidTag(tag.to_string())).into());
        }

        let args_json = serde_json::to_string(args)
            .map_err(|e| JsonError::new(format!("Failed to serialize cache arguments: {}", e)))?;

        let mut hasher = Sha256::new();
        hasher.update(tag.as_bytes());
        hasher.update(args_json.as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        Ok(Self {
            tag: tag.to_string(),
            hash: digest[..KEY_HASH_LEN].to_string(),
        })
    }

    fn file_name(&self, extension: &str) -> String {
        format!("{}-{}.{}", self.tag, self.hash, extension)
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Whether a file name has the `{tag}-{hash}.{json|txt}` shape of a cache entry.
fn is_entry_file_name(file_name: &str) -> bool {
    let Some(stem) = file_name
        .strip_suffix(".json")
        .or_else(|| file_name.strip_suffix(".txt"))
    else {
        return false;
    };
    let Some((tag, hash)) = stem.rsplit_once('-') else {
        return false;
    };
    is_valid_tag(tag)
        && hash.len() == KEY_HASH_LEN
        && hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

/// Configuration for the memo cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct MemoCacheConfig {
    /// Directory holding cache entries
    #[serde(default = "default_directory")]
    #[builder(default = "default_directory()", setter(into))]
    directory: PathBuf,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".cache")
}

fn default_enabled() -> bool {
    true
}

impl Default for MemoCacheConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            enabled: default_enabled(),
        }
    }
}

/// Memoizing side-table stored as one file per entry.
///
/// Typed values are stored as pretty JSON (`{tag}-{hash}.json`), raw text as-is
/// (`{tag}-{hash}.txt`). Writes go to a temp file and are renamed into place.
/// A disabled cache never hits and never writes.
///
/// # Example
///
/// ```no_run
/// use scriptorium_cache::{CacheKey, MemoCache, MemoCacheConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = MemoCache::new(MemoCacheConfig::default())?;
/// let key = CacheKey::new("lesson_title", &(2024, 12))?;
///
/// let title = cache
///     .get_or_try_insert_text_with(&key, || async { Ok("Come, Follow Me".to_string()) })
///     .await?;
/// assert_eq!(title, "Come, Follow Me");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemoCache {
    config: MemoCacheConfig,
}

impl MemoCache {
    /// Create a memo cache, creating its directory when enabled.
    #[tracing::instrument(skip(config), fields(directory = %config.directory.display(), enabled = config.enabled))]
    pub fn new(config: MemoCacheConfig) -> ScriptoriumResult<Self> {
        if config.enabled {
            std::fs::create_dir_all(&config.directory).map_err(|e| {
                CacheError::new(CacheErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    config.directory.display(),
                    e
                )))
            })?;
        }
        tracing::debug!("Created memo cache");
        Ok(Self { config })
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self {
            config: MemoCacheConfig::default().with_enabled(false),
        }
    }

    /// Cache configuration.
    pub fn config(&self) -> &MemoCacheConfig {
        &self.config
    }

    fn path(&self, key: &CacheKey, extension: &str) -> PathBuf {
        self.config.directory.join(key.file_name(extension))
    }

    /// Look up a typed entry.
    #[tracing::instrument(skip(self, key), fields(tag = %key.tag, hash = %key.hash))]
    pub async fn get_json<T: DeserializeOwned>(&self, key: &CacheKey) -> ScriptoriumResult<Option<T>> {
        let Some(text) = self.read(key, "json").await? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&text).map_err(|e| {
            JsonError::new(format!("Corrupt cache entry {}: {}", key.file_name("json"), e))
        })?;
        Ok(Some(value))
    }

    /// Store a typed entry.
    #[tracing::instrument(skip(self, key, value), fields(tag = %key.tag, hash = %key.hash))]
    pub async fn put_json<T: Serialize>(&self, key: &CacheKey, value: &T) -> ScriptoriumResult<()> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| JsonError::new(format!("Failed to serialize cache entry: {}", e)))?;
        self.write(key, "json", &text).await
    }

    /// Look up a text entry.
    #[tracing::instrument(skip(self, key), fields(tag = %key.tag, hash = %key.hash))]
    pub async fn get_text(&self, key: &CacheKey) -> ScriptoriumResult<Option<String>> {
        self.read(key, "txt").await
    }

    /// Store a text entry.
    #[tracing::instrument(skip(self, key, text), fields(tag = %key.tag, hash = %key.hash, size = text.len()))]
    pub async fn put_text(&self, key: &CacheKey, text: &str) -> ScriptoriumResult<()> {
        self.write(key, "txt", text).await
    }

    /// Return the cached text for `key`, or run `produce` and cache its result.
    ///
    /// A failing producer caches nothing.
    pub async fn get_or_try_insert_text_with<F, Fut>(
        &self,
        key: &CacheKey,
        produce: F,
    ) -> ScriptoriumResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ScriptoriumResult<String>>,
    {
        if let Some(text) = self.get_text(key).await? {
            return Ok(text);
        }
        let text = produce().await?;
        self.put_text(key, &text).await?;
        Ok(text)
    }

    /// Return the cached value for `key`, or run `produce` and cache its result.
    pub async fn get_or_try_insert_json_with<T, F, Fut>(
        &self,
        key: &CacheKey,
        produce: F,
    ) -> ScriptoriumResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ScriptoriumResult<T>>,
    {
        if let Some(value) = self.get_json(key).await? {
            return Ok(value);
        }
        let value = produce().await?;
        self.put_json(key, &value).await?;
        Ok(value)
    }

    /// Remove every entry stored under `key`. Returns whether anything was removed.
    #[tracing::instrument(skip(self, key), fields(tag = %key.tag, hash = %key.hash))]
    pub async fn remove(&self, key: &CacheKey) -> ScriptoriumResult<bool> {
        let mut removed = false;
        for extension in ["json", "txt"] {
            let path = self.path(key, extension);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed = true,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(CacheError::new(CacheErrorKind::FileRemove(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                    .into());
                }
            }
        }
        Ok(removed)
    }

    /// Remove every cache entry. Returns the number of files removed.
    ///
    /// Only files named like entries (`{tag}-{hash}.json` or `.txt`) are touched;
    /// anything else sharing the directory is left in place.
    #[tracing::instrument(skip(self), fields(directory = %self.config.directory.display()))]
    pub async fn clear(&self) -> ScriptoriumResult<usize> {
        let directory = &self.config.directory;
        let mut entries = match tokio::fs::read_dir(directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(CacheError::new(CacheErrorKind::FileRead(format!(
                    "{}: {}",
                    directory.display(),
                    e
                )))
                .into());
            }
        };

        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            CacheError::new(CacheErrorKind::FileRead(format!("{}: {}", directory.display(), e)))
        })? {
            let path = entry.path();
            let is_entry = entry
                .file_name()
                .to_str()
                .is_some_and(is_entry_file_name);
            if !is_entry {
                continue;
            }
            tokio::fs::remove_file(&path).await.map_err(|e| {
                CacheError::new(CacheErrorKind::FileRemove(format!("{}: {}", path.display(), e)))
            })?;
            removed += 1;
        }

        tracing::info!(removed, "Cleared memo cache");
        Ok(removed)
    }

    async fn read(&self, key: &CacheKey, extension: &str) -> ScriptoriumResult<Option<String>> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping lookup");
            return Ok(None);
        }

        let path = self.path(key, extension);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                tracing::info!(path = %path.display(), "Cache hit");
                Ok(Some(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Cache miss");
                Ok(None)
            }
            Err(e) => Err(CacheError::new(CacheErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    async fn write(&self, key: &CacheKey, extension: &str, text: &str) -> ScriptoriumResult<()> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping write");
            return Ok(());
        }

        let path = self.path(key, extension);
        tokio::fs::create_dir_all(&self.config.directory)
            .await
            .map_err(|e| {
                CacheError::new(CacheErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.config.directory.display(),
                    e
                )))
            })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self
            .config
            .directory
            .join(format!("{}.tmp", key.file_name(extension)));
        tokio::fs::write(&temp_path, text).await.map_err(|e| {
            CacheError::new(CacheErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            CacheError::new(CacheErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), size = text.len(), "Stored cache entry");
        Ok(())
    }
}
