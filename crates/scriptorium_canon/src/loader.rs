//! Memoized catalog loading.

use crate::{Catalog, verify_integrity};
use scriptorium_core::ReferenceGrammar;
use scriptorium_error::{ScriptoriumError, ScriptoriumResult};
use scriptorium_interface::CatalogSource;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument, warn};

/// Fetches, verifies and parses the catalog at most once.
///
/// Concurrent callers of [`CatalogLoader::load`] share a single fetch; every
/// caller after the first gets the same `Arc<Catalog>`. A failed load is not
/// remembered, so the next call tries again.
///
/// # Example
///
/// ```
/// use scriptorium_canon::{CatalogLoader, StaticSource};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = CatalogLoader::new(StaticSource::new("Omni 1:1     Behold"), None);
/// let catalog = loader.load().await?;
/// assert_eq!(catalog.verse_count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
    expected_sha256: Option<String>,
    grammar: ReferenceGrammar,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogLoader {
    /// Create a loader over `source`, checking its text against `expected_sha256` when given.
    pub fn new(source: impl CatalogSource + 'static, expected_sha256: Option<String>) -> Self {
        Self {
            source: Box::new(source),
            expected_sha256,
            grammar: ReferenceGrammar::shared().clone(),
            catalog: OnceCell::new(),
        }
    }

    /// Use `grammar` to parse catalog references.
    pub fn with_grammar(mut self, grammar: ReferenceGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Origin of the underlying source.
    pub fn origin(&self) -> String {
        self.source.origin()
    }

    /// Whether the catalog has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    /// Load the catalog, or return the one loaded earlier.
    ///
    /// # Errors
    ///
    /// Source failures, a digest mismatch, or a catalog with no verses.
    #[instrument(skip(self), fields(origin = %self.source.origin()))]
    pub async fn load(&self) -> ScriptoriumResult<Arc<Catalog>> {
        self.catalog
            .get_or_try_init(|| async {
                let text = self.source.fetch().await?;
                match &self.expected_sha256 {
                    Some(expected) => verify_integrity(&text, expected)?,
                    None => warn!("No expected digest configured, skipping integrity check"),
                }
                let catalog = Catalog::parse_with(&self.grammar, &text)?;
                info!(verses = catalog.verse_count(), "Catalog loaded");
                Ok::<_, ScriptoriumError>(Arc::new(catalog))
            })
            .await
            .cloned()
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("origin", &self.source.origin())
            .field("expected_sha256", &self.expected_sha256)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
