//! Top-level error wrapper types.

use crate::{CacheError, CatalogError, ConfigError, HttpError, JsonError, ReferenceError};

/// Every error condition a Scriptorium operation can report.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{CatalogError, CatalogErrorKind, ScriptoriumError};
///
/// let catalog_err = CatalogError::new(CatalogErrorKind::Empty);
/// let err: ScriptoriumError = catalog_err.into();
/// assert!(format!("{}", err).contains("Catalog Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptoriumErrorKind {
    /// Malformed citation or unknown book
    #[from(ReferenceError)]
    Reference(ReferenceError),
    /// Catalog integrity or lookup failure
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Memo cache failure
    #[from(CacheError)]
    Cache(CacheError),
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scriptorium error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ConfigError, ScriptoriumResult};
///
/// fn might_fail() -> ScriptoriumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptorium Error: {}", _0)]
pub struct ScriptoriumError(Box<ScriptoriumErrorKind>);

impl ScriptoriumError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptoriumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptoriumErrorKind {
        &self.0
    }

    /// Whether this error came from malformed citation text.
    ///
    /// Pipeline callers skip such citations and keep going; every other kind
    /// points at a data or environment problem.
    pub fn is_reference_error(&self) -> bool {
        matches!(self.kind(), ScriptoriumErrorKind::Reference(_))
    }
}

// Generic From implementation for any type that converts to ScriptoriumErrorKind
impl<T> From<T> for ScriptoriumError
where
    T: Into<ScriptoriumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptorium operations.
pub type ScriptoriumResult<T> = std::result::Result<T, ScriptoriumError>;
