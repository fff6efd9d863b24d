//! Canon catalog error types.

/// Kinds of canon catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Catalog source content does not match its expected digest
    #[display("Catalog integrity check failed: expected sha256 {}, got {}", expected, actual)]
    DataIntegrity {
        /// Expected SHA-256 hex digest
        expected: String,
        /// Digest of the content actually received
        actual: String,
    },
    /// Book, chapter or verse is not present in the catalog
    #[display("Not found in catalog: {}", _0)]
    NotFound(String),
    /// Failed to read a local catalog source
    #[display("Failed to read catalog source: {}", _0)]
    Read(String),
    /// Catalog source produced no verses
    #[display("Catalog source contained no verses")]
    Empty,
}

/// Canon catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::NotFound("Jarom 9".to_string()));
/// assert!(format!("{}", err).contains("Not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
