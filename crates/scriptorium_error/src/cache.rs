//! Memo cache error types.

/// Kinds of memo cache errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CacheErrorKind {
    /// Failed to create cache directory
    #[display("Failed to create cache directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write cache entry
    #[display("Failed to write cache entry: {}", _0)]
    FileWrite(String),
    /// Failed to read cache entry
    #[display("Failed to read cache entry: {}", _0)]
    FileRead(String),
    /// Failed to remove cache entry
    #[display("Failed to remove cache entry: {}", _0)]
    FileRemove(String),
    /// Type tag cannot be used in a file name
    #[display("Invalid cache tag: {}", _0)]
    InvalidTag(String),
}

/// Memo cache error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{CacheError, CacheErrorKind};
///
/// let err = CacheError::new(CacheErrorKind::FileRead("/tmp/x.json".to_string()));
/// assert!(format!("{}", err).contains("read cache entry"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The kind of error that occurred
    pub kind: CacheErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CacheError {
    /// Create a new cache error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
