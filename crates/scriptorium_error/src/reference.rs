//! Scripture reference error types.

/// Kinds of scripture reference errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ReferenceErrorKind {
    /// Input does not match the citation grammar
    #[display("Invalid scripture reference: {}", _0)]
    Syntax(String),
    /// Book name is not part of the canon
    #[display("Unknown book: {}", _0)]
    UnknownBook(String),
    /// Range ends before it starts
    #[display("Range ends before it starts: {}", _0)]
    InvertedRange(String),
}

/// Scripture reference error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ReferenceError, ReferenceErrorKind};
///
/// let err = ReferenceError::new(ReferenceErrorKind::UnknownBook("Hezekiah".to_string()));
/// assert!(format!("{}", err).contains("Unknown book: Hezekiah"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Reference Error: {} at line {} in {}", kind, line, file)]
pub struct ReferenceError {
    /// The kind of error that occurred
    pub kind: ReferenceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ReferenceError {
    /// Create a new reference error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReferenceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
