//! SHA-256 integrity check for catalog text.

use scriptorium_error::{CatalogError, CatalogErrorKind, ScriptoriumResult};
use sha2::{Digest, Sha256};
use tracing::{debug, error};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
///
/// # Examples
///
/// ```
/// use scriptorium_canon::sha256_hex;
///
/// assert_eq!(
///     sha256_hex(""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fail with `DataIntegrity` unless `text` hashes to `expected`.
///
/// The comparison ignores case and surrounding whitespace in `expected`.
pub fn verify_integrity(text: &str, expected: &str) -> ScriptoriumResult<()> {
    let actual = sha256_hex(text);
    let expected = expected.trim().to_ascii_lowercase();
    if actual != expected {
        error!(%expected, %actual, "Catalog digest mismatch");
        return Err(CatalogError::new(CatalogErrorKind::DataIntegrity { expected, actual }).into());
    }
    debug!(digest = %actual, "Catalog digest verified");
    Ok(())
}
