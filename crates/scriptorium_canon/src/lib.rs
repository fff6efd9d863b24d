//! Canon catalog loading and passage resolution for the Scriptorium library.
//!
//! The catalog is built once from a flat `"Reference     Text"` dump, checked
//! against a pinned SHA-256 digest, and then shared read-only. References from
//! `scriptorium_core` are resolved against it through [`PassageExt`]:
//!
//! ```
//! use scriptorium_canon::{Catalog, PassageExt};
//! use scriptorium_core::ScriptureReference;
//!
//! let catalog = Catalog::parse("Jarom 1:1     Behold, I, Jarom.\nJarom 1:2     As these plates are small.\n").unwrap();
//! let reference = ScriptureReference::parse("Jarom 1:1-2").unwrap();
//! assert_eq!(
//!     reference.scripture_text(&catalog).unwrap(),
//!     "Jarom 1:1 Behold, I, Jarom.\nJarom 1:2 As these plates are small."
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod integrity;
mod loader;
mod passage;
mod source;

pub use catalog::Catalog;
pub use config::{CatalogConfig, ScriptoriumConfig};
pub use integrity::{sha256_hex, verify_integrity};
pub use loader::CatalogLoader;
pub use passage::{PassageExt, lesson_chapters};
pub use source::{CachedSource, FileSource, HttpSource, StaticSource};
