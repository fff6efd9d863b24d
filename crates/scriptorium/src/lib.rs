//! Scriptorium - scripture reference parsing and canon lookup
//!
//! Scriptorium turns loosely formatted citations such as `"3 Nephi 11:10-13:3"` or
//! `"Joseph Smith–History 1:1-26"` into structured references, resolves them against
//! a verified canon catalog, and splits multi-chapter ranges into per-chapter pieces.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scriptorium::{PassageExt, ScriptoriumConfig, ScriptureReference};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScriptoriumConfig::load()?;
//!     let catalog = config.catalog_loader()?.load().await?;
//!
//!     let reference = ScriptureReference::parse("Alma 32:21")?;
//!     println!("{}", reference.scripture_text(catalog.as_ref())?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `scriptorium_error` - Error types
//! - `scriptorium_core` - Books, verses, references and the citation grammar
//! - `scriptorium_interface` - `CanonIndex` and `CatalogSource` traits
//! - `scriptorium_cache` - Content-hash keyed memo cache
//! - `scriptorium_canon` - Catalog loading, configuration and passage resolution
//!
//! This crate (`scriptorium`) re-exports everything for convenience.

pub use scriptorium_cache::*;
pub use scriptorium_canon::*;
pub use scriptorium_core::*;
pub use scriptorium_error::*;
pub use scriptorium_interface::*;

pub mod telemetry;
