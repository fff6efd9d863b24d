//! Error types for the Scriptorium library.
//!
//! This crate provides the foundation error types used throughout the Scriptorium workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Reference errors (malformed citations, unknown books) are always attributable to the
//! input text and are safe to skip per citation. Catalog errors (integrity failures,
//! missing verses) indicate a data problem and are meant to propagate.
//!
//! # Examples
//!
//! ```
//! use scriptorium_error::{ReferenceError, ReferenceErrorKind, ScriptoriumResult};
//!
//! fn parse(input: &str) -> ScriptoriumResult<u32> {
//!     Err(ReferenceError::new(ReferenceErrorKind::Syntax(input.to_string())))?
//! }
//!
//! match parse("Nowhere") {
//!     Ok(chapter) => println!("Got: {}", chapter),
//!     Err(e) => assert!(e.is_reference_error()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod catalog;
mod config;
mod error;
mod http;
mod json;
mod reference;

pub use cache::{CacheError, CacheErrorKind};
pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{ScriptoriumError, ScriptoriumErrorKind, ScriptoriumResult};
pub use http::HttpError;
pub use json::JsonError;
pub use reference::{ReferenceError, ReferenceErrorKind};
