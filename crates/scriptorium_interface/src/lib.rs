//! Trait definitions for the Scriptorium library.
//!
//! This crate provides the seams between the pure reference algebra and the data it
//! consults: the read-only canon lookup and the source a catalog is loaded from.

mod traits;

pub use traits::{CanonIndex, CatalogSource, ChapterVerses};
