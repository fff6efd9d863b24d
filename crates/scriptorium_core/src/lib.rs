//! Core scripture reference types for the Scriptorium library.
//!
//! This crate provides the canon enumeration, verse and reference value types, and the
//! citation grammar. Everything here is pure: resolving text or chapter bounds needs a
//! catalog, which lives behind the `CanonIndex` trait in `scriptorium_interface`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod grammar;
mod reference;
mod verse;

pub use book::Book;
pub use grammar::ReferenceGrammar;
pub use reference::ScriptureReference;
pub use verse::Verse;
