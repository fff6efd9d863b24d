//! Trait definitions for canon lookups and catalog sources.

use async_trait::async_trait;
use scriptorium_core::{Book, Verse};
use scriptorium_error::{CatalogError, CatalogErrorKind, ScriptoriumResult};
use std::collections::BTreeMap;

/// Verse number to verse text for one chapter, in verse order.
pub type ChapterVerses = BTreeMap<u32, String>;

/// Read-only nested lookup `book → chapter → verse → text`.
///
/// Implementations are built once and never mutated, so references can be
/// resolved against them from any thread.
pub trait CanonIndex: Send + Sync {
    /// Verses of one chapter, or `None` if the catalog has no such chapter.
    fn chapter(&self, book: Book, chapter: u32) -> Option<&ChapterVerses>;

    /// Highest chapter number present for the book, 0 if the book is absent.
    fn chapter_count(&self, book: Book) -> u32;

    /// Verses of one chapter, failing with `NotFound` when absent.
    fn verses_of(&self, book: Book, chapter: u32) -> ScriptoriumResult<&ChapterVerses> {
        self.chapter(book, chapter).ok_or_else(|| {
            CatalogError::new(CatalogErrorKind::NotFound(format!("{} {}", book, chapter))).into()
        })
    }

    /// Text of a single verse.
    ///
    /// A whole-chapter verse has no single text and is reported as not found.
    fn text_of(&self, verse: &Verse) -> ScriptoriumResult<&str> {
        let verses = self.verses_of(verse.book(), verse.chapter_number())?;
        verse
            .verse_number()
            .and_then(|number| verses.get(&number))
            .map(String::as_str)
            .ok_or_else(|| {
                CatalogError::new(CatalogErrorKind::NotFound(verse.to_string())).into()
            })
    }

    /// Highest verse number in a chapter.
    fn last_verse_of(&self, book: Book, chapter: u32) -> ScriptoriumResult<u32> {
        let verses = self.verses_of(book, chapter)?;
        verses.keys().next_back().copied().ok_or_else(|| {
            CatalogError::new(CatalogErrorKind::NotFound(format!("{} {}", book, chapter))).into()
        })
    }
}

/// Where catalog text comes from.
///
/// The text is the flat `"Reference     Text"` dump; integrity checking and
/// parsing happen in the loader, not the source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog text.
    async fn fetch(&self) -> ScriptoriumResult<String>;

    /// Human-readable origin (URL or path) for logs and cache keys.
    fn origin(&self) -> String;
}
