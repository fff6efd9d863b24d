//! In-memory canon catalog built from the flat text dump.

use scriptorium_core::{Book, ReferenceGrammar};
use scriptorium_error::{CatalogError, CatalogErrorKind, ScriptoriumResult};
use scriptorium_interface::{CanonIndex, ChapterVerses};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Separates the reference column from the verse text on each line.
const FIELD_SEPARATOR: &str = "     ";

/// Read-only `book → chapter → verse → text` lookup.
///
/// Books iterate in canon order and chapters and verses in numeric order, so
/// walking the maps front to back visits the canon in reading order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<Book, BTreeMap<u32, ChapterVerses>>,
    verse_count: usize,
    skipped: usize,
}

impl Catalog {
    /// Parse catalog text with the shared grammar.
    pub fn parse(text: &str) -> ScriptoriumResult<Self> {
        Self::parse_with(ReferenceGrammar::shared(), text)
    }

    /// Parse catalog text, one `"Reference     Text"` verse per line.
    ///
    /// Blank lines are ignored. Lines without the separator, or whose reference
    /// does not name a single known verse, are skipped and counted in
    /// [`Catalog::skipped`]. A later line for the same verse replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Fails with `Empty` when no line yields a verse.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn parse_with(grammar: &ReferenceGrammar, text: &str) -> ScriptoriumResult<Self> {
        let mut catalog = Self::default();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((citation, verse_text)) = line.split_once(FIELD_SEPARATOR) else {
                warn!(line = index + 1, "Catalog line has no field separator");
                catalog.skipped += 1;
                continue;
            };

            let reference = match grammar.parse(citation.trim()) {
                Ok(reference) => reference,
                Err(e) => {
                    warn!(line = index + 1, error = %e, "Catalog line has unusable reference");
                    catalog.skipped += 1;
                    continue;
                }
            };
            let verse = reference.start();
            let (Some(number), None) = (verse.verse_number(), reference.end()) else {
                warn!(line = index + 1, reference = %reference, "Catalog line is not a single verse");
                catalog.skipped += 1;
                continue;
            };

            let previous = catalog
                .books
                .entry(verse.book())
                .or_default()
                .entry(verse.chapter_number())
                .or_default()
                .insert(number, verse_text.trim().to_string());
            if previous.is_none() {
                catalog.verse_count += 1;
            }
        }

        if catalog.verse_count == 0 {
            return Err(CatalogError::new(CatalogErrorKind::Empty).into());
        }
        info!(
            books = catalog.books.len(),
            verses = catalog.verse_count,
            skipped = catalog.skipped,
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// Number of distinct verses.
    pub fn verse_count(&self) -> usize {
        self.verse_count
    }

    /// Number of non-blank lines that were not loaded.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Books present in the catalog, in canon order.
    pub fn books(&self) -> impl Iterator<Item = Book> + '_ {
        self.books.keys().copied()
    }
}

impl CanonIndex for Catalog {
    fn chapter(&self, book: Book, chapter: u32) -> Option<&ChapterVerses> {
        self.books.get(&book)?.get(&chapter)
    }

    fn chapter_count(&self, book: Book) -> u32 {
        self.books
            .get(&book)
            .and_then(|chapters| chapters.keys().next_back().copied())
            .unwrap_or(0)
    }
}
