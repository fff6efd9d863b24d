//! Reference operations that need the catalog.

use scriptorium_core::{Book, ScriptureReference, Verse};
use scriptorium_error::{ReferenceError, ReferenceErrorKind, ScriptoriumResult};
use scriptorium_interface::CanonIndex;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Catalog-backed operations on [`ScriptureReference`].
pub trait PassageExt {
    /// Full text of the passage, one `"{verse} {text}"` line per verse.
    ///
    /// A range with a whole-chapter start begins at verse 1; a whole-chapter end
    /// runs through that chapter's last verse. Ranges may cross chapters and books.
    ///
    /// # Errors
    ///
    /// `NotFound` when either endpoint is missing from the catalog,
    /// `InvertedRange` when the start comes after the end.
    fn scripture_text<C: CanonIndex + ?Sized>(&self, canon: &C) -> ScriptoriumResult<String>;

    /// Decompose the passage into references that each stay within one chapter.
    ///
    /// The pieces cover exactly the original range, in canon order.
    ///
    /// # Errors
    ///
    /// `NotFound` when the start or end chapter is missing from the catalog,
    /// `InvertedRange` when the start chapter comes after the end chapter.
    fn split_chapters<C: CanonIndex + ?Sized>(
        &self,
        canon: &C,
    ) -> ScriptoriumResult<Vec<ScriptureReference>>;
}

impl PassageExt for ScriptureReference {
    #[instrument(skip(self, canon), fields(reference = %self))]
    fn scripture_text<C: CanonIndex + ?Sized>(&self, canon: &C) -> ScriptoriumResult<String> {
        let start = *self.start();

        let Some(&end) = self.end() else {
            if start.is_whole_chapter() {
                let verses = canon.verses_of(start.book(), start.chapter_number())?;
                let mut lines = Vec::with_capacity(verses.len());
                for (&number, text) in verses {
                    lines.push(line(start.with_verse(Some(number))?, text));
                }
                return Ok(lines.join("\n"));
            }
            return Ok(line(start, canon.text_of(&start)?));
        };

        let first = match start.verse_number() {
            Some(_) => start,
            None => start.with_verse(Some(1))?,
        };
        let last = match end.verse_number() {
            Some(_) => end,
            None => end.with_verse(Some(
                canon.last_verse_of(end.book(), end.chapter_number())?,
            ))?,
        };
        canon.text_of(&first)?;
        canon.text_of(&last)?;
        if first.canon_cmp(&last) == Ordering::Greater {
            return Err(inverted(self).into());
        }

        let mut lines = Vec::new();
        for book in books_between(first.book(), last.book()) {
            let from = if book == first.book() { first.chapter_number() } else { 1 };
            let to = if book == last.book() {
                last.chapter_number()
            } else {
                canon.chapter_count(book)
            };
            for chapter in from..=to {
                let Some(verses) = canon.chapter(book, chapter) else {
                    continue;
                };
                for (&number, text) in verses {
                    let verse = Verse::new(book, chapter, Some(number))?;
                    if verse.canon_cmp(&first) == Ordering::Less {
                        continue;
                    }
                    if verse.canon_cmp(&last) == Ordering::Greater {
                        break;
                    }
                    lines.push(line(verse, text));
                }
            }
        }

        debug!(verses = lines.len(), "Resolved passage text");
        Ok(lines.join("\n"))
    }

    #[instrument(skip(self, canon), fields(reference = %self))]
    fn split_chapters<C: CanonIndex + ?Sized>(
        &self,
        canon: &C,
    ) -> ScriptoriumResult<Vec<ScriptureReference>> {
        let start = *self.start();
        let Some(&end) = self.end() else {
            return Ok(vec![*self]);
        };
        if self.is_single_chapter() {
            return Ok(vec![*self]);
        }

        let start_chapter = Verse::chapter(start.book(), start.chapter_number())?;
        let end_chapter = Verse::chapter(end.book(), end.chapter_number())?;
        if start_chapter.canon_cmp(&end_chapter) == Ordering::Greater {
            return Err(inverted(self).into());
        }
        canon.verses_of(start.book(), start.chapter_number())?;
        canon.verses_of(end.book(), end.chapter_number())?;

        let mut pieces = vec![ScriptureReference::new(start, Some(start_chapter))];
        'walk: for book in books_between(start.book(), end.book()) {
            let from = if book == start.book() {
                start.chapter_number() + 1
            } else {
                1
            };
            for chapter in from..=canon.chapter_count(book) {
                if book == end.book() && chapter == end.chapter_number() {
                    pieces.push(match end.verse_number() {
                        None => ScriptureReference::single(end_chapter),
                        Some(_) => {
                            ScriptureReference::new(end_chapter.with_verse(Some(1))?, Some(end))
                        }
                    });
                    break 'walk;
                }
                if canon.chapter(book, chapter).is_some() {
                    pieces.push(ScriptureReference::single(Verse::chapter(book, chapter)?));
                }
            }
        }

        debug!(pieces = pieces.len(), "Split passage into chapters");
        Ok(pieces)
    }
}

/// Split every reference into chapters, dropping repeats but keeping first-seen order.
///
/// # Errors
///
/// The first error from [`PassageExt::split_chapters`].
pub fn lesson_chapters<'a, C, I>(references: I, canon: &C) -> ScriptoriumResult<Vec<ScriptureReference>>
where
    C: CanonIndex + ?Sized,
    I: IntoIterator<Item = &'a ScriptureReference>,
{
    let mut seen = HashSet::new();
    let mut chapters = Vec::new();
    for reference in references {
        for piece in reference.split_chapters(canon)? {
            if seen.insert(piece) {
                chapters.push(piece);
            }
        }
    }
    Ok(chapters)
}

fn line(verse: Verse, text: &str) -> String {
    format!("{} {}", verse, text)
}

fn books_between(first: Book, last: Book) -> impl Iterator<Item = Book> {
    Book::canon().filter(move |book| (first..=last).contains(book))
}

fn inverted(reference: &ScriptureReference) -> ReferenceError {
    ReferenceError::new(ReferenceErrorKind::InvertedRange(reference.to_string()))
}
