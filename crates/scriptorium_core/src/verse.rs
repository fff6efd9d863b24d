//! A single verse, or a whole chapter when the verse number is absent.

use crate::Book;
use scriptorium_error::{ReferenceError, ReferenceErrorKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A verse in scripture.
///
/// `verse` is `None` for a whole-chapter reference, which also serves as the
/// "end of chapter" sentinel in ranges. Chapter and verse numbers start at 1.
///
/// Ordering is only defined within a book: `partial_cmp` returns `None` for
/// verses of different books. Use [`Verse::canon_cmp`] when a total canon order
/// is needed.
///
/// # Examples
///
/// ```
/// use scriptorium_core::{Book, Verse};
///
/// let first = Verse::new(Book::Alma, 32, Some(21)).unwrap();
/// let later = Verse::new(Book::Alma, 32, Some(27)).unwrap();
/// assert!(first < later);
/// assert_eq!(first.to_string(), "Alma 32:21");
///
/// let other_book = Verse::chapter(Book::Ether, 12).unwrap();
/// assert_eq!(first.partial_cmp(&other_book), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VerseFields")]
pub struct Verse {
    book: Book,
    chapter: u32,
    verse: Option<u32>,
}

impl Verse {
    /// Create a verse, rejecting zero chapter or verse numbers.
    pub fn new(book: Book, chapter: u32, verse: Option<u32>) -> Result<Self, ReferenceError> {
        if chapter == 0 {
            return Err(ReferenceError::new(ReferenceErrorKind::Syntax(format!(
                "{} {}: chapter numbers start at 1",
                book, chapter
            ))));
        }
        if verse == Some(0) {
            return Err(ReferenceError::new(ReferenceErrorKind::Syntax(format!(
                "{} {}:0: verse numbers start at 1",
                book, chapter
            ))));
        }
        Ok(Self {
            book,
            chapter,
            verse,
        })
    }

    /// Create a whole-chapter reference.
    pub fn chapter(book: Book, chapter: u32) -> Result<Self, ReferenceError> {
        Self::new(book, chapter, None)
    }

    /// Book of the verse.
    pub fn book(&self) -> Book {
        self.book
    }

    /// Chapter number.
    pub fn chapter_number(&self) -> u32 {
        self.chapter
    }

    /// Verse number, absent for a whole chapter.
    pub fn verse_number(&self) -> Option<u32> {
        self.verse
    }

    /// Whether this addresses a whole chapter rather than one verse.
    pub fn is_whole_chapter(&self) -> bool {
        self.verse.is_none()
    }

    /// Same book and chapter, ignoring the verse.
    pub fn same_chapter(&self, other: &Verse) -> bool {
        self.book == other.book && self.chapter == other.chapter
    }

    /// The same chapter with the verse number replaced.
    pub fn with_verse(&self, verse: Option<u32>) -> Result<Self, ReferenceError> {
        Self::new(self.book, self.chapter, verse)
    }

    /// Total order across the whole canon: book position, chapter, then verse.
    ///
    /// A whole-chapter verse sorts before verse 1 of the same chapter.
    pub fn canon_cmp(&self, other: &Verse) -> Ordering {
        self.book
            .cmp(&other.book)
            .then(self.chapter.cmp(&other.chapter))
            .then(self.verse.cmp(&other.verse))
    }
}

impl PartialOrd for Verse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.book != other.book {
            return None;
        }
        Some((self.chapter, self.verse).cmp(&(other.chapter, other.verse)))
    }
}

impl std::fmt::Display for Verse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(verse) = self.verse {
            write!(f, ":{}", verse)?;
        }
        Ok(())
    }
}

/// Unvalidated serde shape of a [`Verse`].
#[derive(Deserialize)]
struct VerseFields {
    book: Book,
    chapter: u32,
    #[serde(default)]
    verse: Option<u32>,
}

impl TryFrom<VerseFields> for Verse {
    type Error = ReferenceError;

    fn try_from(fields: VerseFields) -> Result<Self, Self::Error> {
        Verse::new(fields.book, fields.chapter, fields.verse)
    }
}
