//! Scripture references: one verse, one chapter, or a contiguous range.

use crate::{ReferenceGrammar, Verse};
use scriptorium_error::ReferenceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A reference to a verse or a range of verses.
///
/// An end equal to the start is normalized away at construction, so a
/// single-verse reference has exactly one representation and derived equality
/// treats "no end" and "end == start" alike.
///
/// `Display` renders the canonical citation, and parsing that string yields the
/// same reference again for every same-book reference.
///
/// # Examples
///
/// ```
/// use scriptorium_core::{Book, ScriptureReference, Verse};
///
/// let reference: ScriptureReference = "Jarom 1:1-2".parse().unwrap();
/// assert_eq!(reference.start(), &Verse::new(Book::Jarom, 1, Some(1)).unwrap());
/// assert_eq!(reference.end(), Some(&Verse::new(Book::Jarom, 1, Some(2)).unwrap()));
/// assert_eq!(reference.to_string(), "Jarom 1:1-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ReferenceFields")]
pub struct ScriptureReference {
    start_verse: Verse,
    end_verse: Option<Verse>,
}

impl ScriptureReference {
    /// Create a reference, dropping an end that equals the start.
    pub fn new(start_verse: Verse, end_verse: Option<Verse>) -> Self {
        let end_verse = end_verse.filter(|end| *end != start_verse);
        Self {
            start_verse,
            end_verse,
        }
    }

    /// A reference to a single verse or a single whole chapter.
    pub fn single(verse: Verse) -> Self {
        Self::new(verse, None)
    }

    /// Parse a citation with the shared grammar.
    pub fn parse(citation: &str) -> Result<Self, ReferenceError> {
        ReferenceGrammar::shared().parse(citation)
    }

    /// Parse a lesson reference that may list several citations separated by `;`.
    ///
    /// Empty segments are ignored. The first unparseable segment fails the whole list.
    pub fn parse_list(citations: &str) -> Result<Vec<Self>, ReferenceError> {
        let grammar = ReferenceGrammar::shared();
        citations
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| grammar.parse(part))
            .collect()
    }

    /// First verse (or chapter) of the reference.
    pub fn start(&self) -> &Verse {
        &self.start_verse
    }

    /// Last verse (or chapter) of the range, absent for a single verse or chapter.
    pub fn end(&self) -> Option<&Verse> {
        self.end_verse.as_ref()
    }

    /// Whether the reference stays within one chapter of one book.
    pub fn is_single_chapter(&self) -> bool {
        match &self.end_verse {
            None => true,
            Some(end) => self.start_verse.same_chapter(end),
        }
    }

    /// Filesystem-safe form of the canonical citation, used for lesson directories.
    ///
    /// Whitespace runs and any other character outside `[A-Za-z0-9_-]` become a
    /// single `_`.
    ///
    /// ```
    /// use scriptorium_core::ScriptureReference;
    ///
    /// let reference = ScriptureReference::parse("Doctrine and Covenants 1:31-32").unwrap();
    /// assert_eq!(reference.directory_name(), "Doctrine_and_Covenants_1_31-32");
    /// ```
    pub fn directory_name(&self) -> String {
        let mut name = String::new();
        let mut pending_separator = false;
        for c in self.to_string().chars() {
            if c.is_ascii_alphanumeric() || c == '-' {
                if pending_separator {
                    name.push('_');
                    pending_separator = false;
                }
                name.push(c);
            } else {
                pending_separator = !name.is_empty();
            }
        }
        name
    }
}

impl From<Verse> for ScriptureReference {
    fn from(verse: Verse) -> Self {
        Self::single(verse)
    }
}

impl FromStr for ScriptureReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = &self.start_verse;
        write!(f, "{}", start)?;
        let Some(end) = &self.end_verse else {
            return Ok(());
        };
        f.write_str("-")?;

        let same_book = start.book() == end.book();
        match (start.verse_number(), end.verse_number()) {
            // Chapter range: "3 Nephi 20-26"
            (None, None) if same_book => write!(f, "{}", end.chapter_number()),
            // A bare trailing number would read as a verse or chapter, so qualify fully
            _ if !same_book || end.is_whole_chapter() => write!(f, "{}", end),
            // Only one colon in the input makes a bare number an end verse, so a
            // chapter change (or a chapter-level start) needs "chapter:verse"
            (start_verse, Some(end_verse))
                if start.chapter_number() != end.chapter_number() || start_verse.is_none() =>
            {
                write!(f, "{}:{}", end.chapter_number(), end_verse)
            }
            (_, Some(end_verse)) => write!(f, "{}", end_verse),
            (_, None) => Ok(()),
        }
    }
}

/// Serde shape of a [`ScriptureReference`]; converting re-applies end normalization.
#[derive(Deserialize)]
struct ReferenceFields {
    start_verse: Verse,
    #[serde(default)]
    end_verse: Option<Verse>,
}

impl From<ReferenceFields> for ScriptureReference {
    fn from(fields: ReferenceFields) -> Self {
        ScriptureReference::new(fields.start_verse, fields.end_verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Book;

    fn verse(book: Book, chapter: u32, verse: Option<u32>) -> Verse {
        Verse::new(book, chapter, verse).unwrap()
    }

    #[test]
    fn end_equal_to_start_is_dropped() {
        let v = verse(Book::Alma, 32, Some(21));
        let reference = ScriptureReference::new(v, Some(v));
        assert_eq!(reference.end(), None);
        assert_eq!(reference, ScriptureReference::single(v));
    }

    #[test]
    fn renders_each_range_shape() {
        let cases = [
            (verse(Book::Jarom, 1, Some(1)), None, "Jarom 1:1"),
            (verse(Book::Jarom, 1, None), None, "Jarom 1"),
            (
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 1, Some(2))),
                "Jarom 1:1-2",
            ),
            (
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 2, Some(3))),
                "Jarom 1:1-2:3",
            ),
            (
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 2, None)),
                "Jarom 1:1-Jarom 2",
            ),
            (
                verse(Book::ThirdNephi, 20, None),
                Some(verse(Book::ThirdNephi, 26, None)),
                "3 Nephi 20-26",
            ),
            (
                verse(Book::Jarom, 1, None),
                Some(verse(Book::Jarom, 1, Some(5))),
                "Jarom 1-1:5",
            ),
            (
                verse(Book::ThirdNephi, 1, Some(1)),
                Some(verse(Book::FourthNephi, 1, None)),
                "3 Nephi 1:1-4 Nephi 1",
            ),
            (
                verse(Book::ThirdNephi, 1, Some(1)),
                Some(verse(Book::FourthNephi, 1, Some(2))),
                "3 Nephi 1:1-4 Nephi 1:2",
            ),
        ];
        for (start, end, expected) in cases {
            assert_eq!(ScriptureReference::new(start, end).to_string(), expected);
        }
    }

    #[test]
    fn single_chapter_detection() {
        let within = ScriptureReference::parse("Alma 32:21-43").unwrap();
        assert!(within.is_single_chapter());
        let across = ScriptureReference::parse("Alma 32:21-33:2").unwrap();
        assert!(!across.is_single_chapter());
    }

    #[test]
    fn parse_list_splits_on_semicolons() {
        let refs = ScriptureReference::parse_list("Ether 12:6-27; Moroni 10").unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].to_string(), "Ether 12:6-27");
        assert_eq!(refs[1].to_string(), "Moroni 10");

        assert!(ScriptureReference::parse_list("Ether 12; Nowhere 3").is_err());
    }

    #[test]
    fn directory_name_is_filesystem_safe() {
        let reference = ScriptureReference::parse("Joseph Smith—History 1:1-26").unwrap();
        assert_eq!(reference.directory_name(), "Joseph_Smith_History_1_1-26");
        let chapters = ScriptureReference::parse("3 Nephi 20-26").unwrap();
        assert_eq!(chapters.directory_name(), "3_Nephi_20-26");
    }

    #[test]
    fn deserialize_normalizes_end() {
        let json = r#"{
            "start_verse": {"book": "Enos", "chapter": 1, "verse": 4},
            "end_verse": {"book": "Enos", "chapter": 1, "verse": 4}
        }"#;
        let reference: ScriptureReference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.end(), None);
        assert_eq!(reference.to_string(), "Enos 1:4");
    }
}
