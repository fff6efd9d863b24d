//! Citation grammar: turns loosely formatted citation text into references.

use crate::{Book, ScriptureReference, Verse};
use regex::{Captures, Regex};
use scriptorium_error::{ReferenceError, ReferenceErrorKind};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Hyphen, hyphen, non-breaking hyphen, figure dash, en dash, em dash.
const DASHES: &str = "[\\-\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}]";

static SHARED: OnceLock<ReferenceGrammar> = OnceLock::new();

/// Compiled citation grammar.
///
/// Matching starts at the beginning of the input and ignores anything after the
/// citation. The grammar, informally:
///
/// ```text
/// ref   := BOOK chapter (":" verse)? (DASH BOOK? number (":" verse)?)?
/// BOOK  := digits? letters-and-spaces | "Joseph Smith" DASH ("History" | "Matthew")
/// ```
///
/// A bare number after the dash is an end **verse** when the whole input holds
/// exactly one `:` and no end book is named (`Jarom 1:1-2`); otherwise it is an
/// end **chapter** (`3 Nephi 20-26`, `Jarom 1:1-Jarom 2`). The colon count covers
/// the entire input, not just the range clause.
///
/// Chapter and verse numbers are ASCII digits only; other Unicode digits do not match.
///
/// Build one with [`ReferenceGrammar::new`] and pass it where parsing happens, or
/// use the process-wide [`ReferenceGrammar::shared`] instance.
#[derive(Debug, Clone)]
pub struct ReferenceGrammar {
    citation: Regex,
    whitespace: Regex,
    joseph_smith: Regex,
}

impl ReferenceGrammar {
    /// Compile the grammar.
    pub fn new() -> Self {
        let book = format!(r"(?:[0-9]*\s*[a-zA-Z\s]+|Joseph Smith{DASHES}(?:History|Matthew))");
        let pattern = format!(
            r"^({book})\s*([0-9]+)(?::([0-9]+))?(\s*{DASHES}\s*({book})?\s*([0-9]+)(?:\s*([a-z]+)\s*([0-9]+))?(?::([0-9]+))?)?"
        );
        let citation = Regex::new(&pattern).expect("Valid citation regex");
        let whitespace = Regex::new(r"\s+").expect("Valid whitespace regex");
        let joseph_smith =
            Regex::new(&format!("Joseph Smith{DASHES}")).expect("Valid Joseph Smith regex");

        Self {
            citation,
            whitespace,
            joseph_smith,
        }
    }

    /// Process-wide grammar, compiled on first use.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Parse one citation.
    ///
    /// # Errors
    ///
    /// `Syntax` when the text does not match the grammar or a number is zero or
    /// out of range; `UnknownBook` when a book name is not in the canon.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_core::{Book, ReferenceGrammar};
    ///
    /// let grammar = ReferenceGrammar::new();
    /// let reference = grammar.parse("3 Nephi 1:1-4 Nephi 1:2").unwrap();
    /// assert_eq!(reference.start().book(), Book::ThirdNephi);
    /// assert_eq!(reference.end().unwrap().book(), Book::FourthNephi);
    /// ```
    pub fn parse(&self, citation: &str) -> Result<ScriptureReference, ReferenceError> {
        let captures = self.citation.captures(citation).ok_or_else(|| {
            ReferenceError::new(ReferenceErrorKind::Syntax(citation.to_string()))
        })?;

        let start_chapter = number(&captures, 2, citation)?.ok_or_else(|| {
            ReferenceError::new(ReferenceErrorKind::Syntax(citation.to_string()))
        })?;
        let start_verse = number(&captures, 3, citation)?;
        let end_book = captures.get(5).map(|m| m.as_str());
        let mut end_chapter = number(&captures, 6, citation)?;
        let mut end_verse = number(&captures, 9, citation)?;

        // The range number doubles as an end verse when the citation has a single colon.
        if citation.matches(':').count() == 1
            && end_chapter.is_some()
            && end_verse.is_none()
            && end_book.is_none()
        {
            end_verse = end_chapter;
            end_chapter = Some(start_chapter);
        }

        let start_book = self.book(&captures[1])?;
        let end_book = match end_book {
            Some(name) => self.book(name)?,
            None => start_book,
        };

        let start = Verse::new(start_book, start_chapter, start_verse)?;
        let end = match (end_chapter, end_verse) {
            (None, None) => None,
            (None, Some(verse)) => Some(Verse::new(end_book, start_chapter, Some(verse))?),
            (Some(chapter), verse) => Some(Verse::new(end_book, chapter, verse)?),
        };

        let reference = ScriptureReference::new(start, end);
        debug!(citation, reference = %reference, "Parsed scripture reference");
        Ok(reference)
    }

    /// Parse citations lifted out of a document, skipping the ones that fail.
    ///
    /// HTML non-breaking space artifacts are replaced first. Failures are logged
    /// and dropped so one bad citation does not sink the rest.
    pub fn parse_citations<I, S>(&self, citations: I) -> Vec<ScriptureReference>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        citations
            .into_iter()
            .filter_map(|citation| {
                let cleaned = citation
                    .as_ref()
                    .replace("&nbsp", " ")
                    .replace('\u{a0}', " ");
                match self.parse(&cleaned) {
                    Ok(reference) => Some(reference),
                    Err(e) => {
                        warn!(citation = %cleaned, error = %e, "Could not parse scripture reference");
                        None
                    }
                }
            })
            .collect()
    }

    /// Normalize a matched book name and look it up in the canon.
    fn book(&self, raw: &str) -> Result<Book, ReferenceError> {
        let name = self.whitespace.replace_all(raw.trim(), " ");
        let name = self.joseph_smith.replace_all(&name, "Joseph Smith—");
        Book::from_name(&name)
    }
}

impl Default for ReferenceGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Read capture group `index` as a positive-or-zero number, if present.
fn number(captures: &Captures<'_>, index: usize, citation: &str) -> Result<Option<u32>, ReferenceError> {
    captures
        .get(index)
        .map(|m| {
            m.as_str().parse::<u32>().map_err(|e| {
                ReferenceError::new(ReferenceErrorKind::Syntax(format!(
                    "{}: {}: {}",
                    citation,
                    m.as_str(),
                    e
                )))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_in_book_names_is_collapsed() {
        let grammar = ReferenceGrammar::new();
        let reference = grammar.parse("Words\u{a0}of  Mormon 1:3").unwrap();
        assert_eq!(reference.start().book(), Book::WordsOfMormon);
    }

    #[test]
    fn every_dash_variant_separates_a_range() {
        let grammar = ReferenceGrammar::new();
        for dash in ['-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}'] {
            let reference = grammar.parse(&format!("Alma 32:21{dash}43")).unwrap();
            assert_eq!(reference.to_string(), "Alma 32:21-43");
        }
    }

    #[test]
    fn trailing_text_is_ignored() {
        let grammar = ReferenceGrammar::new();
        let reference = grammar.parse("Moroni 10:3-5, 32").unwrap();
        assert_eq!(reference.to_string(), "Moroni 10:3-5");
    }

    #[test]
    fn zero_and_overflow_are_syntax_errors() {
        let grammar = ReferenceGrammar::new();
        for citation in ["Jarom 0:1", "Jarom 1:0", "Jarom 1:99999999999"] {
            let err = grammar.parse(citation).unwrap_err();
            assert!(matches!(err.kind, ReferenceErrorKind::Syntax(_)), "{citation}");
        }
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        let grammar = ReferenceGrammar::new();
        let citation = "Alma \u{663}\u{662}:\u{662}\u{661}";
        let err = grammar.parse(citation).unwrap_err();
        assert_eq!(err.kind, ReferenceErrorKind::Syntax(citation.to_string()));
    }

    #[test]
    fn parse_citations_skips_failures() {
        let grammar = ReferenceGrammar::new();
        let refs = grammar.parse_citations(["Ether&nbsp12:27", "see above", "Enos\u{a0}1:4"]);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].to_string(), "Ether 12:27");
        assert_eq!(refs[1].to_string(), "Enos 1:4");
    }
}
