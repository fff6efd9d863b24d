//! The closed, ordered canon of scripture books.

use scriptorium_error::{ReferenceError, ReferenceErrorKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A book of scripture.
///
/// Declaration order is canon order: Old Testament, New Testament, Book of Mormon,
/// Doctrine and Covenants, Pearl of Great Price. The derived `Ord` follows it, so
/// cross-book comparisons never fall back to comparing names.
///
/// # Examples
///
/// ```
/// use scriptorium_core::Book;
///
/// let book = Book::from_name("3 Nephi").unwrap();
/// assert_eq!(book, Book::ThirdNephi);
/// assert!(Book::Alma < Book::ThirdNephi);
/// assert_eq!(Book::JosephSmithHistory.to_string(), "Joseph Smith—History");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[allow(missing_docs)]
pub enum Book {
    // Old Testament
    #[strum(serialize = "Genesis")]
    Genesis,
    #[strum(serialize = "Exodus")]
    Exodus,
    #[strum(serialize = "Leviticus")]
    Leviticus,
    #[strum(serialize = "Numbers")]
    Numbers,
    #[strum(serialize = "Deuteronomy")]
    Deuteronomy,
    #[strum(serialize = "Joshua")]
    Joshua,
    #[strum(serialize = "Judges")]
    Judges,
    #[strum(serialize = "Ruth")]
    Ruth,
    #[strum(serialize = "1 Samuel")]
    FirstSamuel,
    #[strum(serialize = "2 Samuel")]
    SecondSamuel,
    #[strum(serialize = "1 Kings")]
    FirstKings,
    #[strum(serialize = "2 Kings")]
    SecondKings,
    #[strum(serialize = "1 Chronicles")]
    FirstChronicles,
    #[strum(serialize = "2 Chronicles")]
    SecondChronicles,
    #[strum(serialize = "Ezra")]
    Ezra,
    #[strum(serialize = "Nehemiah")]
    Nehemiah,
    #[strum(serialize = "Esther")]
    Esther,
    #[strum(serialize = "Job")]
    Job,
    #[strum(serialize = "Psalms")]
    Psalms,
    #[strum(serialize = "Proverbs")]
    Proverbs,
    #[strum(serialize = "Ecclesiastes")]
    Ecclesiastes,
    #[strum(serialize = "Song of Solomon")]
    SongOfSolomon,
    #[strum(serialize = "Isaiah")]
    Isaiah,
    #[strum(serialize = "Jeremiah")]
    Jeremiah,
    #[strum(serialize = "Lamentations")]
    Lamentations,
    #[strum(serialize = "Ezekiel")]
    Ezekiel,
    #[strum(serialize = "Daniel")]
    Daniel,
    #[strum(serialize = "Hosea")]
    Hosea,
    #[strum(serialize = "Joel")]
    Joel,
    #[strum(serialize = "Amos")]
    Amos,
    #[strum(serialize = "Obadiah")]
    Obadiah,
    #[strum(serialize = "Jonah")]
    Jonah,
    #[strum(serialize = "Micah")]
    Micah,
    #[strum(serialize = "Nahum")]
    Nahum,
    #[strum(serialize = "Habakkuk")]
    Habakkuk,
    #[strum(serialize = "Zephaniah")]
    Zephaniah,
    #[strum(serialize = "Haggai")]
    Haggai,
    #[strum(serialize = "Zechariah")]
    Zechariah,
    #[strum(serialize = "Malachi")]
    Malachi,
    // New Testament
    #[strum(serialize = "Matthew")]
    Matthew,
    #[strum(serialize = "Mark")]
    Mark,
    #[strum(serialize = "Luke")]
    Luke,
    #[strum(serialize = "John")]
    John,
    #[strum(serialize = "Acts")]
    Acts,
    #[strum(serialize = "Romans")]
    Romans,
    #[strum(serialize = "1 Corinthians")]
    FirstCorinthians,
    #[strum(serialize = "2 Corinthians")]
    SecondCorinthians,
    #[strum(serialize = "Galatians")]
    Galatians,
    #[strum(serialize = "Ephesians")]
    Ephesians,
    #[strum(serialize = "Philippians")]
    Philippians,
    #[strum(serialize = "Colossians")]
    Colossians,
    #[strum(serialize = "1 Thessalonians")]
    FirstThessalonians,
    #[strum(serialize = "2 Thessalonians")]
    SecondThessalonians,
    #[strum(serialize = "1 Timothy")]
    FirstTimothy,
    #[strum(serialize = "2 Timothy")]
    SecondTimothy,
    #[strum(serialize = "Titus")]
    Titus,
    #[strum(serialize = "Philemon")]
    Philemon,
    #[strum(serialize = "Hebrews")]
    Hebrews,
    #[strum(serialize = "James")]
    James,
    #[strum(serialize = "1 Peter")]
    FirstPeter,
    #[strum(serialize = "2 Peter")]
    SecondPeter,
    #[strum(serialize = "1 John")]
    FirstJohn,
    #[strum(serialize = "2 John")]
    SecondJohn,
    #[strum(serialize = "3 John")]
    ThirdJohn,
    #[strum(serialize = "Jude")]
    Jude,
    #[strum(serialize = "Revelation")]
    Revelation,
    // Book of Mormon
    #[strum(serialize = "1 Nephi")]
    FirstNephi,
    #[strum(serialize = "2 Nephi")]
    SecondNephi,
    #[strum(serialize = "Jacob")]
    Jacob,
    #[strum(serialize = "Enos")]
    Enos,
    #[strum(serialize = "Jarom")]
    Jarom,
    #[strum(serialize = "Omni")]
    Omni,
    #[strum(serialize = "Words of Mormon")]
    WordsOfMormon,
    #[strum(serialize = "Mosiah")]
    Mosiah,
    #[strum(serialize = "Alma")]
    Alma,
    #[strum(serialize = "Helaman")]
    Helaman,
    #[strum(serialize = "3 Nephi")]
    ThirdNephi,
    #[strum(serialize = "4 Nephi")]
    FourthNephi,
    #[strum(serialize = "Mormon")]
    Mormon,
    #[strum(serialize = "Ether")]
    Ether,
    #[strum(serialize = "Moroni")]
    Moroni,
    // Doctrine and Covenants
    #[strum(serialize = "Doctrine and Covenants")]
    DoctrineAndCovenants,
    // Pearl of Great Price
    #[strum(serialize = "Moses")]
    Moses,
    #[strum(serialize = "Abraham")]
    Abraham,
    #[strum(serialize = "Articles of Faith")]
    ArticlesOfFaith,
    #[strum(serialize = "Joseph Smith—History")]
    JosephSmithHistory,
    #[strum(serialize = "Joseph Smith—Matthew")]
    JosephSmithMatthew,
}

impl Book {
    /// Look up a book by its canonical name.
    ///
    /// The name must match exactly; citation text should go through
    /// [`ReferenceGrammar`](crate::ReferenceGrammar), which normalizes whitespace
    /// and dash variants first.
    pub fn from_name(name: &str) -> Result<Self, ReferenceError> {
        Self::from_str(name)
            .map_err(|_| ReferenceError::new(ReferenceErrorKind::UnknownBook(name.to_string())))
    }

    /// Canonical name of the book.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Zero-based position in canon order.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Every book, in canon order.
    pub fn canon() -> impl Iterator<Item = Book> {
        Self::iter()
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}
