use scriptorium_core::{Book, ReferenceGrammar, ScriptureReference, Verse};
use scriptorium_error::ReferenceErrorKind;

fn verse(book: Book, chapter: u32, verse: Option<u32>) -> Verse {
    Verse::new(book, chapter, verse).unwrap()
}

fn reference(start: Verse, end: Option<Verse>) -> ScriptureReference {
    ScriptureReference::new(start, end)
}

#[test]
fn test_parse_and_render_known_citations() {
    let cases = [
        ("Jarom 1:1", reference(verse(Book::Jarom, 1, Some(1)), None)),
        (
            "Jarom 1:1-2",
            reference(
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 1, Some(2))),
            ),
        ),
        (
            "Jarom 1:1-2:3",
            reference(
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 2, Some(3))),
            ),
        ),
        (
            "Jarom 1:1-Jarom 2",
            reference(
                verse(Book::Jarom, 1, Some(1)),
                Some(verse(Book::Jarom, 2, None)),
            ),
        ),
        ("1 Nephi 1:1", reference(verse(Book::FirstNephi, 1, Some(1)), None)),
        (
            "3 Nephi 1:1-4 Nephi 1",
            reference(
                verse(Book::ThirdNephi, 1, Some(1)),
                Some(verse(Book::FourthNephi, 1, None)),
            ),
        ),
        (
            "3 Nephi 1:1-4 Nephi 1:2",
            reference(
                verse(Book::ThirdNephi, 1, Some(1)),
                Some(verse(Book::FourthNephi, 1, Some(2))),
            ),
        ),
        (
            "Words of Mormon 1:3",
            reference(verse(Book::WordsOfMormon, 1, Some(3)), None),
        ),
        (
            "3 Nephi 20-26",
            reference(
                verse(Book::ThirdNephi, 20, None),
                Some(verse(Book::ThirdNephi, 26, None)),
            ),
        ),
    ];

    for (citation, expected) in cases {
        let parsed = ScriptureReference::parse(citation).unwrap();
        assert_eq!(parsed, expected, "parsing {citation}");
        assert_eq!(expected.to_string(), citation, "rendering {citation}");
    }
}

#[test]
fn test_single_colon_makes_trailing_number_a_verse() {
    let parsed = ScriptureReference::parse("Doctrine and Covenants 1:31-32").unwrap();
    assert_eq!(
        parsed.end(),
        Some(&verse(Book::DoctrineAndCovenants, 1, Some(32)))
    );
}

#[test]
fn test_joseph_smith_dash_variants_normalize() {
    let expected = reference(
        verse(Book::JosephSmithHistory, 1, Some(1)),
        Some(verse(Book::JosephSmithHistory, 1, Some(26))),
    );
    for citation in [
        "Joseph Smith-History 1:1-26",
        "Joseph Smith—History 1:1-26",
        "Joseph Smith–History 1:1–26",
    ] {
        assert_eq!(ScriptureReference::parse(citation).unwrap(), expected);
    }
    assert_eq!(expected.to_string(), "Joseph Smith—History 1:1-26");

    let matthew = ScriptureReference::parse("Joseph Smith-Matthew 1:4").unwrap();
    assert_eq!(matthew.start().book(), Book::JosephSmithMatthew);
}

#[test]
fn test_en_dash_chapter_range() {
    let parsed = ScriptureReference::parse("3 Nephi 8–11").unwrap();
    assert_eq!(parsed.start(), &verse(Book::ThirdNephi, 8, None));
    assert_eq!(parsed.end(), Some(&verse(Book::ThirdNephi, 11, None)));
    assert_eq!(parsed.to_string(), "3 Nephi 8-11");
}

#[test]
fn test_unmatched_input_is_a_syntax_error() {
    for citation in ["", "12:3", "Alma", "-4"] {
        let err = ScriptureReference::parse(citation).unwrap_err();
        assert!(
            matches!(err.kind, ReferenceErrorKind::Syntax(_)),
            "{citation}: {err}"
        );
    }
}

#[test]
fn test_unknown_book_is_reported() {
    let err = ScriptureReference::parse("Hezekiah 3:1").unwrap_err();
    assert_eq!(err.kind, ReferenceErrorKind::UnknownBook("Hezekiah".to_string()));

    let err = ScriptureReference::parse("Alma 1:1-Hezekiah 2").unwrap_err();
    assert_eq!(err.kind, ReferenceErrorKind::UnknownBook("Hezekiah".to_string()));

    // Book names are case sensitive
    assert!(ScriptureReference::parse("alma 32:21").is_err());
}

#[test]
fn test_injected_grammar_matches_shared() {
    let grammar = ReferenceGrammar::new();
    for citation in ["Ether 12:27", "Mosiah 2-5", "Moroni 10:3-5"] {
        assert_eq!(
            grammar.parse(citation).unwrap(),
            ReferenceGrammar::shared().parse(citation).unwrap()
        );
    }
}

#[test]
fn test_reference_json_shape() {
    let parsed = ScriptureReference::parse("Alma 32:21-43").unwrap();
    let json = serde_json::to_value(parsed).unwrap();
    assert_eq!(json["start_verse"]["book"], "Alma");
    assert_eq!(json["start_verse"]["chapter"], 32);
    assert_eq!(json["end_verse"]["verse"], 43);

    let back: ScriptureReference = serde_json::from_value(json).unwrap();
    assert_eq!(back, parsed);
}
