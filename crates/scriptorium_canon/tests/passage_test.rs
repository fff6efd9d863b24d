//! Passage resolution against a synthetic catalog.

use scriptorium_canon::{Catalog, PassageExt, lesson_chapters};
use scriptorium_core::{Book, ScriptureReference, Verse};
use scriptorium_error::{CatalogErrorKind, ReferenceErrorKind, ScriptoriumErrorKind};

/// 3 Nephi 1-30 (chapter n has n + 2 verses), 4 Nephi 1:1-5, Mormon 1-2:1-4.
fn catalog() -> Catalog {
    let mut text = String::new();
    for chapter in 1..=30 {
        for verse in 1..=chapter + 2 {
            text.push_str(&format!("3 Nephi {chapter}:{verse}     Third Nephi {chapter}.{verse}\n"));
        }
    }
    for verse in 1..=5 {
        text.push_str(&format!("4 Nephi 1:{verse}     Fourth Nephi 1.{verse}\n"));
    }
    for chapter in 1..=2 {
        for verse in 1..=4 {
            text.push_str(&format!("Mormon {chapter}:{verse}     Mormon {chapter}.{verse}\n"));
        }
    }
    Catalog::parse(&text).unwrap()
}

fn reference(citation: &str) -> ScriptureReference {
    ScriptureReference::parse(citation).unwrap()
}

fn chapter(book: Book, number: u32) -> ScriptureReference {
    ScriptureReference::single(Verse::chapter(book, number).unwrap())
}

#[test]
fn test_chapter_range_splits_into_whole_chapters() {
    let pieces = reference("3 Nephi 20-26").split_chapters(&catalog()).unwrap();
    let expected: Vec<_> = (20..=26).map(|n| chapter(Book::ThirdNephi, n)).collect();
    assert_eq!(pieces, expected);
}

#[test]
fn test_verse_range_split_keeps_partial_ends() {
    let pieces = reference("3 Nephi 11:10-13:3").split_chapters(&catalog()).unwrap();
    let rendered: Vec<_> = pieces.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["3 Nephi 11:10-3 Nephi 11", "3 Nephi 12", "3 Nephi 13:1-3"]
    );
}

#[test]
fn test_cross_book_split_resets_chapter_counter() {
    let pieces = reference("3 Nephi 29:4-Mormon 2:2").split_chapters(&catalog()).unwrap();
    assert_eq!(
        pieces,
        vec![
            ScriptureReference::new(
                Verse::new(Book::ThirdNephi, 29, Some(4)).unwrap(),
                Some(Verse::chapter(Book::ThirdNephi, 29).unwrap()),
            ),
            chapter(Book::ThirdNephi, 30),
            chapter(Book::FourthNephi, 1),
            chapter(Book::Mormon, 1),
            reference("Mormon 2:1-2"),
        ]
    );
}

#[test]
fn test_split_pieces_cover_the_range() {
    let canon = catalog();
    for citation in [
        "3 Nephi 20-26",
        "3 Nephi 11:10-13:3",
        "3 Nephi 29:4-Mormon 2:2",
        "3 Nephi 30-Mormon 1",
    ] {
        let whole = reference(citation).scripture_text(&canon).unwrap();
        let pieces: Vec<String> = reference(citation)
            .split_chapters(&canon)
            .unwrap()
            .iter()
            .map(|piece| piece.scripture_text(&canon).unwrap())
            .collect();
        assert_eq!(pieces.join("\n"), whole, "{citation}");
    }
}

#[test]
fn test_range_text_defaults_endpoints() {
    let text = reference("3 Nephi 1-2").scripture_text(&catalog()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3 + 4);
    assert_eq!(lines[0], "3 Nephi 1:1 Third Nephi 1.1");
    assert_eq!(lines[6], "3 Nephi 2:4 Third Nephi 2.4");
}

#[test]
fn test_missing_endpoint_is_not_found() {
    let canon = catalog();
    for citation in ["3 Nephi 2:40", "Alma 32:21", "3 Nephi 29-31", "Alma 1"] {
        let err = reference(citation).scripture_text(&canon).unwrap_err();
        match err.kind() {
            ScriptoriumErrorKind::Catalog(e) => {
                assert!(matches!(e.kind, CatalogErrorKind::NotFound(_)), "{citation}")
            }
            other => panic!("{citation}: unexpected error {other}"),
        }
    }

    let err = reference("3 Nephi 29-31").split_chapters(&canon).unwrap_err();
    assert!(matches!(err.kind(), ScriptoriumErrorKind::Catalog(_)));
}

#[test]
fn test_inverted_range_is_reported() {
    let canon = catalog();
    let backwards = reference("3 Nephi 5:3-2");
    let err = backwards.scripture_text(&canon).unwrap_err();
    match err.kind() {
        ScriptoriumErrorKind::Reference(e) => {
            assert_eq!(e.kind, ReferenceErrorKind::InvertedRange("3 Nephi 5:3-2".to_string()))
        }
        other => panic!("unexpected error {other}"),
    }

    let err = reference("Mormon 2-3 Nephi 4").split_chapters(&canon).unwrap_err();
    assert!(err.is_reference_error());
}

#[test]
fn test_lesson_chapters_dedupes_in_order() {
    let references = ScriptureReference::parse_list("3 Nephi 12-13; 3 Nephi 13:1-3; 3 Nephi 11-12").unwrap();
    let chapters = lesson_chapters(&references, &catalog()).unwrap();
    assert_eq!(
        chapters,
        vec![
            chapter(Book::ThirdNephi, 12),
            chapter(Book::ThirdNephi, 13),
            reference("3 Nephi 13:1-3"),
            chapter(Book::ThirdNephi, 11),
        ]
    );
}
