//! Citation command handlers.

use scriptorium::{
    Book, JsonError, PassageExt, ScriptoriumConfig, ScriptoriumResult, ScriptureReference,
    lesson_chapters,
};
use tracing::{debug, instrument};

/// Print the canonical form of each citation, or the parsed structure as JSON.
#[instrument]
pub fn parse_citation(citation: &str, json: bool) -> ScriptoriumResult<()> {
    let references = ScriptureReference::parse_list(citation)?;

    if json {
        let output = serde_json::to_string_pretty(&references)
            .map_err(|e| JsonError::new(e.to_string()))?;
        println!("{}", output);
    } else {
        for reference in &references {
            println!("{}", reference);
        }
    }

    Ok(())
}

/// Print the text of each citation, separated by blank lines.
#[instrument(skip(config))]
pub async fn text_of_citation(config: &ScriptoriumConfig, citation: &str) -> ScriptoriumResult<()> {
    let references = ScriptureReference::parse_list(citation)?;
    let catalog = config.catalog_loader()?.load().await?;

    let mut passages = Vec::with_capacity(references.len());
    for reference in &references {
        passages.push(reference.scripture_text(catalog.as_ref())?);
    }
    println!("{}", passages.join("\n\n"));

    Ok(())
}

/// Print the distinct chapters covered by the citations, one per line.
#[instrument(skip(config))]
pub async fn split_citation(config: &ScriptoriumConfig, citation: &str) -> ScriptoriumResult<()> {
    let references = ScriptureReference::parse_list(citation)?;
    let catalog = config.catalog_loader()?.load().await?;

    let chapters = lesson_chapters(&references, catalog.as_ref())?;
    debug!(chapters = chapters.len(), "Split citation");
    for chapter in &chapters {
        println!("{}", chapter);
    }

    Ok(())
}

/// Print every book of the canon with its position.
pub fn list_books() {
    for book in Book::canon() {
        println!("{:>2}  {}", book.position() + 1, book);
    }
}
