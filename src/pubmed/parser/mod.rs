//! PubMed EFetch XML parser
//!
//! Parsing happens in two passes. The first walks the whole document with a
//! streaming reader and slices out every `<PubmedArticle>` element; a document
//! that is not well-formed fails here and nothing is returned. The second pass
//! deserializes each slice on its own, so a record with an unexpected shape is
//! reported and skipped while its neighbours are still extracted.
//!
//! # Module Organization
//!
//! - `preprocessing` - inline tag stripping
//! - `fields` - field paths and fallback texts
//! - `xml_types` - serde types for the record subset we read

mod fields;
mod preprocessing;
mod xml_types;

pub use fields::{FIELD_TABLE, Field, resolve_or_fallback};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::{ParsedRecords, Record, SkippedRecord};
use preprocessing::strip_inline_html_tags;
use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use tracing::{debug, instrument, warn};
use xml_types::PubmedArticleXml;

const RECORD_ELEMENT: &[u8] = b"PubmedArticle";

/// Parse every `<PubmedArticle>` in an EFetch response
///
/// Records come back in document order. Records whose XML cannot be
/// deserialized are logged, listed in [`ParsedRecords::skipped`] and left out
/// of [`ParsedRecords::records`]. A blank payload yields no records.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document as a whole is not
/// well-formed XML.
///
/// # Example
///
/// ```
/// use pubmed_fetcher::pubmed::parser::parse_records;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>123</PMID>
///       <Article><ArticleTitle>T1</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let parsed = parse_records(xml)?;
/// assert_eq!(parsed.records[0].pmid, "123");
/// assert_eq!(parsed.records[0].journal, "No journal");
/// # Ok::<(), pubmed_fetcher::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_records(xml: &str) -> Result<ParsedRecords> {
    if xml.trim().is_empty() {
        debug!("Empty EFetch payload");
        return Ok(ParsedRecords::default());
    }

    let cleaned = strip_inline_html_tags(xml);
    let fragments = split_record_fragments(&cleaned)?;
    debug!(record_nodes = fragments.len(), "Located record nodes");

    let mut parsed = ParsedRecords::default();
    for (index, fragment) in fragments.into_iter().enumerate() {
        match extract_record(fragment) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                warn!(index, "Skipping one article due to error: {}", e);
                parsed.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}

/// Extract one record from the XML of a single `<PubmedArticle>` element
pub fn extract_record(fragment: &str) -> Result<Record> {
    let article: PubmedArticleXml = from_str(fragment)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize record: {}", e)))?;

    Ok(Record {
        pmid: Field::Pmid.resolve(&article),
        title: Field::Title.resolve(&article),
        authors: article.author_names(),
        journal: Field::Journal.resolve(&article),
        year: Field::Year.resolve(&article),
        pages: Field::Pages.resolve(&article),
    })
}

/// Slice the document into the raw text of each record element
fn split_record_fragments(xml: &str) -> Result<Vec<&str>> {
    let mut reader = Reader::from_str(xml);
    let mut fragments = Vec::new();

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| xml_error(&reader, e))?;

        match event {
            Event::Start(e) if e.local_name().as_ref() == RECORD_ELEMENT => {
                reader
                    .read_to_end(e.name())
                    .map_err(|e| xml_error(&reader, e))?;
                let end = reader.buffer_position() as usize;
                fragments.push(&xml[start..end]);
            }
            Event::Empty(e) if e.local_name().as_ref() == RECORD_ELEMENT => {
                let end = reader.buffer_position() as usize;
                fragments.push(&xml[start..end]);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fragments)
}

fn xml_error(reader: &Reader<&[u8]>, err: quick_xml::Error) -> PubMedError {
    PubMedError::XmlError(format!(
        "error near byte {}: {}",
        reader.buffer_position(),
        err
    ))
}
