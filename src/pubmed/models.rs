use serde::{Deserialize, Serialize};

/// One bibliographic entry extracted from an EFetch document
///
/// Every field is already resolved: a value missing from the document has
/// been replaced by its fallback text (see [`crate::pubmed::parser::Field`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// PubMed ID
    pub pmid: String,
    pub title: String,
    /// Author names as "First Last", in document order, empty names omitted
    pub authors: Vec<String>,
    pub journal: String,
    /// Publication year
    pub year: String,
    /// Page range, e.g. "1-5"
    pub pages: String,
}

impl Record {
    /// Authors joined with ", " (empty when there are none)
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// A record node that could not be extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Zero-based position of the node among all record nodes
    pub index: usize,
    /// Error text reported for the node
    pub reason: String,
}

/// Result of parsing one EFetch document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecords {
    /// Extracted records in document order
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRecord>,
}
