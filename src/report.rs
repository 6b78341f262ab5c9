//! Plain-text report of extracted records
//!
//! Each record becomes four lines followed by a blank line and an 80-dash
//! rule:
//!
//! ```text
//! PMID: 123
//! Title: T1
//! Authors: Jane Doe
//! Journal: J1 (2020), pp. 1-5
//!
//! --------------------------------------------------------------------------------
//! ```
//!
//! Field text is written verbatim. A field containing a newline breaks the
//! line layout; nothing is escaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::Record;

const RULE_WIDTH: usize = 80;

/// Render the report for `records` in order
pub fn render_report(records: &[Record]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    for record in records {
        out.push_str(&format!("PMID: {}\n", record.pmid));
        out.push_str(&format!("Title: {}\n", record.title));
        out.push_str(&format!("Authors: {}\n", record.author_line()));
        out.push_str(&format!(
            "Journal: {} ({}), pp. {}\n",
            record.journal, record.year, record.pages
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }

    out
}

/// Write the report to `path`, replacing any existing file
///
/// The file is created even when `records` is empty.
#[instrument(skip(records), fields(path = %path.display(), records = records.len()))]
pub fn write_report(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|e| PubMedError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_report(records).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PubMedError::io(path, e))?;

    debug!("Report written");
    Ok(())
}
