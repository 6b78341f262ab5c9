//! Search-fetch-parse-write pipeline
//!
//! [`LiteratureFetcher`] runs the four steps strictly in sequence:
//! ESearch for identifiers, one EFetch for all of them, record extraction,
//! and the report write. Any failure in the network steps, in parsing the
//! document as a whole, or in the write ends the run. A record that fails to
//! extract is skipped and the run continues.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::pubmed::models::SkippedRecord;
use crate::pubmed::{PubMedClient, SearchParams, parse_records};
use crate::report::write_report;

/// Report file written when no other path is set
pub const DEFAULT_OUTPUT_PATH: &str = "SUFU_literature.txt";

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Identifiers returned by the search step
    pub ids_found: usize,
    /// Records written to the report
    pub records_written: usize,
    /// Record nodes dropped during extraction
    pub skipped: Vec<SkippedRecord>,
    pub output_path: PathBuf,
}

/// Fetches PubMed records for a search term and saves them as a text report
///
/// # Example
///
/// ```no_run
/// use pubmed_fetcher::LiteratureFetcher;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let fetcher = LiteratureFetcher::new("youremail@youremail.com");
///     let summary = fetcher.fetch_and_save("SUFU").await?;
///     println!("{} records written", summary.records_written);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LiteratureFetcher {
    client: PubMedClient,
    output_path: PathBuf,
}

impl LiteratureFetcher {
    /// Create a fetcher that identifies itself with `contact`
    ///
    /// The contact string is attached to every request this fetcher makes.
    /// It is not validated.
    pub fn new<S: Into<String>>(contact: S) -> Self {
        Self::with_config(ClientConfig::new().with_email(contact))
    }

    /// Create a fetcher from a full client configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: PubMedClient::with_config(config),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Write the report to `path` instead of the default
    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Search `term` in PubMed (10 newest results) and save the report
    pub async fn fetch_and_save(&self, term: &str) -> Result<FetchSummary> {
        self.fetch_and_save_with(&SearchParams::new(term)).await
    }

    /// Run the full pipeline for `params`
    ///
    /// Prints "Searching for papers..." before the search and
    /// "Papers saved to <path>" after the report is written.
    #[instrument(skip(self, params), fields(term = %params.term))]
    pub async fn fetch_and_save_with(&self, params: &SearchParams) -> Result<FetchSummary> {
        println!("Searching for papers...");

        let ids = self.client.search_ids(params).await?;
        let xml = self.client.fetch_xml(&params.database, &ids).await?;
        let parsed = parse_records(&xml)?;

        write_report(&self.output_path, &parsed.records)?;
        println!("Papers saved to {}", self.output_path.display());

        info!(
            ids_found = ids.len(),
            records_written = parsed.records.len(),
            skipped = parsed.skipped.len(),
            "Fetch completed"
        );

        Ok(FetchSummary {
            ids_found: ids.len(),
            records_written: parsed.records.len(),
            skipped: parsed.skipped,
            output_path: self.output_path.clone(),
        })
    }
}
