//! # PubMed Fetcher
//!
//! Searches PubMed for a term, fetches the matching records and writes a
//! plain-text citation report.
//!
//! ## Features
//!
//! - **Search and fetch**: one ESearch and one EFetch request per run
//! - **Tolerant extraction**: missing fields fall back to placeholder text,
//!   malformed records are skipped without aborting the batch
//! - **NCBI compliance**: contact email, tool name and rate limiting on
//!   every request
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_fetcher::{LiteratureFetcher, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = LiteratureFetcher::new("researcher@university.edu")
//!         .with_output_path("sufu.txt");
//!
//!     let params = SearchParams::new("SUFU").with_max_results(20);
//!     let summary = fetcher.fetch_and_save_with(&params).await?;
//!
//!     println!("Wrote {} records", summary.records_written);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetcher;
pub mod pubmed;
pub mod rate_limit;
pub mod report;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use fetcher::{DEFAULT_OUTPUT_PATH, FetchSummary, LiteratureFetcher};
pub use pubmed::{
    DEFAULT_DATABASE, DEFAULT_MAX_RESULTS, ParsedRecords, PubMedClient, Record, SearchParams,
    SkippedRecord, SortOrder,
};
pub use report::{render_report, write_report};
