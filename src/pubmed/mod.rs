//! PubMed search, fetch and record extraction
//!
//! This module talks to the ESearch and EFetch E-utilities and turns the
//! fetched XML into [`Record`]s.

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{ParsedRecords, Record, SkippedRecord};
pub use parser::{Field, parse_records};
pub use query::{DEFAULT_DATABASE, DEFAULT_MAX_RESULTS, SearchParams, SortOrder};
