//! Search parameters for the ESearch step

use crate::error::{PubMedError, Result};

/// Database searched when none is given
pub const DEFAULT_DATABASE: &str = "pubmed";
/// Result cap used when none is given
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Largest `retmax` ESearch honours in a single request
pub const MAX_RETRIEVABLE: usize = 10_000;

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Best match first (NCBI default)
    Relevance,
    /// Most recent publication date first
    #[default]
    PublicationDate,
    /// Alphabetical by first author
    FirstAuthor,
    /// Alphabetical by journal name
    JournalName,
}

impl SortOrder {
    /// Value of the `sort` query parameter
    pub fn as_api_param(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PublicationDate => "pub_date",
            SortOrder::FirstAuthor => "Author",
            SortOrder::JournalName => "JournalName",
        }
    }
}

/// One search request: term, database, result cap and sort order
///
/// # Example
///
/// ```
/// use pubmed_fetcher::{SearchParams, SortOrder};
///
/// let params = SearchParams::new("SUFU").with_max_results(25);
/// assert_eq!(params.database, "pubmed");
/// assert_eq!(params.sort, SortOrder::PublicationDate);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub term: String,
    pub database: String,
    pub max_results: usize,
    pub sort: SortOrder,
}

impl SearchParams {
    pub fn new<S: Into<String>>(term: S) -> Self {
        Self {
            term: term.into(),
            database: DEFAULT_DATABASE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            sort: SortOrder::PublicationDate,
        }
    }

    pub fn with_database<S: Into<String>>(mut self, database: S) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Check the result cap is within what ESearch accepts
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(PubMedError::InvalidQuery(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.max_results > MAX_RETRIEVABLE {
            return Err(PubMedError::SearchLimitExceeded {
                requested: self.max_results,
                maximum: MAX_RETRIEVABLE,
            });
        }
        Ok(())
    }
}
