use std::result;

use thiserror::Error;

/// Error types for search, fetch, parse and report operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Invalid query structure or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Search limit exceeded
    ///
    /// ESearch refuses to page past this many identifiers in one request.
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Build an [`PubMedError::IoError`] that names the path involved
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        PubMedError::IoError {
            message: format!("{}: {}", path.display(), err),
        }
    }
}
