//! Client configuration for NCBI E-utilities requests
//!
//! NCBI asks every caller to identify itself with a tool name and a contact
//! email, and grants a higher request rate to callers with an API key. All of
//! that lives in one explicit [`ClientConfig`] value that is handed to the
//! client, so nothing here is process-wide.

use std::time::Duration;

use crate::rate_limit::RateLimiter;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_TOOL: &str = "pubmed-fetcher";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Requests per second NCBI allows without an API key
pub const NCBI_RATE_WITHOUT_KEY: f64 = 3.0;
/// Requests per second NCBI allows with an API key
pub const NCBI_RATE_WITH_KEY: f64 = 10.0;

/// Configuration for [`crate::PubMedClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key (raises the rate limit to 10 requests/second)
    pub api_key: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Explicit rate limit in requests per second
    pub rate_limit: Option<f64>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URL of the E-utilities endpoints
    pub base_url: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with NCBI defaults and no identity
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::ClientConfig;
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_tool("gene-survey");
    ///
    /// assert_eq!(config.effective_tool(), "gene-survey");
    /// ```
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            rate_limit: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
            user_agent: None,
        }
    }

    /// Set the NCBI API key
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email
    ///
    /// The value is passed through as given; NCBI does not require it to be
    /// a deliverable address.
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Override the rate limit (requests per second)
    ///
    /// Values that are not positive and finite are ignored in favour of the
    /// NCBI default.
    pub fn with_rate_limit(mut self, rate_limit: f64) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Set the HTTP timeout in seconds
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Point the client at a different E-utilities host
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Rate limit actually applied to requests
    pub fn effective_rate_limit(&self) -> f64 {
        self.rate_limit
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .unwrap_or(if self.api_key.is_some() {
                NCBI_RATE_WITH_KEY
            } else {
                NCBI_RATE_WITHOUT_KEY
            })
    }

    /// Base URL actually used, without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubmed-fetcher/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identity parameters appended to every E-utilities request
    ///
    /// Values are returned raw; callers URL-encode them.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }

    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
