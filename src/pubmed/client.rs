use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::query::SearchParams;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Client for the ESearch and EFetch E-utilities
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new client with default configuration
    ///
    /// Uses default NCBI rate limiting (3 requests/second) and no contact
    /// email. Use [`PubMedClient::with_config`] to identify yourself.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@university.edu");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve a search term to an ordered list of record identifiers
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidQuery` / `SearchLimitExceeded` - if the result cap is out of range
    /// * `PubMedError::RequestError` - if the HTTP request fails
    /// * `PubMedError::ApiError` - on a non-success status or an `ERROR` in the response
    /// * `PubMedError::JsonError` - if the response is not the expected JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetcher::{PubMedClient, SearchParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let ids = client.search_ids(&SearchParams::new("SUFU")).await?;
    ///     println!("Found {} articles", ids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, params), fields(term = %params.term, db = %params.database, limit = params.max_results))]
    pub async fn search_ids(&self, params: &SearchParams) -> Result<Vec<String>> {
        params.validate()?;

        let url = format!(
            "{}/esearch.fcgi?db={}&term={}&retmax={}&retmode=json&sort={}",
            self.base_url,
            urlencoding::encode(&params.database),
            urlencoding::encode(&params.term),
            params.max_results,
            params.sort.as_api_param()
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(message) = search_result.esearchresult.error {
            warn!(error = %message, "ESearch returned an error");
            return Err(PubMedError::ApiError {
                status: 200,
                message,
            });
        }

        if let Some(translation) = &search_result.esearchresult.querytranslation {
            debug!(query_translation = %translation, "PubMed query translation");
        }

        let ids = search_result.esearchresult.idlist;
        info!(
            results_found = ids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("?"),
            "Search completed successfully"
        );

        Ok(ids)
    }

    /// Fetch the full records for `ids` as one XML document
    ///
    /// All identifiers go into a single request. An empty list is still sent
    /// (as an empty `id` parameter); what comes back is up to the server.
    #[instrument(skip(self, ids), fields(db = %database, ids_count = ids.len()))]
    pub async fn fetch_xml(&self, database: &str, ids: &[String]) -> Result<String> {
        let url = format!(
            "{}/efetch.fcgi?db={}&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(database),
            urlencoding::encode(&ids.join(","))
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml = response.text().await?;

        info!(bytes = xml.len(), "Fetched records");
        Ok(xml)
    }

    /// Send a GET request with identity parameters appended
    ///
    /// Waits for the rate limiter first. Non-success statuses become
    /// [`PubMedError::ApiError`]; there is no retry.
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await;
        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("API request failed with status: {}", status);
            return Err(PubMedError::ApiError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
