use log::info;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::errors::ClientResult;
use crate::executor::{PreparedRequest, ReqwestTransport, RetryExecutor};
use crate::matcher::CssSelectorMatcher;
use crate::params::GetScrapingParams;
use crate::response::ScrapeResponse;

pub const DEFAULT_API_URL: &str = "https://api.getscraping.com";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Entry point for the GetScraping API. Holds only immutable configuration,
/// so one client can serve concurrent `scrape` calls.
pub struct GetScrapingClient {
    base_url: Url,
    api_key: String,
    executor: RetryExecutor<ReqwestTransport, CssSelectorMatcher>,
}

impl GetScrapingClient {
    /// Client against the hosted API.
    pub fn new(api_key: impl Into<String>) -> ClientResult<Self> {
        Self::self_hosted(DEFAULT_API_URL, api_key)
    }

    /// Client against a self-hosted deployment.
    pub fn self_hosted(base_url: &str, api_key: impl Into<String>) -> ClientResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            executor: RetryExecutor::new(ReqwestTransport::new()?, CssSelectorMatcher),
        })
    }

    /// Overrides the fixed delay slept between attempts of one logical
    /// request.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.executor = self.executor.with_retry_delay(retry_delay);
        self
    }

    /// Performs one logical scrape: validates the parameters, resolves the
    /// endpoint, then drives the attempt loop until success or exhaustion.
    ///
    /// A non-error return does not imply the success criteria were met; after
    /// exhaustion the last response comes back as-is for inspection.
    pub async fn scrape(&self, params: &GetScrapingParams) -> ClientResult<ScrapeResponse> {
        params.validate()?;

        let endpoint = self.base_url.join(params.endpoint_path())?;
        let body = serde_json::to_string(params)?;
        let request = PreparedRequest {
            endpoint,
            headers: self.request_headers(params),
            body,
            timeout: params.timeout_millis.map(Duration::from_millis),
        };

        info!("scraping {} via {}", params.url, request.endpoint);
        self.executor
            .execute(&request, params.retry_config.as_ref())
            .await
    }

    fn request_headers(&self, params: &GetScrapingParams) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());
        if params.omit_default_headers != Some(true) {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }
        headers
    }
}
