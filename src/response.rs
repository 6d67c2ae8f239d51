use chrono::prelude::*;
use std::collections::HashMap;
use url::Url;

use crate::errors::ClientResult;

/// Header set by the API when a screenshot was requested through the
/// rendering options; its value is a short-lived download location.
pub const SCREENSHOT_URL_HEADER: &str = "x-screenshot-url";

/// The upstream response for one logical scrape, taken from the final
/// physical attempt.
#[derive(Debug, Clone)]
pub struct ScrapeResponse {
    pub url: Url,
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    /// Physical attempts performed beyond the first for this logical request.
    pub retry_count: u32,
}

impl ScrapeResponse {
    /// Where the rendered screenshot can be downloaded from, when one was
    /// requested.
    pub fn screenshot_url(&self) -> Option<&str> {
        self.headers.get(SCREENSHOT_URL_HEADER).map(String::as_str)
    }

    /// The `set-cookie` header forwarded from the target site, for session
    /// continuation across scrapes.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get("set-cookie").map(String::as_str)
    }

    /// Parses the body as JSON. Useful with `intercept_request.return_json`,
    /// where the API returns the intercepted payload instead of HTML.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
