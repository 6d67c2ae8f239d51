use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use super::rendering::JsRenderingOptions;
use super::retry::RetryConfig;
use crate::errors::{ClientError, ClientResult};

pub const SCRAPE_PATH: &str = "/scrape";
pub const SCRAPE_WITH_JS_PATH: &str = "/scrape_with_js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

/// Everything describing one scrape request. Serialized as the JSON body of
/// the API call; fields left as `None` are omitted from the wire.
///
/// The proxy selectors are mutually exclusive in intent, but precedence
/// between them is decided by the API, not arbitrated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetScrapingParams {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_default_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_isp_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_residential_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_mobile_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_rendering_options: Option<JsRenderingOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_config: Option<RetryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_millis: Option<u64>,
}

impl GetScrapingParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_js_rendering(mut self, options: JsRenderingOptions) -> Self {
        self.js_rendering_options = Some(options);
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn with_timeout_millis(mut self, timeout_millis: u64) -> Self {
        self.timeout_millis = Some(timeout_millis);
        self
    }

    /// Structural validation performed before any network call. Anything
    /// beyond this (selector syntax, proxy credentials) is judged by the API.
    pub fn validate(&self) -> ClientResult<()> {
        if self.url.trim().is_empty() {
            return Err(ClientError::Validation("url must not be empty".into()));
        }
        let parsed = Url::parse(&self.url)
            .map_err(|e| ClientError::Validation(format!("url is not absolute: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::Validation(format!(
                "url is not a valid http(s) address: {}",
                self.url
            )));
        }
        Ok(())
    }

    /// Requests carrying rendering options go through the browser-capable
    /// endpoint; plain requests take the direct path.
    pub fn endpoint_path(&self) -> &'static str {
        if self.js_rendering_options.is_some() {
            SCRAPE_WITH_JS_PATH
        } else {
            SCRAPE_PATH
        }
    }
}
