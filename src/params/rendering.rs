use serde::{Deserialize, Serialize};

use super::request::HttpMethod;

/// Options executed by the API's browser workers. The client only serializes
/// this structure; its semantics live entirely upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsRenderingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_js: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_millis: Option<u64>,
    /// Regex matched against request URLs; rendering waits until the page has
    /// issued a matching request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_request: Option<String>,
    /// CSS selector; rendering waits until the page contains a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercept_request: Option<InterceptRequestParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_scenario: Option<Vec<BrowserAction>>,
}

impl JsRenderingOptions {
    pub fn rendered() -> Self {
        Self {
            render_js: Some(true),
            ..Default::default()
        }
    }
}

/// Instructs the browser worker to capture a request the page makes and
/// return its payload instead of the page HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptRequestParams {
    pub url_regex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    /// Which matching request to capture, counting from 1.
    #[serde(default = "default_occurrence_index")]
    pub occurrence_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_json: Option<bool>,
}

fn default_occurrence_index() -> u32 {
    1
}

impl InterceptRequestParams {
    pub fn new(url_regex: impl Into<String>) -> Self {
        Self {
            url_regex: url_regex.into(),
            method: None,
            occurrence_index: default_occurrence_index(),
            return_json: None,
        }
    }
}

/// One step of a scripted browser interaction, executed in order before the
/// page content is captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowserAction {
    Click { selector: String },
    Hover { selector: String },
    WaitForSelector { selector: String },
    WaitMillis { millis: u64 },
    Scroll { selector: Option<String> },
    ExecuteScript { script: String },
}
