use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::errors::{ClientError, ClientResult};
use crate::response::ScrapeResponse;

/// One physical API call, fixed for the lifetime of a logical request. The
/// executor re-sends the same prepared request on every attempt.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub endpoint: Url,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timeout: Option<Duration>,
}

/// Seam between the retry loop and the network. Production uses
/// [`ReqwestTransport`]; tests script outcomes through
/// [`mock_transport::MockTransport`](crate::executor::mock_transport::MockTransport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> ClientResult<ScrapeResponse>;
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> ClientResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> ClientResult<ScrapeResponse> {
        let mut headers = header::HeaderMap::new();
        for (name, value) in &request.headers {
            let name = header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Validation(format!("invalid header name {name:?}: {e}")))?;
            let value = header::HeaderValue::from_str(value)
                .map_err(|e| ClientError::Validation(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = self
            .client
            .post(request.endpoint.clone())
            .headers(headers)
            .body(request.body.clone());
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        let body = response.text().await?;

        Ok(ScrapeResponse {
            url: request.endpoint.clone(),
            status,
            headers: response_headers,
            body,
            timestamp: Utc::now(),
            retry_count: 0,
        })
    }
}
