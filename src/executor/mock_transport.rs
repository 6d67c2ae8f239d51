use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::transport::{PreparedRequest, Transport};
use crate::errors::{ClientError, ClientResult};
use crate::response::ScrapeResponse;

/// One scripted attempt outcome.
#[derive(Clone)]
pub enum MockOutcome {
    Response { status: u16, body: String },
    TransportError(String),
}

impl MockOutcome {
    pub fn ok(status: u16, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            body: body.into(),
        }
    }
}

/// Transport that replays a scripted sequence of outcomes, cycling when the
/// script is shorter than the attempt count.
#[derive(Clone)]
pub struct MockTransport {
    outcomes: Arc<Vec<MockOutcome>>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(outcomes),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Physical attempts performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &PreparedRequest) -> ClientResult<ScrapeResponse> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.outcomes.is_empty() {
            return Err(ClientError::Transport("empty outcome script".to_string()));
        }
        match &self.outcomes[index % self.outcomes.len()] {
            MockOutcome::Response { status, body } => Ok(ScrapeResponse {
                url: request.endpoint.clone(),
                status: *status,
                headers: HashMap::new(),
                body: body.clone(),
                timestamp: Utc::now(),
                retry_count: 0,
            }),
            MockOutcome::TransportError(message) => {
                Err(ClientError::Transport(message.clone()))
            }
        }
    }
}
