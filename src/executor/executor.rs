use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

use super::transport::{PreparedRequest, Transport};
use crate::errors::{ClientError, ClientResult};
use crate::matcher::SelectorMatcher;
use crate::params::RetryConfig;
use crate::response::ScrapeResponse;

pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Result of one physical attempt. The loop driver decides continue/stop from
/// the variant tag alone.
#[derive(Debug)]
pub enum AttemptOutcome {
    Success(ScrapeResponse),
    Unsuccessful(ScrapeResponse),
    TransportError(ClientError),
}

/// Drives the attempt loop for one logical request: bounded attempts, success
/// evaluation against the retry config, a fixed delay between attempts.
///
/// Exhaustion semantics: a response that never satisfied the success criteria
/// is still returned (callers inspect it); a transport error on the final
/// attempt propagates.
pub struct RetryExecutor<T, M> {
    transport: T,
    matcher: M,
    retry_delay: Duration,
}

impl<T: Transport, M: SelectorMatcher> RetryExecutor<T, M> {
    pub fn new(transport: T, matcher: M) -> Self {
        Self {
            transport,
            matcher,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub async fn execute(
        &self,
        request: &PreparedRequest,
        retry_config: Option<&RetryConfig>,
    ) -> ClientResult<ScrapeResponse> {
        let max_attempts = retry_config.map_or(1, RetryConfig::max_attempts);

        let mut attempt = 0u32;
        while attempt < max_attempts {
            attempt += 1;
            let is_final = attempt == max_attempts;
            debug!(
                "attempt {}/{} for {}",
                attempt, max_attempts, request.endpoint
            );

            match self.attempt_once(request, retry_config).await {
                AttemptOutcome::Success(mut response) => {
                    info!(
                        "request completed for {} (attempt={}, status={})",
                        request.endpoint, attempt, response.status
                    );
                    response.retry_count = attempt - 1;
                    return Ok(response);
                }
                AttemptOutcome::Unsuccessful(mut response) => {
                    if is_final {
                        warn!(
                            "returning unsuccessful response for {} after {} attempts (status={})",
                            request.endpoint, attempt, response.status
                        );
                        response.retry_count = attempt - 1;
                        return Ok(response);
                    }
                    warn!(
                        "attempt {}/{} unsuccessful for {} (status={}), retrying in {:?}",
                        attempt, max_attempts, request.endpoint, response.status, self.retry_delay
                    );
                }
                AttemptOutcome::TransportError(error) => {
                    if is_final {
                        warn!(
                            "transport error for {} on final attempt {}: {}",
                            request.endpoint, attempt, error
                        );
                        return Err(error);
                    }
                    warn!(
                        "transport error for {} on attempt {}/{}: {}, retrying in {:?}",
                        request.endpoint, attempt, max_attempts, error, self.retry_delay
                    );
                }
            }

            sleep(self.retry_delay).await;
        }

        // Unreachable while max_attempts is floored at 1.
        Err(ClientError::AttemptsExhausted(request.endpoint.to_string()))
    }

    async fn attempt_once(
        &self,
        request: &PreparedRequest,
        retry_config: Option<&RetryConfig>,
    ) -> AttemptOutcome {
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => return AttemptOutcome::TransportError(error),
        };
        debug!(
            "received response: status={}, body_length={}",
            response.status,
            response.body.len()
        );

        let Some(config) = retry_config else {
            // Without a retry config any received response is final.
            return AttemptOutcome::Success(response);
        };

        let status_ok = config.status_is_success(response.status);
        let selector_ok = config
            .selector()
            .map_or(true, |selector| {
                self.matcher.find_first_match(&response.body, selector)
            });

        if status_ok && selector_ok {
            AttemptOutcome::Success(response)
        } else {
            AttemptOutcome::Unsuccessful(response)
        }
    }
}
