use serde::{Deserialize, Serialize};

/// Default acceptance range applied when no explicit status set is given:
/// 2xx plus the redirect statuses up to 302.
pub(crate) const DEFAULT_SUCCESS_RANGE: std::ops::RangeInclusive<u16> = 200..=302;

/// Governs the attempt loop for one logical request. Also serialized into the
/// request body so the API can mirror the policy server-side.
///
/// Without a `RetryConfig` the executor performs exactly one attempt and
/// treats any received response as final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total physical attempts for the logical request, floored at 1.
    pub num_retries: u32,
    /// Statuses counted as success. When absent, 200-302 is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_status_codes: Option<Vec<u16>>,
    /// CSS selector the body must match for the attempt to count as success.
    /// Empty string behaves as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_selector: Option<String>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            num_retries: 1,
            success_status_codes: None,
            success_selector: None,
        }
    }
}

impl RetryConfig {
    pub fn new(num_retries: u32) -> Self {
        Self {
            num_retries,
            ..Default::default()
        }
    }

    pub fn with_success_status_codes(mut self, codes: Vec<u16>) -> Self {
        self.success_status_codes = Some(codes);
        self
    }

    pub fn with_success_selector(mut self, selector: impl Into<String>) -> Self {
        self.success_selector = Some(selector.into());
        self
    }

    /// Attempt budget for the loop. A config asking for zero retries still
    /// gets one attempt.
    pub fn max_attempts(&self) -> u32 {
        self.num_retries.max(1)
    }

    pub fn status_is_success(&self, status: u16) -> bool {
        match &self.success_status_codes {
            Some(codes) => codes.contains(&status),
            None => DEFAULT_SUCCESS_RANGE.contains(&status),
        }
    }

    /// The selector check applies only when a non-empty selector is set.
    pub fn selector(&self) -> Option<&str> {
        self.success_selector
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}
