use super::mock_transport::{MockOutcome, MockTransport};
use super::*;
use crate::errors::ClientError;
use crate::matcher::CssSelectorMatcher;
use crate::params::RetryConfig;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

fn request() -> PreparedRequest {
    PreparedRequest {
        endpoint: Url::parse("https://api.getscraping.com/scrape").unwrap(),
        headers: HashMap::new(),
        body: "{}".to_string(),
        timeout: None,
    }
}

fn executor(transport: MockTransport) -> RetryExecutor<MockTransport, CssSelectorMatcher> {
    let _ = env_logger::builder().is_test(true).try_init();
    RetryExecutor::new(transport, CssSelectorMatcher)
        .with_retry_delay(Duration::from_millis(10))
}

#[tokio::test]
async fn no_retry_config_performs_one_attempt() {
    let transport = MockTransport::new(vec![MockOutcome::ok(500, "server error")]);
    let exec = executor(transport.clone());

    let response = exec.execute(&request(), None).await.unwrap();

    // Any received response is final without a config, status included.
    assert_eq!(response.status, 500);
    assert_eq!(response.retry_count, 0);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn no_retry_config_propagates_transport_error_immediately() {
    let transport = MockTransport::new(vec![MockOutcome::TransportError(
        "connection refused".to_string(),
    )]);
    let exec = executor(transport.clone());

    let err = exec.execute(&request(), None).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn retries_until_status_matches() {
    let transport = MockTransport::new(vec![
        MockOutcome::ok(429, "rate limited"),
        MockOutcome::ok(429, "rate limited"),
        MockOutcome::ok(200, "ok"),
    ]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(5);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.retry_count, 2);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn success_stops_the_loop_early() {
    let transport = MockTransport::new(vec![
        MockOutcome::ok(200, "ok"),
        MockOutcome::ok(500, "never reached"),
    ]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(4);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn exhausted_budget_returns_last_unsuccessful_response() {
    let transport = MockTransport::new(vec![MockOutcome::ok(503, "unavailable")]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(3);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    // Status never matched, but the final response is returned, not thrown.
    assert_eq!(response.status, 503);
    assert_eq!(response.body, "unavailable");
    assert_eq!(response.retry_count, 2);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn explicit_status_set_overrides_default_range() {
    let transport = MockTransport::new(vec![
        MockOutcome::ok(200, "not what we want"),
        MockOutcome::ok(404, "the 404 page we are scraping"),
    ]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(3).with_success_status_codes(vec![404]);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn selector_match_decides_success() {
    let transport = MockTransport::new(vec![
        MockOutcome::ok(200, "<html><body><p>loading</p></body></html>"),
        MockOutcome::ok(200, "<html><body><p>still loading</p></body></html>"),
        MockOutcome::ok(200, r#"<html><body><div id="ok">done</div></body></html>"#),
    ]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(5).with_success_selector("#ok");

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert!(response.body.contains("done"));
    assert_eq!(response.retry_count, 2);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn both_checks_must_pass_when_both_configured() {
    // Status always matches; the selector never does.
    let transport = MockTransport::new(vec![MockOutcome::ok(
        200,
        "<html><body><p>no marker here</p></body></html>",
    )]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(3)
        .with_success_status_codes(vec![200])
        .with_success_selector("#ok");

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn transport_error_retried_then_propagated() {
    let transport = MockTransport::new(vec![MockOutcome::TransportError(
        "connection reset".to_string(),
    )]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(3);

    let err = exec.execute(&request(), Some(&config)).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn transport_error_then_recovery() {
    let transport = MockTransport::new(vec![
        MockOutcome::TransportError("timed out".to_string()),
        MockOutcome::ok(200, "recovered"),
    ]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(3);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "recovered");
    assert_eq!(response.retry_count, 1);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn zero_retries_still_gets_one_attempt() {
    let transport = MockTransport::new(vec![MockOutcome::ok(200, "ok")]);
    let exec = executor(transport.clone());
    let config = RetryConfig::new(0);

    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn empty_outcome_script_fails_as_transport_error() {
    let transport = MockTransport::new(vec![]);
    let exec = executor(transport.clone());

    let err = exec.execute(&request(), None).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn delay_is_applied_between_attempts() {
    let transport = MockTransport::new(vec![
        MockOutcome::ok(500, "fail"),
        MockOutcome::ok(500, "fail"),
        MockOutcome::ok(200, "ok"),
    ]);
    let exec = RetryExecutor::new(transport, CssSelectorMatcher)
        .with_retry_delay(Duration::from_millis(100));
    let config = RetryConfig::new(3);

    let start = std::time::Instant::now();
    let response = exec.execute(&request(), Some(&config)).await.unwrap();

    assert_eq!(response.status, 200);
    // Two inter-attempt delays of 100ms each.
    assert!(start.elapsed() >= Duration::from_millis(200));
}
