//! Fetcher retry behavior against a mock server

use crate::common::{fast_fetcher, fast_http_config};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_harvest::fetch::{FetchError, Fetcher, RetryPolicy, ACCEPT_OK};
use yt_harvest::config::HttpConfig;

const COMMENT_ACCEPT: &[u16] = &[200, 403, 404];

#[tokio::test]
async fn test_timeouts_then_success_on_third_attempt() {
    let mock_server = MockServer::start().await;

    // The first two attempts time out
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "attempt": "slow" }))
                .set_delay(Duration::from_secs(3)),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "attempt": 3 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = fast_fetcher()
        .fetch_json(&format!("{}/videos", mock_server.uri()), &[], ACCEPT_OK)
        .await
        .expect("Third attempt should succeed");

    assert_eq!(payload.value()["attempt"], 3);
}

#[tokio::test]
async fn test_transport_faults_exhaust_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .expect(3)
        .mount(&mock_server)
        .await;

    let result = fast_fetcher()
        .fetch_json(&format!("{}/videos", mock_server.uri()), &[], ACCEPT_OK)
        .await;

    match result {
        Err(FetchError::Exhausted { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("Expected Exhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = fast_fetcher()
        .fetch_json(&mock_server.uri(), &[], ACCEPT_OK)
        .await
        .unwrap();

    assert_eq!(payload.items().count(), 0);
}

#[tokio::test]
async fn test_persistent_server_error_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let result = fast_fetcher()
        .fetch_json(&mock_server.uri(), &[], ACCEPT_OK)
        .await;

    assert!(matches!(
        result,
        Err(FetchError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_accepted_client_error_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "error": { "code": 403, "message": "disabled comments" } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = fast_fetcher()
        .fetch_json(
            &format!("{}/commentThreads", mock_server.uri()),
            &[],
            COMMENT_ACCEPT,
        )
        .await
        .expect("403 is accepted and must not fail");

    assert_eq!(payload.api_error().as_deref(), Some("disabled comments"));
}

#[tokio::test]
async fn test_unaccepted_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "code": 400, "message": "bad request" } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // The body is still parsed so callers can read the error document
    let payload = fast_fetcher()
        .fetch_json(&mock_server.uri(), &[], ACCEPT_OK)
        .await
        .unwrap();

    assert_eq!(payload.api_error().as_deref(), Some("bad request"));
}

#[tokio::test]
async fn test_malformed_body_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fast_fetcher()
        .fetch_json(&mock_server.uri(), &[], ACCEPT_OK)
        .await;

    assert!(matches!(
        result,
        Err(FetchError::Malformed { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "abc123"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [{ "id": "abc123" }] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = [("id", "abc123".to_string()), ("key", "test-key".to_string())];
    let payload = fast_fetcher()
        .fetch_json(&format!("{}/videos", mock_server.uri()), &params, ACCEPT_OK)
        .await
        .unwrap();

    assert_eq!(payload.items().count(), 1);
}

#[tokio::test]
async fn test_single_attempt_policy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        max_retries: 1,
        ..fast_http_config()
    };
    let fetcher = Fetcher::from_config(&config).unwrap();

    let result = fetcher.fetch_text(&mock_server.uri(), &[]).await;
    assert!(matches!(
        result,
        Err(FetchError::UnexpectedStatus { status: 502, .. })
    ));
}

#[tokio::test]
async fn test_policy_timeout_applies_to_any_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .expect(2)
        .mount(&mock_server)
        .await;

    // A client built without any timeout still gives up per the policy
    let policy = RetryPolicy::new(2, Duration::from_millis(10), Duration::from_millis(300));
    let fetcher = Fetcher::new(reqwest::Client::new(), policy);

    let result = fetcher.fetch_json(&mock_server.uri(), &[], ACCEPT_OK).await;
    assert!(matches!(
        result,
        Err(FetchError::Exhausted { attempts: 2, .. })
    ));
}
