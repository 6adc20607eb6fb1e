//! Integration tests for `QuoteHttp` against a mock chart endpoint.
//!
//! Run with:
//! ```bash
//! cargo test -p nse-candles --test http_quotes
//! ```

#![cfg(feature = "http")]

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nse_candles::prelude::*;

fn chart_body() -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "meta": {"symbol": "INFY.NS", "currency": "INR"},
                "timestamp": [1700000000, 1700086400, 1700172800],
                "indicators": {
                    "quote": [{
                        "open": [100.123, null, 101.0],
                        "high": [105.0, 106.0, 107.0],
                        "low": [99.0, 101.0, 100.5],
                        "close": [104.0, 103.0, 106.556],
                        "volume": [1000, 1100, 900]
                    }],
                    "adjclose": [{"adjclose": [103.9, 102.9, 106.4]}]
                }
            }],
            "error": null
        }
    })
}

fn today() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
}

async fn client_for(server: &MockServer) -> CandleClient<QuoteHttp> {
    CandleClient::builder()
        .base_url(&server.uri())
        .clock(today())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_chart_forwards_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/INFY.NS"))
        .and(query_param("range", "6mo"))
        .and(query_param("interval", "1d"))
        .and(query_param("events", "history"))
        .and(query_param("includeAdjustedClose", "true"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let candles = client.get_candles("INFY", "6mo", "1d").await.unwrap();

    // The row with a null open is dropped.
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].open, 100.12);
    assert_eq!(candles[1].close, 106.56);

    // Served from cache; the mock expects exactly one request.
    client.get_candles("INFY", "6mo", "1d").await.unwrap();
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "chart": {"result": null, "error": {"code": "Not Found", "description": "No data found"}}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_candles("NOPE", "1y", "1d")
        .await
        .unwrap_err();
    assert!(matches!(err, CandleError::NotFound(_)));
    assert_eq!(err.to_body().details, "Stock symbol not found");
}

#[tokio::test]
async fn test_429_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_candles("INFY", "1y", "1d")
        .await
        .unwrap_err();
    assert!(matches!(err, CandleError::RateLimited));
}

#[tokio::test]
async fn test_empty_result_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"chart": {"result": []}})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_candles("INFY", "1y", "1d")
        .await
        .unwrap_err();
    assert!(matches!(err, CandleError::NoData));
    assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn test_server_error_is_not_retried_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_candles("INFY", "1y", "1d")
        .await
        .unwrap_err();
    assert_eq!(err.status(), 500);
}

#[tokio::test]
async fn test_garbage_body_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_candles("INFY", "1y", "1d")
        .await
        .unwrap_err();
    assert_eq!(err.status(), 500);
    assert!(err.to_body().error.is_some());
}

#[tokio::test]
async fn test_custom_retry_policy_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let retry = RetryPolicy::Custom(RetryConfig {
        max_retries: 2,
        initial_delay: std::time::Duration::from_millis(1),
        max_delay: std::time::Duration::from_millis(5),
        backoff_factor: 1.0,
        jitter: false,
        retryable_statuses: vec![503],
    });
    let client = CandleClient::builder()
        .base_url(&server.uri())
        .retry_policy(retry)
        .clock(today())
        .build()
        .unwrap();

    // The final attempt's server error surfaces unwrapped.
    let err = client.get_candles("INFY", "1y", "1d").await.unwrap_err();
    assert_eq!(err.status(), 500);
    let message = err.to_body().error.unwrap();
    assert!(message.starts_with("Server error 503"), "{message}");
}
