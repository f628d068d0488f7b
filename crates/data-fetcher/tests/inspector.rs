//! Integration tests for the fetcher and the exposed operations against a mock target.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use data_fetcher::{Body, DataError, DataInspector, FetchConfig, Fetcher};

// ─────────────────────── helpers ───────────────────────

fn target(server: &MockServer) -> String {
    format!("{}/data", server.uri())
}

fn inspector(server: &MockServer) -> DataInspector {
    DataInspector::new(FetchConfig::new(target(server))).unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

/// A target URL on a port nothing listens on.
fn refused_target() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/data", listener.local_addr().unwrap());
    drop(listener);
    url
}

// ═══════════════════════════════════════════════════════
// FETCHER
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn test_fetch_json_strips_content_type_params() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_raw(br#"{"a":1}"#.to_vec(), "application/json; charset=utf-8")
            .insert_header("X-Trace", "t-1"),
    )
    .await;

    let fetcher = Fetcher::new(FetchConfig::new(target(&server))).unwrap();
    let outcome = fetcher.fetch().await.unwrap();

    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.content_type.as_deref(), Some("application/json"));
    assert_eq!(outcome.body, Body::Json(json!({"a": 1})));
    assert_eq!(outcome.header("x-trace"), Some("t-1"));
    assert_eq!(outcome.url, target(&server));
}

#[tokio::test]
async fn test_fetch_non_success_is_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(404)).await;

    let fetcher = Fetcher::new(FetchConfig::new(target(&server))).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(
        err,
        DataError::HttpStatus {
            code: 404,
            url: target(&server)
        }
    );
}

#[tokio::test]
async fn test_fetch_redirect_is_status_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(302).insert_header("Location", "/other"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/other"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"elsewhere".to_vec(), "text/plain"))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::new(target(&server))).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(
        err,
        DataError::HttpStatus {
            code: 302,
            url: target(&server)
        }
    );
    server.verify().await;
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_millis(800)),
    )
    .await;

    let config = FetchConfig::new(target(&server)).with_timeout(Duration::from_millis(100));
    let fetcher = Fetcher::new(config).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, DataError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_error() {
    let fetcher = Fetcher::new(FetchConfig::new(refused_target())).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, DataError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_json_falls_back_to_text() {
    let server = MockServer::start().await;
    mount(&server, json_response(r#"{"broken":"#)).await;

    let fetcher = Fetcher::new(FetchConfig::new(target(&server))).unwrap();
    let outcome = fetcher.fetch().await.unwrap();
    assert_eq!(outcome.body, Body::Text(r#"{"broken":"#.to_string()));
}

#[tokio::test]
async fn test_every_call_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(json_response("[1]"))
        .expect(3)
        .mount(&server)
        .await;

    let inspector = inspector(&server);
    inspector.get_my_data().await;
    inspector.get_my_data_summary().await;
    inspector.ask_about_my_data("status").await;
    server.verify().await;
}

// ═══════════════════════════════════════════════════════
// OPERATIONS
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn test_get_my_data_success() {
    let server = MockServer::start().await;
    mount(&server, json_response(r#"{"a":1,"b":[1,2]}"#)).await;

    let data = inspector(&server).get_my_data().await;
    assert_eq!(data["status_code"], 200);
    assert_eq!(data["content_type"], "application/json");
    assert_eq!(data["content"], json!({"a": 1, "b": [1, 2]}));
    assert_eq!(data["url"], target(&server));
    assert!(data["headers"].is_object());
}

#[tokio::test]
async fn test_get_my_data_http_500() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let data = inspector(&server).get_my_data().await;
    assert_eq!(
        data,
        json!({ "error": format!("HTTP error 500 for {}", target(&server)) })
    );
}

#[tokio::test]
async fn test_get_my_data_connection_refused_is_prefixed() {
    let inspector = DataInspector::new(FetchConfig::new(refused_target())).unwrap();
    let data = inspector.get_my_data().await;
    let error = data["error"].as_str().unwrap();
    assert!(error.starts_with("Error fetching my data: "), "got {error}");
}

#[tokio::test]
async fn test_ask_reports_timeout_and_target() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_delay(Duration::from_millis(800)),
    )
    .await;

    let config = FetchConfig::new(target(&server)).with_timeout(Duration::from_millis(100));
    let inspector = DataInspector::new(config).unwrap();
    let answer = inspector.ask_about_my_data("anything").await;
    assert!(answer.contains("Timeout"), "got {answer}");
    assert!(answer.contains(&target(&server)), "got {answer}");
}

#[tokio::test]
async fn test_analyze_nested_object() {
    let server = MockServer::start().await;
    mount(&server, json_response(r#"{"a":1,"b":{"c":2}}"#)).await;

    let out = inspector(&server).analyze_my_json_data(None).await;
    assert!(out.contains("2 keys: [a, b]"), "got {out}");
    assert!(out.contains("b: dictionary with 1 keys"));
    assert!(out.contains("a: 1"));
    assert!(out.contains("b: {...} (dictionary)"));
}

#[tokio::test]
async fn test_analyze_text_is_not_json() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("hello")).await;

    let out = inspector(&server).analyze_my_json_data(Some("keys")).await;
    assert_eq!(out, "My data is not in JSON format");
}

#[tokio::test]
async fn test_summary_plain_text_length() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_raw(b"hello".to_vec(), "text/plain"),
    )
    .await;

    let out = inspector(&server).get_my_data_summary().await;
    assert!(out.contains("• Type: text/plain"), "got {out}");
    assert!(out.contains("• Length: 5 characters"), "got {out}");
}

#[tokio::test]
async fn test_summary_error_is_folded() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(503)).await;

    let out = inspector(&server).get_my_data_summary().await;
    assert!(out.starts_with("❌ Error fetching my data: HTTP error 503"), "got {out}");
}
