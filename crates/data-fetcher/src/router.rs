//! Keyword routing of free-text questions about a fetch outcome.
//!
//! Routes are evaluated in order and the first matching route answers.

use crate::analyze::key_list;
use crate::types::{Body, FetchOutcome, Shape};

/// A question route: predicate over the lowercased question plus a handler.
pub struct Route {
    pub name: &'static str,
    pub matches: fn(&str, &FetchOutcome) -> bool,
    pub answer: fn(&FetchOutcome) -> String,
}

/// Ordered routes. Earlier entries take precedence.
pub const ROUTES: &[Route] = &[
    Route {
        name: "status",
        matches: asks_status,
        answer: answer_status,
    },
    Route {
        name: "content_type",
        matches: asks_content_type,
        answer: answer_content_type,
    },
    Route {
        name: "length",
        matches: asks_length,
        answer: answer_length,
    },
    Route {
        name: "headers",
        matches: asks_headers,
        answer: answer_headers,
    },
    Route {
        name: "keys",
        matches: asks_keys,
        answer: answer_keys,
    },
    Route {
        name: "url",
        matches: asks_url,
        answer: answer_url,
    },
];

fn asks_status(q: &str, _: &FetchOutcome) -> bool {
    q.contains("status") || q.contains("code")
}

fn asks_content_type(q: &str, _: &FetchOutcome) -> bool {
    q.contains("type")
}

fn asks_length(q: &str, _: &FetchOutcome) -> bool {
    q.contains("length") || q.contains("size")
}

fn asks_headers(q: &str, _: &FetchOutcome) -> bool {
    q.contains("headers")
}

// Only routable when the body is a JSON object.
fn asks_keys(q: &str, outcome: &FetchOutcome) -> bool {
    q.contains("keys") && matches!(&outcome.body, Body::Json(v) if v.is_object())
}

fn asks_url(q: &str, _: &FetchOutcome) -> bool {
    q.contains("url") || q.contains("source")
}

/// Find the route a question resolves to, if any.
pub fn route(question: &str, outcome: &FetchOutcome) -> Option<&'static Route> {
    let q = question.to_lowercase();
    ROUTES.iter().find(|r| (r.matches)(&q, outcome))
}

/// Answer a free-text question about a fetch outcome.
pub fn answer(question: &str, outcome: &FetchOutcome) -> String {
    match route(question, outcome) {
        Some(r) => {
            tracing::debug!(route = r.name, "Routed question");
            (r.answer)(outcome)
        }
        None => answer_fallback(outcome),
    }
}

fn display_content_type(outcome: &FetchOutcome) -> &str {
    match outcome.content_type.as_deref() {
        Some(ct) if !ct.is_empty() => ct,
        _ => "unknown",
    }
}

fn answer_status(outcome: &FetchOutcome) -> String {
    format!("My data URL returned status code {}", outcome.status_code)
}

fn answer_content_type(outcome: &FetchOutcome) -> String {
    format!("The content type of my data is: {}", display_content_type(outcome))
}

fn answer_length(outcome: &FetchOutcome) -> String {
    match &outcome.body {
        Body::Text(text) => {
            format!("My data content length is {} characters", text.chars().count())
        }
        Body::Json(value) => match Shape::of(value) {
            Shape::Object(map) => format!("My JSON data has {} top-level keys", map.len()),
            Shape::Array(items) => format!("My data list has {} items", items.len()),
            Shape::Scalar(scalar) => format!(
                "My JSON data is a single {} value, so length does not apply",
                scalar.type_name()
            ),
        },
    }
}

fn answer_headers(outcome: &FetchOutcome) -> String {
    let headers =
        serde_json::to_string_pretty(&outcome.headers).unwrap_or_else(|e| e.to_string());
    format!("Response headers from my data: {headers}")
}

fn answer_keys(outcome: &FetchOutcome) -> String {
    match &outcome.body {
        Body::Json(serde_json::Value::Object(map)) => {
            format!("My JSON data has these keys: {}", key_list(map.keys()))
        }
        _ => answer_fallback(outcome),
    }
}

fn answer_url(outcome: &FetchOutcome) -> String {
    format!("Data is fetched from: {}", outcome.url)
}

fn answer_fallback(outcome: &FetchOutcome) -> String {
    format!(
        "My data from {}. Status: {}. Content type: {}. \
         Ask me about status, content type, length, headers, or keys.",
        outcome.url,
        outcome.status_code,
        display_content_type(outcome)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn outcome(body: Body, content_type: Option<&str>) -> FetchOutcome {
        let mut headers = BTreeMap::new();
        headers.insert("server".to_string(), "test".to_string());
        FetchOutcome {
            url: "http://example.test/data".to_string(),
            status_code: 200,
            content_type: content_type.map(str::to_string),
            body,
            headers,
        }
    }

    fn json_outcome(value: serde_json::Value) -> FetchOutcome {
        outcome(Body::Json(value), Some("application/json"))
    }

    #[test]
    fn test_status_route() {
        let o = json_outcome(json!({}));
        assert_eq!(answer("What STATUS?", &o), "My data URL returned status code 200");
        assert_eq!(answer("response code", &o), "My data URL returned status code 200");
    }

    #[test]
    fn test_status_precedes_headers() {
        let o = json_outcome(json!({}));
        assert_eq!(route("status and headers", &o).unwrap().name, "status");
    }

    #[test]
    fn test_content_type_route_and_placeholder() {
        let o = json_outcome(json!({}));
        assert_eq!(answer("type?", &o), "The content type of my data is: application/json");
        let missing = outcome(Body::Text(String::new()), None);
        assert_eq!(answer("type?", &missing), "The content type of my data is: unknown");
    }

    #[test]
    fn test_length_route_per_body() {
        let text = outcome(Body::Text("héllo".to_string()), Some("text/plain"));
        assert_eq!(answer("length", &text), "My data content length is 5 characters");
        let obj = json_outcome(json!({"a": 1, "b": 2}));
        assert_eq!(answer("size", &obj), "My JSON data has 2 top-level keys");
        let arr = json_outcome(json!([1, 2, 3]));
        assert_eq!(answer("size", &arr), "My data list has 3 items");
        let scalar = json_outcome(json!("x"));
        assert!(answer("length", &scalar).contains("does not apply"));
    }

    #[test]
    fn test_headers_route() {
        let o = json_outcome(json!({}));
        let out = answer("show headers", &o);
        assert!(out.starts_with("Response headers from my data: {"));
        assert!(out.contains("\"server\": \"test\""));
    }

    #[test]
    fn test_keys_route_requires_object() {
        let obj = json_outcome(json!({"a": 1, "b": 2}));
        assert_eq!(answer("keys", &obj), "My JSON data has these keys: [a, b]");

        let arr = json_outcome(json!([1]));
        assert!(route("keys", &arr).is_none());
        assert!(answer("keys", &arr).contains("Ask me about"));
    }

    #[test]
    fn test_url_route() {
        let o = json_outcome(json!({}));
        assert_eq!(answer("where is the source", &o), "Data is fetched from: http://example.test/data");
    }

    #[test]
    fn test_fallback_summary() {
        let o = json_outcome(json!({}));
        let out = answer("anything", &o);
        assert_eq!(
            out,
            "My data from http://example.test/data. Status: 200. Content type: application/json. \
             Ask me about status, content type, length, headers, or keys."
        );
    }
}
