//! Condensed fixed-format summary of a fetch outcome.

use crate::analyze::{key_list, SAMPLE_LIMIT};
use crate::types::{Body, FetchOutcome, Shape};

/// Render the summary. Branches only on the body tag.
pub fn summarize(outcome: &FetchOutcome) -> String {
    let url = &outcome.url;
    let status = outcome.status_code;
    let content_type = outcome.content_type_or_empty();

    match &outcome.body {
        Body::Json(value) => match Shape::of(value) {
            Shape::Object(map) => {
                let mut summary = format!(
                    "✅ Data fetched successfully!\n\
                     • URL: {url}\n\
                     • Status: {status}\n\
                     • Content Type: {content_type}\n\
                     • JSON Keys: {}\n",
                    map.len()
                );
                if !map.is_empty() {
                    summary.push_str(&format!(
                        "• First {SAMPLE_LIMIT} keys: {}",
                        key_list(map.keys().take(SAMPLE_LIMIT))
                    ));
                }
                summary
            }
            Shape::Array(items) => format!(
                "✅ Data fetched successfully!\n\
                 • URL: {url}\n\
                 • Status: {status}\n\
                 • Content Type: {content_type}\n\
                 • List Items: {}",
                items.len()
            ),
            Shape::Scalar(_) => format!(
                "✅ Data fetched!\n\
                 • URL: {url}\n\
                 • Status: {status}\n\
                 • Type: {content_type}"
            ),
        },
        Body::Text(text) => format!(
            "✅ Data fetched!\n\
             • URL: {url}\n\
             • Status: {status}\n\
             • Type: {content_type}\n\
             • Length: {} characters",
            text.chars().count()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn outcome(body: Body, content_type: &str) -> FetchOutcome {
        FetchOutcome {
            url: "http://example.test".to_string(),
            status_code: 200,
            content_type: Some(content_type.to_string()),
            body,
            headers: BTreeMap::new(),
        }
    }

    #[test]
    fn test_object_summary_lists_first_five_keys() {
        let body = Body::Json(json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6}));
        let out = summarize(&outcome(body, "application/json"));
        assert!(out.starts_with("✅ Data fetched successfully!"));
        assert!(out.contains("• JSON Keys: 6"));
        assert!(out.ends_with("• First 5 keys: [a, b, c, d, e]"));
    }

    #[test]
    fn test_empty_object_summary_omits_key_line() {
        let out = summarize(&outcome(Body::Json(json!({})), "application/json"));
        assert!(out.contains("• JSON Keys: 0"));
        assert!(!out.contains("First 5 keys"));
    }

    #[test]
    fn test_array_summary() {
        let out = summarize(&outcome(Body::Json(json!([1, 2])), "application/json"));
        assert!(out.ends_with("• List Items: 2"));
    }

    #[test]
    fn test_scalar_summary() {
        let out = summarize(&outcome(Body::Json(json!(true)), "application/json"));
        assert_eq!(
            out,
            "✅ Data fetched!\n• URL: http://example.test\n• Status: 200\n• Type: application/json"
        );
    }

    #[test]
    fn test_text_summary_reports_characters() {
        let out = summarize(&outcome(Body::Text("hello".to_string()), "text/plain"));
        assert!(out.contains("• Type: text/plain"));
        assert!(out.ends_with("• Length: 5 characters"));
    }
}
