//! Schema-free structural analysis of JSON payloads.
//!
//! Only shapes are inspected (type tag and size). No field is assumed present.

use serde_json::{Map, Value};

use crate::types::{Body, DataError, Shape};

/// Number of leading keys or items sampled in descriptions.
pub const SAMPLE_LIMIT: usize = 5;

/// Maximum characters of re-serialized JSON returned for sample queries.
pub const SAMPLE_CHARS: usize = 500;

/// Marker appended to sample output.
pub const ELLIPSIS: &str = "...";

/// Which targeted sub-query a free-text query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Keys,
    Count,
    Sample,
    Describe,
}

impl QueryKind {
    /// Classify a query. First match wins: keys, then count/length, then example/sample.
    pub fn classify(query: &str) -> Self {
        let q = query.to_lowercase();
        if q.contains("key") {
            QueryKind::Keys
        } else if q.contains("count") || q.contains("length") {
            QueryKind::Count
        } else if q.contains("example") || q.contains("sample") {
            QueryKind::Sample
        } else {
            QueryKind::Describe
        }
    }
}

/// Analyze a normalized body, optionally answering a targeted query.
pub fn analyze(body: &Body, query: Option<&str>) -> String {
    let value = match body {
        Body::Json(value) => value,
        Body::Text(_) => return DataError::NotJson.to_string(),
    };

    let kind = query.map(QueryKind::classify).unwrap_or(QueryKind::Describe);

    match (Shape::of(value), kind) {
        (Shape::Scalar(_), _) => "My fetched data is not a JSON object or list".to_string(),
        (Shape::Object(map), QueryKind::Keys) => {
            format!("My JSON data keys: {}", key_list(map.keys()))
        }
        (Shape::Object(map), QueryKind::Count) => {
            format!("Number of keys in my data: {}", map.len())
        }
        (Shape::Array(items), QueryKind::Count) => {
            format!("Number of items in my list: {}", items.len())
        }
        (_, QueryKind::Sample) => sample(value),
        (Shape::Object(map), _) => describe_object(map),
        (Shape::Array(items), _) => describe_array(items),
    }
}

/// Render keys as `[a, b, c]`.
pub fn key_list<'a>(keys: impl IntoIterator<Item = &'a String>) -> String {
    let keys: Vec<&str> = keys.into_iter().map(String::as_str).collect();
    format!("[{}]", keys.join(", "))
}

/// One-line description of a container value, `None` for scalars.
pub fn container_summary(value: &Value) -> Option<String> {
    match Shape::of(value) {
        Shape::Object(map) => Some(format!("dictionary with {} keys", map.len())),
        Shape::Array(items) => Some(format!("list with {} items", items.len())),
        Shape::Scalar(_) => None,
    }
}

fn describe_object(map: &Map<String, Value>) -> String {
    let mut analysis = format!("My JSON data has {} keys: {}", map.len(), key_list(map.keys()));

    let nested: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| container_summary(value).map(|s| format!("• {key}: {s}")))
        .collect();
    if !nested.is_empty() {
        analysis.push_str("\n\nNested structures:\n");
        analysis.push_str(&nested.join("\n"));
    }

    let samples: Vec<String> = map
        .iter()
        .take(SAMPLE_LIMIT)
        .map(|(key, value)| {
            let rendered = match Shape::of(value) {
                Shape::Object(_) => "{...} (dictionary)".to_string(),
                Shape::Array(items) => format!("[...] (list with {} items)", items.len()),
                Shape::Scalar(scalar) => scalar.to_string(),
            };
            format!("• {key}: {rendered}")
        })
        .collect();
    if !samples.is_empty() {
        analysis.push_str("\n\nSample values:\n");
        analysis.push_str(&samples.join("\n"));
    }

    analysis
}

fn describe_array(items: &[Value]) -> String {
    let mut analysis = format!("My data is a JSON list with {} items", items.len());

    let info: Vec<String> = items
        .iter()
        .take(SAMPLE_LIMIT)
        .enumerate()
        .map(|(i, item)| match Shape::of(item) {
            Shape::Scalar(scalar) => format!("• Item {i}: {} = {scalar}", scalar.type_name()),
            _ => format!("• Item {i}: {}", container_summary(item).unwrap_or_default()),
        })
        .collect();
    if !info.is_empty() {
        analysis.push_str(&format!("\n\nFirst {} items:\n", info.len()));
        analysis.push_str(&info.join("\n"));
    }

    analysis
}

fn sample(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|e| e.to_string());
    let truncated: String = pretty.chars().take(SAMPLE_CHARS).collect();
    format!("{truncated}{ELLIPSIS}")
}
