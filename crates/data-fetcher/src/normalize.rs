//! Content normalization: decide between structured JSON and opaque text.

use crate::types::Body;

const JSON_MIME: &str = "application/json";

/// Strip parameters (charset, boundary) from a raw content-type header.
pub fn strip_mime_params(raw: &str) -> String {
    raw.split(';').next().unwrap_or("").trim().to_string()
}

/// Normalize a response body according to its declared content type.
///
/// JSON that fails to parse under a JSON content type falls back to text.
pub fn normalize(content_type: &str, raw_text: &str) -> Body {
    if !content_type.contains(JSON_MIME) {
        return Body::Text(raw_text.to_string());
    }

    match serde_json::from_str(raw_text) {
        Ok(value) => Body::Json(value),
        Err(e) => {
            tracing::warn!(
                content_type,
                "Declared JSON body failed to parse, keeping as text: {e}"
            );
            Body::Text(raw_text.to_string())
        }
    }
}
