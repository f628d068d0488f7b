//! The four exposed operations over the fixed target.
//!
//! Every call re-fetches. Errors are folded into the returned value here and
//! nowhere else.

use serde_json::{json, Value};

use crate::analyze::analyze;
use crate::fetch::Fetcher;
use crate::router::answer;
use crate::summary::summarize;
use crate::types::{DataError, DataResult, FetchConfig, FetchOutcome};

/// Names of the exposed operations, in display order.
pub const OPERATIONS: &[(&str, &str)] = &[
    ("get_my_data", "Fetch raw data from the target"),
    ("ask_about_my_data", "Ask a question about the target's data"),
    ("analyze_my_json_data", "Analyze the JSON structure of the target's data"),
    ("get_my_data_summary", "Get a quick summary of the target's data"),
];

/// Stateless service answering queries about one fixed target.
#[derive(Debug, Clone)]
pub struct DataInspector {
    fetcher: Fetcher,
}

impl DataInspector {
    pub fn new(config: FetchConfig) -> DataResult<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// The fixed target URL.
    pub fn target(&self) -> &str {
        self.fetcher.url()
    }

    /// Fetch and normalize the target, without folding errors.
    pub async fn fetch(&self) -> DataResult<FetchOutcome> {
        self.fetcher.fetch().await
    }

    /// `{url, status_code, content_type, content, headers}` or `{error}`.
    pub async fn get_my_data(&self) -> Value {
        match self.fetch().await {
            Ok(outcome) => json!({
                "url": outcome.url,
                "status_code": outcome.status_code,
                "content_type": outcome.content_type_or_empty(),
                "content": outcome.body,
                "headers": outcome.headers,
            }),
            Err(e @ DataError::Transport { .. }) => json!({ "error": fetch_error_message(&e) }),
            Err(e) => json!({ "error": e.to_string() }),
        }
    }

    pub async fn ask_about_my_data(&self, question: &str) -> String {
        match self.fetch().await {
            Ok(outcome) => answer(question, &outcome),
            Err(e) => fetch_error_message(&e),
        }
    }

    pub async fn analyze_my_json_data(&self, query: Option<&str>) -> String {
        match self.fetch().await {
            Ok(outcome) => analyze(&outcome.body, query),
            Err(e) => fetch_error_message(&e),
        }
    }

    pub async fn get_my_data_summary(&self) -> String {
        match self.fetch().await {
            Ok(outcome) => summarize(&outcome),
            Err(e) => format!("❌ {}", fetch_error_message(&e)),
        }
    }
}

fn fetch_error_message(e: &DataError) -> String {
    format!("Error fetching my data: {e}")
}
