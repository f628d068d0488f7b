//! Tool: get_my_data — Fetch the raw payload of the fixed target.

use serde_json::{json, Value};

use data_fetcher::DataInspector;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_my_data".to_string(),
        description: Some(
            "Fetch data from my fixed URL. Returns url, status_code, content_type, content and headers."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(_args: Value, inspector: &DataInspector) -> McpResult<ToolCallResult> {
    let data = inspector.get_my_data().await;
    let result = ToolCallResult::json(&data);

    if data.get("error").is_some() {
        Ok(result.with_error())
    } else {
        Ok(result)
    }
}
