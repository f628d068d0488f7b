//! Tool: get_my_data_summary — Quick summary of the target's data.

use serde_json::{json, Value};

use data_fetcher::DataInspector;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_my_data_summary".to_string(),
        description: Some("Get a quick summary of data from my fixed URL".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(_args: Value, inspector: &DataInspector) -> McpResult<ToolCallResult> {
    Ok(ToolCallResult::text(inspector.get_my_data_summary().await))
}
