//! Tool: analyze_my_json_data — Describe the structure of the target's JSON payload.

use serde::Deserialize;
use serde_json::{json, Value};

use data_fetcher::DataInspector;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct AnalyzeParams {
    #[serde(default)]
    query: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_my_json_data".to_string(),
        description: Some("Analyze JSON data from my fixed URL".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Optional specific query about the JSON structure (keys, count, sample)"
                }
            }
        }),
    }
}

pub async fn execute(args: Value, inspector: &DataInspector) -> McpResult<ToolCallResult> {
    let params: AnalyzeParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    Ok(ToolCallResult::text(
        inspector.analyze_my_json_data(params.query.as_deref()).await,
    ))
}
