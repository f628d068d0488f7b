//! Tool: ask_about_my_data — Answer a free-text question about the target's data.

use serde::Deserialize;
use serde_json::{json, Value};

use data_fetcher::DataInspector;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct AskParams {
    question: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "ask_about_my_data".to_string(),
        description: Some(
            "Ask questions about data from my fixed URL (status, content type, length, headers, keys, url)"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "question": { "type": "string", "description": "Your question about the data" }
            },
            "required": ["question"]
        }),
    }
}

pub async fn execute(args: Value, inspector: &DataInspector) -> McpResult<ToolCallResult> {
    let params: AskParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    Ok(ToolCallResult::text(
        inspector.ask_about_my_data(&params.question).await,
    ))
}
