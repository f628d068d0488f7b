//! Tool registration and dispatch.

use serde_json::Value;

use data_fetcher::DataInspector;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{analyze_my_json_data, ask_about_my_data, get_my_data, get_my_data_summary};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            get_my_data::definition(),
            ask_about_my_data::definition(),
            analyze_my_json_data::definition(),
            get_my_data_summary::definition(),
        ]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        inspector: &DataInspector,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "get_my_data" => get_my_data::execute(args, inspector).await,
            "ask_about_my_data" => ask_about_my_data::execute(args, inspector).await,
            "analyze_my_json_data" => analyze_my_json_data::execute(args, inspector).await,
            "get_my_data_summary" => get_my_data_summary::execute(args, inspector).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}
