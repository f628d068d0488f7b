//! MCP tool implementations, one per exposed operation.

pub mod analyze_my_json_data;
pub mod ask_about_my_data;
pub mod get_my_data;
pub mod get_my_data_summary;
pub mod registry;

pub use registry::ToolRegistry;
