//! my-data-fetcher MCP server — named tools over one fixed HTTP endpoint.

pub mod config;
pub mod protocol;
pub mod repl;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::resolve_fetch_config;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;
