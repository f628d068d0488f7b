//! my-data-fetcher MCP server — entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use data_fetcher::{DataInspector, OPERATIONS};
use data_fetcher_mcp::config::resolve_fetch_config;
use data_fetcher_mcp::protocol::ProtocolHandler;
use data_fetcher_mcp::tools::ToolRegistry;
use data_fetcher_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "data-fetcher-mcp",
    about = "MCP server that fetches one fixed URL and answers questions about it",
    version
)]
struct Cli {
    /// Target URL (also read from MY_DATA_URL).
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (also read from MY_DATA_TIMEOUT_SECS).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server capabilities, tools and target as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   data-fetcher-mcp completions bash > ~/.local/share/bash-completion/completions/data-fetcher-mcp
    ///   data-fetcher-mcp completions zsh > ~/.zfunc/_data-fetcher-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_fetch_config(cli.url.as_deref(), cli.timeout_secs);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let inspector = DataInspector::new(config)?;
            tracing::info!("Starting MCP server for fixed URL: {}", inspector.target());
            tracing::info!("Available tools:");
            for (name, description) in OPERATIONS {
                tracing::info!("• {name} - {description}");
            }

            let handler = ProtocolHandler::new(Arc::new(inspector));
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Info => {
            let capabilities = data_fetcher_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "target": config.url,
                "timeout_secs": config.timeout.as_secs(),
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "data-fetcher-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            let inspector = DataInspector::new(config)?;
            data_fetcher_mcp::repl::run(&inspector).await?;
        }
    }

    Ok(())
}
