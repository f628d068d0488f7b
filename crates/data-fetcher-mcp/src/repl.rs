//! Interactive REPL for my-data-fetcher.
//!
//! Launch with `data-fetcher-mcp repl`. Each command runs the same operation
//! as the matching MCP tool. Type `/help` for commands, Tab for completion.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use data_fetcher::DataInspector;

use crate::tools::ToolRegistry;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/fetch", "Fetch the raw data (get_my_data)"),
    ("/ask", "Ask a question about the data"),
    ("/analyze", "Analyze the JSON structure, optional query"),
    ("/summary", "Show a quick summary"),
    ("/target", "Show the fixed target URL"),
    ("/tools", "List available MCP tools"),
    ("/info", "Show server capabilities"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// REPL helper for tab completion and hints.
#[derive(Default)]
struct FetcherHelper;

impl Completer for FetcherHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if input.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let matches: Vec<Pair> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| Pair {
                display: format!("{cmd:<16} {desc}"),
                replacement: format!("{cmd} "),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for FetcherHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for FetcherHelper {}
impl Validator for FetcherHelper {}
impl Helper for FetcherHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// A parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Fetch,
    Ask(&'a str),
    Analyze(Option<&'a str>),
    Summary,
    Target,
    Tools,
    Info,
    Clear,
    Help,
    Exit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ReplCommand<'_> {
    let input = line.strip_prefix('/').unwrap_or(line);
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match cmd {
        "" | "help" | "h" | "?" => ReplCommand::Help,
        "exit" | "quit" => ReplCommand::Exit,
        "fetch" | "get" => ReplCommand::Fetch,
        "ask" => ReplCommand::Ask(args),
        "analyze" => ReplCommand::Analyze(Some(args).filter(|a| !a.is_empty())),
        "summary" => ReplCommand::Summary,
        "target" | "url" => ReplCommand::Target,
        "tools" => ReplCommand::Tools,
        "info" => ReplCommand::Info,
        "clear" | "cls" => ReplCommand::Clear,
        other => ReplCommand::Unknown(other),
    }
}

/// Run the interactive REPL against the given inspector.
pub async fn run(inspector: &DataInspector) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mdata-fetcher-mcp v{}\x1b[0m \x1b[90m\u{2014} {}\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        inspector.target()
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<FetcherHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(FetcherHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".my_data_fetcher_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = " \x1b[36mdata>\x1b[0m ";

    loop {
        // readline blocks the thread; keep it off the async workers.
        let line = tokio::task::block_in_place(|| rl.readline(prompt));
        match line {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match parse_command(line) {
                    ReplCommand::Exit => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                        break;
                    }
                    ReplCommand::Help => cmd_help(),
                    ReplCommand::Clear => eprint!("\x1b[2J\x1b[H"),
                    ReplCommand::Info => cmd_info(),
                    ReplCommand::Tools => cmd_tools(),
                    ReplCommand::Target => eprintln!("  {}", inspector.target()),
                    ReplCommand::Fetch => {
                        let data = inspector.get_my_data().await;
                        print_block(&serde_json::to_string_pretty(&data)?);
                    }
                    ReplCommand::Ask("") => eprintln!("  Usage: /ask <question>"),
                    ReplCommand::Ask(question) => {
                        print_block(&inspector.ask_about_my_data(question).await);
                    }
                    ReplCommand::Analyze(query) => {
                        print_block(&inspector.analyze_my_json_data(query).await);
                    }
                    ReplCommand::Summary => {
                        print_block(&inspector.get_my_data_summary().await);
                    }
                    ReplCommand::Unknown(cmd) => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn print_block(text: &str) {
    eprintln!();
    for line in text.lines() {
        eprintln!("  {line}");
    }
    eprintln!();
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
}

fn cmd_info() {
    let capabilities = crate::types::InitializeResult::default_result();
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!(
        "  Server:   {} v{}",
        capabilities.server_info.name, capabilities.server_info.version
    );
    eprintln!("  Protocol: {}", capabilities.protocol_version);
    eprintln!("  Tools:    {}", tools.len());
    eprintln!();
}

fn cmd_tools() {
    let tools = ToolRegistry::list_tools();
    eprintln!();
    eprintln!("  {} MCP tools available:", tools.len());
    eprintln!();
    for tool in &tools {
        eprintln!(
            "    {:<24} {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }
    eprintln!();
}
