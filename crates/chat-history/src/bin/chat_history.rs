//! `chat-history`: manage a splay-indexed chat session history.
//!
//! Usage:
//!   chat-history [--file PATH] [--list-limit N] [-v] <command>
//!
//! Commands: `add <id> <title> [timestamp]`, `access <id>`, `list`,
//! `delete <id>`, `clear`, `tree`.
//!
//! The history file defaults to `chat_history.json` (or
//! `CHAT_HISTORY_FILE`). Results go to stdout as one JSON document; logs go
//! to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use chat_history::{execute, ChatHistory, Command, HistoryConfig, HistoryError, JsonFileStore, Outcome, Response};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: chat-history <command> [args]";
const USAGE_ERROR: &str = "Unknown command or missing arguments";

#[derive(Parser, Debug)]
#[command(name = "chat-history", version, about = "Splay-tree indexed chat session history")]
struct Args {
    /// History file (overrides CHAT_HISTORY_FILE)
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Most sessions `list` returns; 0 lists everything (overrides CHAT_HISTORY_LIST_LIMIT)
    #[arg(long, value_name = "N")]
    list_limit: Option<usize>,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{}", Response::error(usage_error(&e)));
            return ExitCode::from(2);
        }
    };
    init_logging(args.verbose);

    match run(args) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            println!("{}", Response::error(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome, HistoryError> {
    let mut config = HistoryConfig::from_env()?;
    if let Some(file) = args.file {
        config = config.with_history_file(file);
    }
    if let Some(limit) = args.list_limit {
        config = config.with_list_limit(limit);
    }

    let store = JsonFileStore::new(config.history_file.clone());
    let mut history = ChatHistory::open(store, config)?;
    execute(&mut history, args.command)
}

/// Error text for a rejected command line: the usage line when no command
/// was given, otherwise the first line of clap's report, e.g.
/// `unrecognized subcommand 'x'`.
fn usage_error(e: &clap::Error) -> String {
    if matches!(
        e.kind(),
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        return USAGE.to_string();
    }
    let rendered = e.to_string();
    let detail = rendered.lines().next().unwrap_or_default();
    let detail = detail.strip_prefix("error: ").unwrap_or(detail).trim();
    if detail.is_empty() {
        USAGE_ERROR.to_string()
    } else {
        format!("{USAGE_ERROR}: {detail}")
    }
}

/// `RUST_LOG` when set, else `chat_history=warn`; `-v` always adds
/// `chat_history=debug` on top.
fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chat_history=warn"));
    if verbose {
        if let Ok(directive) = "chat_history=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
