//! Command-line front end for the client shell.

mod repl;
mod run;

pub use repl::{parse_line, split_args, ReplCommand};
pub use run::{resolve_url, run};

use clap::{Parser, Subcommand};

pub const DEFAULT_URL: &str = "http://127.0.0.1:50051";

/// Shopping list client - talks to a running shopping-list-daemon
#[derive(Parser, Debug)]
#[command(name = "shopping-list", author, version, about, long_about = None)]
pub struct Cli {
    /// Daemon URL (falls back to ~/.shopping-list/config.toml, then the default)
    #[arg(long, env = "SHOPPING_LIST_URL")]
    pub url: Option<String>,

    /// Log level for client diagnostics on stderr
    #[arg(long, env = "SHOPPING_LIST_LOG_LEVEL", default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the list
    List,
    /// Add an item
    Add {
        /// Item text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date as YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Change an item's text, description or due date
    Edit {
        id: u64,
        /// New text; omitted keeps the current text
        #[arg(num_args = 0..)]
        text: Vec<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// New due date as YYYY-MM-DD, or "" to clear it
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete an item
    #[command(visible_alias = "rm")]
    Delete { id: u64 },
    /// Mark an item completed
    #[command(visible_alias = "complete")]
    Done { id: u64 },
    /// Interactive shell (default when no command is given)
    Shell,
    /// Show daemon version and item count
    Info,
    /// Stop the daemon
    Shutdown {
        /// Delay before stopping, e.g. "30s" or "2m"
        #[arg(long, default_value = "0s", value_parser = humantime::parse_duration)]
        delay: std::time::Duration,
    },
}
