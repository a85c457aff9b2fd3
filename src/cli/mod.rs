//! Command-line interface
//!
//! Argument parsing, output formatting and the handlers that connect user
//! input to the queue manager.

pub mod handlers;
pub mod output;
pub mod script;

pub use output::OutputFormatter;
pub use script::{ScriptCommand, ScriptRunner, ScriptSummary};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Support ticket intake and resolution tracker
#[derive(Parser, Debug)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "TICKET_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with an empty queue instead of the sample tickets
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive numbered menu (default)
    Menu,

    /// Run a command script against a fresh queue
    Run {
        /// Script file, or `-` for stdin
        script: String,

        /// Stop at the first failing line
        #[arg(long)]
        strict: bool,
    },
}
