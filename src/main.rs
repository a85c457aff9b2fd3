//! ticket-desk - Support ticket intake and resolution tracker
//!
//! Entry point for the CLI. Parses arguments, loads configuration, builds the
//! in-memory queue and hands it to the interactive menu or the script runner.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use ticket_desk::cli::{Cli, Commands, OutputFormatter, ScriptRunner};
use ticket_desk::config::Config;
use ticket_desk::error::{Result, TicketDeskError};
use ticket_desk::interactive::MenuSession;
use ticket_desk::queue::QueueManager;
use ticket_desk::seed::load_sample_data;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, formatter.clone()) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Install the tracing subscriber on stderr
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` decides and the
/// default is warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let formatter = if config.output.color {
        formatter
    } else {
        OutputFormatter::new(cli.json, true)
    }
    .with_time_format(config.output.time_format.clone());

    let mut queue = QueueManager::new();
    if config.seed_sample_data && !cli.no_seed {
        load_sample_data(&mut queue);
        formatter.info("Sample data loaded: 3 pending tickets, 1 resolved ticket\n");
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => MenuSession::new(config.default_priority).run(&mut queue, &formatter),
        Commands::Run { script, strict } => {
            let mut runner =
                ScriptRunner::new(&mut queue, &formatter, config.default_priority).strict(strict);
            let summary = if script == "-" {
                runner.run(io::stdin().lock())?
            } else {
                let file = File::open(&script).map_err(|e| {
                    TicketDeskError::custom(format!("Failed to open script {script}: {e}"))
                })?;
                runner.run(BufReader::new(file))?
            };

            tracing::info!(executed = summary.executed, failed = summary.failed, "script finished");
            if summary.failed > 0 {
                formatter.warning(&format!(
                    "{} of {} commands failed",
                    summary.failed, summary.executed
                ));
            }
            Ok(())
        },
    }
}

/// Display an error with its suggestions
fn handle_error(error: &TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
