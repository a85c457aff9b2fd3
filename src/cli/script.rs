//! Line-oriented command scripts
//!
//! Drives one in-memory queue from a file or stdin, one command per line:
//!
//! ```text
//! # comment
//! create "Jane Smith" "Payment processing error" vip
//! resolve
//! cancel 3
//! find 2
//! search jane
//! list
//! stats
//! exit
//! ```

use super::handlers::{
    handle_cancel_command, handle_create_command, handle_dashboard_command, handle_find_command,
    handle_list_command, handle_resolve_command, handle_search_command, parse_priority_or_default,
};
use super::output::OutputFormatter;
use crate::core::{Priority, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::queue::QueueManager;
use std::io::BufRead;
use tracing::debug;

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Create {
        name: String,
        issue: String,
        priority: Option<String>,
    },
    Resolve,
    Cancel(TicketId),
    Find(TicketId),
    Search(String),
    List,
    Stats,
    Exit,
}

/// Outcome of running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Split a line into arguments, honoring double quotes
///
/// # Errors
///
/// Returns `InvalidInput` for an unterminated quote.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            },
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            },
            c => {
                current.push(c);
                has_token = true;
            },
        }
    }

    if in_quotes {
        return Err(TicketDeskError::InvalidInput("unterminated quote".to_string()));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_id(arg: Option<&String>) -> Result<TicketId> {
    let arg = arg.ok_or_else(|| TicketDeskError::InvalidInput("missing ticket id".to_string()))?;
    arg.parse()
        .map_err(|_| TicketDeskError::InvalidInput(format!("invalid ticket id: {arg}")))
}

/// Parse one line; blank lines and `#` comments yield `None`
///
/// # Errors
///
/// Returns `InvalidInput` for unknown commands or missing arguments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let parsed = match command.to_lowercase().as_str() {
        "create" | "new" => {
            if args.len() < 2 || args.len() > 3 {
                return Err(TicketDeskError::InvalidInput(
                    "usage: create <name> <issue> [priority]".to_string(),
                ));
            }
            ScriptCommand::Create {
                name: args[0].clone(),
                issue: args[1].clone(),
                priority: args.get(2).cloned(),
            }
        },
        "resolve" => ScriptCommand::Resolve,
        "cancel" => ScriptCommand::Cancel(parse_id(args.first())?),
        "find" => ScriptCommand::Find(parse_id(args.first())?),
        "search" => {
            if args.is_empty() {
                return Err(TicketDeskError::InvalidInput("usage: search <name>".to_string()));
            }
            ScriptCommand::Search(args.join(" "))
        },
        "list" => ScriptCommand::List,
        "stats" | "dashboard" => ScriptCommand::Stats,
        "exit" | "quit" => ScriptCommand::Exit,
        other => {
            return Err(TicketDeskError::InvalidInput(format!("unknown command: {other}")));
        },
    };

    Ok(Some(parsed))
}

fn decode_line(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw)
        .map_err(|_| TicketDeskError::InvalidInput("line is not valid UTF-8".to_string()))
}

/// Executes script commands against a queue
pub struct ScriptRunner<'a> {
    queue: &'a mut QueueManager,
    output: &'a OutputFormatter,
    default_priority: Priority,
    strict: bool,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(queue: &'a mut QueueManager, output: &'a OutputFormatter, default_priority: Priority) -> Self {
        Self {
            queue,
            output,
            default_priority,
            strict: false,
        }
    }

    /// Stop at the first failing line instead of reporting and continuing
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run a single command
    pub fn execute(&mut self, command: ScriptCommand) -> Result<()> {
        debug!(?command, "executing script command");
        match command {
            ScriptCommand::Create { name, issue, priority } => {
                let priority =
                    parse_priority_or_default(priority.as_deref(), self.default_priority, self.output);
                handle_create_command(self.queue, &name, &issue, priority, self.output).map(|_| ())
            },
            ScriptCommand::Resolve => handle_resolve_command(self.queue, self.output),
            ScriptCommand::Cancel(id) => handle_cancel_command(self.queue, id, self.output),
            ScriptCommand::Find(id) => handle_find_command(self.queue, id, self.output),
            ScriptCommand::Search(query) => handle_search_command(self.queue, &query, self.output),
            ScriptCommand::List => handle_list_command(self.queue, self.output),
            ScriptCommand::Stats => handle_dashboard_command(self.queue, self.output),
            ScriptCommand::Exit => Ok(()),
        }
    }

    /// Run every line from `reader`
    ///
    /// Recoverable errors are reported with their line number and counted;
    /// other errors, or any error in strict mode, end the run.
    pub fn run(&mut self, mut reader: impl BufRead) -> Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let result = decode_line(&buf).and_then(parse_line).and_then(|parsed| match parsed {
                Some(ScriptCommand::Exit) => Ok(false),
                Some(command) => {
                    summary.executed += 1;
                    self.execute(command).map(|()| true)
                },
                None => Ok(true),
            });

            match result {
                Ok(true) => {},
                Ok(false) => break,
                Err(e) if e.is_recoverable() && !self.strict => {
                    summary.failed += 1;
                    self.output.error(&format!("line {line_no}: {}", e.user_message()));
                },
                Err(e) => {
                    return Err(TicketDeskError::custom(format!("line {line_no}: {}", e.user_message())));
                },
            }
        }

        Ok(summary)
    }
}
