//! Output formatting for the terminal
//!
//! Text goes to stdout with optional color. In JSON mode only JSON documents
//! reach stdout; warnings and errors always go to stderr.

use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct OutputFormatter {
    json: bool,
    time_format: String,
}

impl OutputFormatter {
    /// Create a formatter; `no_color` disables ANSI colors process-wide
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self {
            json,
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{}", message.green());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Section header followed by a rule
    pub fn heading(&self, title: &str) {
        if !self.json {
            println!("\n{}", title.bold());
            println!("{}", "=".repeat(50));
        }
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }

    /// Pretty-print a value as JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Render a timestamp in local time with the configured format
    pub fn format_time(&self, time: DateTime<Utc>) -> String {
        time.with_timezone(&Local).format(&self.time_format).to_string()
    }
}
