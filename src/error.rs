//! Error types for ticket-desk
//!
//! Every failure the queue can report is a value, never a panic. The
//! presentation layer decides whether an error ends the process or is
//! shown and the session continues.

use crate::core::TicketId;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Errors produced by the queue and its presentation layer
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// Dispatch was requested while no ticket is pending
    #[error("No pending tickets to resolve")]
    EmptyQueue,

    /// Cancel was requested while no ticket is pending
    #[error("No pending tickets to cancel")]
    NothingToCancel,

    /// No ticket with the given id exists in the searched collections
    #[error("Ticket #{id} not found")]
    TicketNotFound { id: TicketId },

    /// A customer name search matched nothing
    #[error("No tickets found for customer: {query}")]
    NoMatches { query: String },

    /// Input rejected before it reached the queue
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Priority text that is not one of the known classes
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Configuration could not be loaded
    #[error("Failed to read config: {0}")]
    ConfigError(String),

    /// JSON output failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Custom(String),
}

impl TicketDeskError {
    /// Create a custom error from any displayable message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Message shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File system error: {e}"),
            Self::Prompt(e) => format!("Could not read from the terminal: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints for recovering from the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyQueue | Self::NothingToCancel => {
                vec!["Create a ticket first with 'create <name> <issue>'".to_string()]
            },
            Self::TicketNotFound { .. } => vec![
                "Use 'list' to see pending and resolved tickets".to_string(),
                "Only pending tickets can be cancelled".to_string(),
            ],
            Self::NoMatches { .. } => {
                vec!["Search is a case-insensitive substring match on the customer name".to_string()]
            },
            Self::InvalidPriority(_) => {
                vec!["Valid priorities: normal (0), vip (1), emergency (2)".to_string()]
            },
            Self::ConfigError(_) => vec![
                "Check the TOML syntax of the config file".to_string(),
                "Environment overrides use the TICKET_DESK__ prefix".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether an interactive session can carry on after this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyQueue
                | Self::NothingToCancel
                | Self::TicketNotFound { .. }
                | Self::NoMatches { .. }
                | Self::InvalidInput(_)
                | Self::InvalidPriority(_)
        )
    }

    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }
}

impl From<config::ConfigError> for TicketDeskError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TicketDeskError::EmptyQueue.to_string(),
            "No pending tickets to resolve"
        );
        assert_eq!(
            TicketDeskError::TicketNotFound { id: TicketId::new(7) }.to_string(),
            "Ticket #7 not found"
        );
        assert_eq!(
            TicketDeskError::NoMatches {
                query: "zed".to_string()
            }
            .to_string(),
            "No tickets found for customer: zed"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(TicketDeskError::EmptyQueue.is_recoverable());
        assert!(TicketDeskError::NothingToCancel.is_recoverable());
        assert!(TicketDeskError::InvalidInput("x".into()).is_recoverable());
        assert!(!TicketDeskError::ConfigError("bad".into()).is_recoverable());
        assert!(TicketDeskError::ConfigError("bad".into()).is_config_error());
    }

    #[test]
    fn test_suggestions() {
        assert!(!TicketDeskError::EmptyQueue.suggestions().is_empty());
        assert!(TicketDeskError::custom("boom").suggestions().is_empty());
    }
}
