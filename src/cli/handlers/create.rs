//! Handler for ticket creation

use crate::cli::output::OutputFormatter;
use crate::core::{Priority, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::queue::QueueManager;
use serde_json::json;

/// Trim and check the customer name and issue text
///
/// # Errors
///
/// Returns `InvalidInput` if either value is empty after trimming.
pub fn validate_ticket_input(name: &str, issue: &str) -> Result<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TicketDeskError::InvalidInput("Name cannot be empty".to_string()));
    }

    let issue = issue.trim();
    if issue.is_empty() {
        return Err(TicketDeskError::InvalidInput("Issue cannot be empty".to_string()));
    }

    Ok((name.to_string(), issue.to_string()))
}

/// Parse a priority, falling back to `default` with a warning
pub fn parse_priority_or_default(
    input: Option<&str>,
    default: Priority,
    output: &OutputFormatter,
) -> Priority {
    match input.map(str::parse::<Priority>) {
        None => default,
        Some(Ok(priority)) => priority,
        Some(Err(e)) => {
            output.warning(&format!("{e}. Setting to {default}."));
            default
        },
    }
}

/// Handler for the `create` command
///
/// Validates the input, admits the ticket and reports its id.
pub fn handle_create_command(
    queue: &mut QueueManager,
    name: &str,
    issue: &str,
    priority: Priority,
    output: &OutputFormatter,
) -> Result<TicketId> {
    let (name, issue) = validate_ticket_input(name, issue)?;
    let id = queue.admit(name, issue, priority);

    if output.is_json() {
        output.print_json(&json!({
            "status": "created",
            "id": id,
            "priority": priority,
            "pending": queue.pending_len(),
        }))?;
    } else {
        output.success(&format!("Ticket #{id} created successfully!"));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_input() {
        let (name, issue) = validate_ticket_input("  Ann ", " broken\n").unwrap();
        assert_eq!(name, "Ann");
        assert_eq!(issue, "broken");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(matches!(
            validate_ticket_input("   ", "issue"),
            Err(TicketDeskError::InvalidInput(msg)) if msg.contains("Name")
        ));
        assert!(matches!(
            validate_ticket_input("Ann", ""),
            Err(TicketDeskError::InvalidInput(msg)) if msg.contains("Issue")
        ));
    }

    #[test]
    fn test_blank_input_never_reaches_queue() {
        let mut queue = QueueManager::new();
        let output = OutputFormatter::new(false, true);
        assert!(handle_create_command(&mut queue, "", "x", Priority::Vip, &output).is_err());
        assert_eq!(queue.pending_len(), 0);

        let id = handle_create_command(&mut queue, "Ann", "x", Priority::Vip, &output).unwrap();
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_priority_fallback() {
        let output = OutputFormatter::new(false, true);
        assert_eq!(
            parse_priority_or_default(Some("7"), Priority::Normal, &output),
            Priority::Normal
        );
        assert_eq!(
            parse_priority_or_default(Some("vip"), Priority::Normal, &output),
            Priority::Vip
        );
        assert_eq!(
            parse_priority_or_default(None, Priority::Emergency, &output),
            Priority::Emergency
        );
    }
}
