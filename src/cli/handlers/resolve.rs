//! Handler for resolving the next pending ticket

use super::common::ticket_json;
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::queue::QueueManager;
use serde_json::json;

/// Handler for the `resolve` command
///
/// # Errors
///
/// Returns `EmptyQueue` when nothing is pending.
pub fn handle_resolve_command(queue: &mut QueueManager, output: &OutputFormatter) -> Result<()> {
    let ticket = queue.dispatch_next()?;

    if output.is_json() {
        output.print_json(&json!({
            "status": "resolved",
            "ticket": ticket_json(&ticket),
            "pending": queue.pending_len(),
        }))?;
    } else {
        output.success(&format!("\nTicket #{} resolved successfully!", ticket.id()));
        output.info(&format!("Customer: {}", ticket.customer_name()));
        output.info(&format!("Issue: {}", ticket.issue_description()));
    }

    Ok(())
}
