//! Handler for cancelling a pending ticket

use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::{Result, TicketDeskError};
use crate::queue::QueueManager;
use serde_json::json;

/// Handler for the `cancel` command
///
/// # Errors
///
/// Returns `NothingToCancel` when the pending line is empty, otherwise
/// `TicketNotFound` if no pending ticket has the id, including ids of tickets
/// that were already resolved.
pub fn handle_cancel_command(
    queue: &mut QueueManager,
    id: TicketId,
    output: &OutputFormatter,
) -> Result<()> {
    if queue.pending_len() == 0 {
        return Err(TicketDeskError::NothingToCancel);
    }

    let ticket = queue.cancel(id)?;

    if output.is_json() {
        output.print_json(&json!({
            "status": "cancelled",
            "id": ticket.id(),
            "pending": queue.pending_len(),
        }))?;
    } else {
        output.success(&format!("Ticket #{} cancelled successfully!", ticket.id()));
    }

    Ok(())
}
