//! Handler for viewing every ticket

use super::common::{print_ticket_section, tickets_json};
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::queue::QueueManager;
use serde_json::json;

/// Handler for the `list` command
///
/// Shows pending tickets in service order, then resolved tickets in the
/// order they were resolved.
pub fn handle_list_command(queue: &QueueManager, output: &OutputFormatter) -> Result<()> {
    let snapshot = queue.list_all();

    if output.is_json() {
        return output.print_json(&json!({
            "pending": tickets_json(&snapshot.pending),
            "resolved": tickets_json(&snapshot.resolved),
        }));
    }

    output.info("\n=== ALL TICKETS ===");
    print_ticket_section(
        &format!("Pending Tickets ({}):", snapshot.pending.len()),
        &snapshot.pending,
        "No pending tickets.",
        output,
    );
    print_ticket_section(
        &format!("Resolved Tickets ({}):", snapshot.resolved.len()),
        &snapshot.resolved,
        "No resolved tickets.",
        output,
    );

    Ok(())
}
