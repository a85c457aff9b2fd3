//! Handlers for looking tickets up by id or customer name

use super::common::{print_ticket, print_ticket_section, ticket_json, tickets_json};
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::{Result, TicketDeskError};
use crate::queue::QueueManager;
use serde_json::json;

/// Handler for the `find` command
///
/// # Errors
///
/// Returns `TicketNotFound` if the id is in neither collection.
pub fn handle_find_command(queue: &QueueManager, id: TicketId, output: &OutputFormatter) -> Result<()> {
    let lookup = queue.find_by_id(id)?;

    if output.is_json() {
        output.print_json(&json!({
            "location": lookup.location,
            "ticket": ticket_json(&lookup.ticket),
        }))?;
    } else {
        output.info(&format!("\nTicket found in {}:", lookup.location));
        print_ticket(&lookup.ticket, output);
    }

    Ok(())
}

/// Handler for the `search` command
///
/// # Errors
///
/// Returns `NoMatches` when neither collection has a matching customer.
pub fn handle_search_command(queue: &QueueManager, query: &str, output: &OutputFormatter) -> Result<()> {
    let query = query.trim();
    let results = queue.find_by_name(query);

    if results.is_empty() {
        return Err(TicketDeskError::NoMatches {
            query: query.to_string(),
        });
    }

    if output.is_json() {
        output.print_json(&json!({
            "query": query,
            "pending": tickets_json(&results.pending),
            "resolved": tickets_json(&results.resolved),
        }))?;
        return Ok(());
    }

    output.info(&format!("\nSearching for tickets by customer: {query}"));
    if !results.pending.is_empty() {
        print_ticket_section("Pending tickets:", &results.pending, "", output);
    }
    if !results.resolved.is_empty() {
        print_ticket_section("Resolved tickets:", &results.resolved, "", output);
    }

    Ok(())
}
