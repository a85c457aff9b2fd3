//! Ticket rendering shared by the command handlers

use crate::cli::output::OutputFormatter;
use crate::core::Ticket;
use serde_json::{Value, json};

/// Print one ticket as a text block
pub fn print_ticket(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!("\nTicket ID: {}", ticket.id()));
    output.info(&format!("Customer: {}", ticket.customer_name()));
    output.info(&format!("Issue: {}", ticket.issue_description()));
    output.info(&format!("Priority: {}", ticket.priority()));
    output.info(&format!("Created: {}", output.format_time(ticket.created_at())));

    if let (Some(resolved_at), Some(secs)) = (ticket.resolved_at(), ticket.resolution_seconds()) {
        output.info(&format!("Resolved: {}", output.format_time(resolved_at)));
        output.info(&format!("Resolution Time: {secs:.2} seconds"));
    }

    output.info(&format!("Status: {}", ticket.status()));
    output.info(&"-".repeat(50));
}

/// Print a titled list of tickets, or `empty_message` when there are none
pub fn print_ticket_section(
    title: &str,
    tickets: &[Ticket],
    empty_message: &str,
    output: &OutputFormatter,
) {
    output.heading(title);
    if tickets.is_empty() {
        output.info(empty_message);
    }
    for ticket in tickets {
        print_ticket(ticket, output);
    }
}

/// JSON representation of a ticket
pub fn ticket_json(ticket: &Ticket) -> Value {
    json!({
        "id": ticket.id(),
        "customer_name": ticket.customer_name(),
        "issue_description": ticket.issue_description(),
        "priority": ticket.priority(),
        "status": ticket.status(),
        "created_at": ticket.created_at(),
        "resolved_at": ticket.resolved_at(),
        "resolution_secs": ticket.resolution_seconds(),
    })
}

pub fn tickets_json(tickets: &[Ticket]) -> Vec<Value> {
    tickets.iter().map(ticket_json).collect()
}
