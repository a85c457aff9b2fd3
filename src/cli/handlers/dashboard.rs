//! Handler for the statistics dashboard

use crate::cli::output::OutputFormatter;
use crate::core::Priority;
use crate::error::Result;
use crate::queue::{Dashboard, QueueManager};
use serde_json::json;

/// Handler for the `stats` command
pub fn handle_dashboard_command(queue: &QueueManager, output: &OutputFormatter) -> Result<()> {
    let dashboard = queue.stats();

    if output.is_json() {
        return output.print_json(&json!({
            "dashboard": dashboard,
            "next_ticket": queue.peek_next().map(|t| t.id()),
        }));
    }

    for line in dashboard_lines(&dashboard) {
        output.info(&line);
    }
    if let Some(next) = queue.peek_next() {
        output.info(&format!("\nNext up: #{} ({})", next.id(), next.customer_name()));
    }

    Ok(())
}

/// Text lines of the dashboard
pub fn dashboard_lines(dashboard: &Dashboard) -> Vec<String> {
    let average = dashboard.average_resolution_secs.map_or_else(
        || "N/A (no resolved tickets)".to_string(),
        |secs| format!("{secs:.2} seconds"),
    );

    let mut lines = vec![
        "\n=== STATISTICS DASHBOARD ===".to_string(),
        format!("Pending Tickets: {}", dashboard.pending),
        format!("Resolved Tickets: {}", dashboard.resolved),
        format!("Total Tickets: {}", dashboard.total),
        format!("Average Resolution Time: {average}"),
        "\nPending Tickets by Priority:".to_string(),
    ];
    lines.extend(
        Priority::ALL
            .iter()
            .map(|p| format!("{p}: {}", dashboard.pending_by_priority.count(*p))),
    );
    lines
}
