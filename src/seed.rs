//! Demo data loaded at startup
//!
//! Three pending tickets (one per priority class) and one ticket that is
//! already resolved. Everything goes through the queue manager, so ids and
//! ordering follow the normal admission rules.

use crate::core::{Priority, TicketId};
use crate::queue::QueueManager;
use tracing::info;

/// Load the sample tickets, returning the ids in creation order
pub fn load_sample_data(queue: &mut QueueManager) -> Vec<TicketId> {
    let ids = vec![
        queue.admit("John Doe", "Unable to login to account", Priority::Normal),
        queue.admit("Jane Smith", "Payment processing error", Priority::Vip),
        queue.admit(
            "Bob Johnson",
            "System down - critical business impact",
            Priority::Emergency,
        ),
        queue.admit_resolved("Alice Brown", "Password reset request", Priority::Normal),
    ];

    info!(
        pending = queue.pending_len(),
        resolved = queue.resolved_len(),
        "sample data loaded"
    );
    ids
}
