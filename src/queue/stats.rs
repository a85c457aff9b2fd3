use super::types::{Dashboard, PriorityDistribution};
use crate::core::Ticket;

/// Compute dashboard figures from the two collections
///
/// The priority distribution only counts pending tickets.
#[allow(clippy::cast_precision_loss)]
pub fn compute<'a>(
    pending: impl Iterator<Item = &'a Ticket>,
    resolved: &[Ticket],
) -> Dashboard {
    let mut pending_by_priority = PriorityDistribution::default();
    let mut pending_count = 0;
    for ticket in pending {
        pending_by_priority.record(ticket.priority());
        pending_count += 1;
    }

    let average_resolution_secs = if resolved.is_empty() {
        None
    } else {
        let total: f64 = resolved
            .iter()
            .filter_map(Ticket::resolution_seconds)
            .sum();
        Some(total / resolved.len() as f64)
    };

    Dashboard {
        pending: pending_count,
        resolved: resolved.len(),
        total: pending_count + resolved.len(),
        average_resolution_secs,
        pending_by_priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, TicketBuilder, TicketId};
    use chrono::{DateTime, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn resolved(id: u64, created: i64, done: i64) -> Ticket {
        TicketBuilder::new(TicketId::new(id))
            .customer_name("x")
            .issue_description("y")
            .created_at(at(created))
            .resolved_at(at(done))
            .build()
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = compute(std::iter::empty(), &[]);
        assert_eq!(dashboard.total, 0);
        assert!(dashboard.average_resolution_secs.is_none());
        assert_eq!(dashboard.pending_by_priority, PriorityDistribution::default());
    }

    #[test]
    fn test_average_is_arithmetic_mean() {
        let done = vec![resolved(1, 0, 10), resolved(2, 0, 20), resolved(3, 5, 65)];
        let dashboard = compute(std::iter::empty(), &done);
        assert_eq!(dashboard.resolved, 3);
        assert_eq!(dashboard.average_resolution_secs, Some(30.0));
    }

    #[test]
    fn test_distribution_counts_pending_only() {
        let pending = vec![
            TicketBuilder::new(TicketId::new(1)).priority(Priority::Vip).build(),
            TicketBuilder::new(TicketId::new(2)).priority(Priority::Normal).build(),
            TicketBuilder::new(TicketId::new(3)).priority(Priority::Vip).build(),
        ];
        let done = vec![resolved(4, 0, 1)];
        let dashboard = compute(pending.iter(), &done);

        assert_eq!(dashboard.pending, 3);
        assert_eq!(dashboard.total, 4);
        assert_eq!(dashboard.pending_by_priority.count(Priority::Vip), 2);
        assert_eq!(dashboard.pending_by_priority.count(Priority::Normal), 1);
        assert_eq!(dashboard.pending_by_priority.count(Priority::Emergency), 0);
    }
}
