use super::pending::PendingQueue;
use super::stats;
use super::types::{Dashboard, QueueSnapshot, SearchResults, TicketLocation, TicketLookup};
use crate::core::{Clock, Priority, SystemClock, Ticket, TicketBuilder, TicketId};
use crate::error::{Result, TicketDeskError};
use tracing::{debug, trace};

/// Owner of every ticket record
///
/// Holds the pending line, the append-only resolved list and the id counter.
/// Callers get clones or snapshots back, never references into the queue
/// that outlive a call. Each mutating operation either applies fully or
/// leaves both collections untouched.
pub struct QueueManager {
    pending: PendingQueue,
    resolved: Vec<Ticket>,
    next_id: u64,
    clock: Box<dyn Clock>,
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueueManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueManager")
            .field("pending", &self.pending.len())
            .field("resolved", &self.resolved.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl QueueManager {
    /// Create an empty queue stamped by the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty queue with a custom time source
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            pending: PendingQueue::new(),
            resolved: Vec::new(),
            next_id: 1,
            clock: Box::new(clock),
        }
    }

    fn allocate_id(&mut self) -> TicketId {
        let id = TicketId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Admit a new pending ticket and return its id
    ///
    /// VIP and Emergency tickets go to the front of the line, Normal tickets
    /// to the back. The caller is responsible for rejecting empty names and
    /// issues.
    pub fn admit(
        &mut self,
        customer_name: impl Into<String>,
        issue_description: impl Into<String>,
        priority: Priority,
    ) -> TicketId {
        let id = self.allocate_id();
        let ticket = TicketBuilder::new(id)
            .customer_name(customer_name)
            .issue_description(issue_description)
            .priority(priority)
            .created_at(self.clock.now())
            .build();

        debug!(ticket_id = %id, %priority, front = priority.is_high(), "ticket admitted");
        self.pending.push(ticket);
        id
    }

    /// Record a ticket that is created and resolved in the same instant
    ///
    /// It never enters the pending line. Used to seed demo data.
    pub fn admit_resolved(
        &mut self,
        customer_name: impl Into<String>,
        issue_description: impl Into<String>,
        priority: Priority,
    ) -> TicketId {
        let id = self.allocate_id();
        let now = self.clock.now();
        let ticket = TicketBuilder::new(id)
            .customer_name(customer_name)
            .issue_description(issue_description)
            .priority(priority)
            .created_at(now)
            .resolved_at(now)
            .build();

        debug!(ticket_id = %id, "resolved ticket recorded");
        self.resolved.push(ticket);
        id
    }

    /// Resolve the ticket at the front of the line
    pub fn dispatch_next(&mut self) -> Result<Ticket> {
        let mut ticket = self.pending.pop_front().ok_or(TicketDeskError::EmptyQueue)?;
        ticket.resolve(self.clock.now());

        debug!(
            ticket_id = %ticket.id(),
            resolution_secs = ticket.resolution_seconds().unwrap_or_default(),
            "ticket resolved"
        );
        self.resolved.push(ticket.clone());
        Ok(ticket)
    }

    /// Remove a pending ticket; resolved tickets cannot be cancelled
    pub fn cancel(&mut self, id: TicketId) -> Result<Ticket> {
        let ticket = self
            .pending
            .remove(id)
            .ok_or(TicketDeskError::TicketNotFound { id })?;

        debug!(ticket_id = %id, "ticket cancelled");
        Ok(ticket)
    }

    /// Look a ticket up by id, pending line first
    pub fn find_by_id(&self, id: TicketId) -> Result<TicketLookup> {
        trace!(ticket_id = %id, "lookup by id");
        if let Some(ticket) = self.pending.get(id) {
            return Ok(TicketLookup {
                location: TicketLocation::Pending,
                ticket: ticket.clone(),
            });
        }

        self.resolved
            .iter()
            .find(|t| t.id() == id)
            .map(|ticket| TicketLookup {
                location: TicketLocation::Resolved,
                ticket: ticket.clone(),
            })
            .ok_or(TicketDeskError::TicketNotFound { id })
    }

    /// Case-insensitive substring search on customer names
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let results = SearchResults {
            pending: self
                .pending
                .iter()
                .filter(|t| t.customer_matches(&needle))
                .cloned()
                .collect(),
            resolved: self
                .resolved
                .iter()
                .filter(|t| t.customer_matches(&needle))
                .cloned()
                .collect(),
        };

        trace!(query, matches = results.len(), "lookup by name");
        results
    }

    /// Copy of both collections in their current order
    #[must_use]
    pub fn list_all(&self) -> QueueSnapshot {
        QueueSnapshot {
            pending: self.pending.iter().cloned().collect(),
            resolved: self.resolved.clone(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> Dashboard {
        let dashboard = stats::compute(self.pending.iter(), &self.resolved);
        trace!(?dashboard, "stats computed");
        dashboard
    }

    /// The ticket the next dispatch would resolve
    #[must_use]
    pub fn peek_next(&self) -> Option<&Ticket> {
        self.pending.front()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn resolved_len(&self) -> usize {
        self.resolved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ManualClock, abc_queue, pending_ids, resolved_ids};

    #[test]
    fn test_mixed_priority_walkthrough() {
        let mut queue = abc_queue();

        let served = queue.dispatch_next().unwrap();
        assert_eq!(served.id().value(), 3);
        assert_eq!(pending_ids(&queue), vec![2, 1]);
        assert_eq!(resolved_ids(&queue), vec![3]);

        queue.cancel(TicketId::new(1)).unwrap();
        assert_eq!(pending_ids(&queue), vec![2]);

        let results = queue.find_by_name("b");
        assert_eq!(results.pending.len(), 1);
        assert_eq!(results.pending[0].id().value(), 2);
        assert!(results.resolved.is_empty());
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut queue = QueueManager::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| queue.admit(format!("c{i}"), "issue", Priority::ALL[i % 3]).value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_are_never_reused_after_cancel_or_dispatch() {
        let mut queue = QueueManager::new();
        let first = queue.admit("A", "a", Priority::Normal);
        let second = queue.admit("B", "b", Priority::Normal);
        queue.cancel(second).unwrap();
        queue.dispatch_next().unwrap();
        let third = queue.admit("C", "c", Priority::Normal);

        assert_eq!(first.value(), 1);
        assert_eq!(third.value(), 3);
    }

    #[test]
    fn test_dispatch_empty_queue() {
        let mut queue = QueueManager::new();
        queue.admit_resolved("Old", "done", Priority::Normal);

        assert!(matches!(queue.dispatch_next(), Err(TicketDeskError::EmptyQueue)));
        assert_eq!(queue.resolved_len(), 1);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn test_dispatch_moves_ticket_to_resolved() {
        let clock = ManualClock::default();
        let mut queue = QueueManager::with_clock(clock.clone());
        let id = queue.admit("A", "issue", Priority::Normal);
        clock.advance_secs(42);

        let ticket = queue.dispatch_next().unwrap();
        assert_eq!(ticket.id(), id);
        assert!(ticket.resolved_at().unwrap() >= ticket.created_at());
        assert_eq!(ticket.resolution_seconds(), Some(42.0));
        assert!(pending_ids(&queue).is_empty());
        assert_eq!(resolved_ids(&queue), vec![1]);
    }

    #[test]
    fn test_cancel_resolved_ticket_is_not_found() {
        let mut queue = QueueManager::new();
        let id = queue.admit("A", "issue", Priority::Vip);
        queue.dispatch_next().unwrap();

        assert!(matches!(
            queue.cancel(id),
            Err(TicketDeskError::TicketNotFound { id: missing }) if missing == id
        ));
        assert_eq!(resolved_ids(&queue), vec![1]);
    }

    #[test]
    fn test_cancel_unknown_id_leaves_queue_untouched() {
        let mut queue = QueueManager::new();
        queue.admit("A", "a", Priority::Normal);
        queue.admit("B", "b", Priority::Emergency);
        let before = queue.list_all();

        assert!(queue.cancel(TicketId::new(77)).is_err());
        assert_eq!(queue.list_all(), before);
    }

    #[test]
    fn test_find_by_id_reports_location() {
        let mut queue = QueueManager::new();
        let done = queue.admit("A", "a", Priority::Normal);
        queue.dispatch_next().unwrap();
        let waiting = queue.admit("B", "b", Priority::Normal);

        assert_eq!(queue.find_by_id(waiting).unwrap().location, TicketLocation::Pending);
        let lookup = queue.find_by_id(done).unwrap();
        assert_eq!(lookup.location, TicketLocation::Resolved);
        assert_eq!(lookup.ticket.customer_name(), "A");
        assert!(queue.find_by_id(TicketId::new(9)).is_err());
    }

    #[test]
    fn test_find_by_name_splits_collections() {
        let mut queue = QueueManager::new();
        queue.admit("Bob Johnson", "down", Priority::Normal);
        queue.admit("Jane Smith", "pay", Priority::Normal);
        queue.admit("bobby", "login", Priority::Vip);
        queue.dispatch_next().unwrap(); // resolves bobby

        let results = queue.find_by_name("BOB");
        let pending: Vec<_> = results.pending.iter().map(|t| t.id().value()).collect();
        let resolved: Vec<_> = results.resolved.iter().map(|t| t.id().value()).collect();
        assert_eq!(pending, vec![1]);
        assert_eq!(resolved, vec![3]);

        assert!(queue.find_by_name("nobody").is_empty());
    }

    #[test]
    fn test_stats_average_resolution() {
        let clock = ManualClock::default();
        let mut queue = QueueManager::with_clock(clock.clone());
        assert!(queue.stats().average_resolution_secs.is_none());

        queue.admit("A", "a", Priority::Normal);
        queue.admit("B", "b", Priority::Normal);
        queue.admit("C", "c", Priority::Emergency);
        clock.advance_secs(10);
        queue.dispatch_next().unwrap(); // C after 10s
        clock.advance_secs(20);
        queue.dispatch_next().unwrap(); // A after 30s

        let dashboard = queue.stats();
        assert_eq!(dashboard.pending, 1);
        assert_eq!(dashboard.resolved, 2);
        assert_eq!(dashboard.total, 3);
        assert_eq!(dashboard.average_resolution_secs, Some(20.0));
        assert_eq!(dashboard.pending_by_priority.count(Priority::Normal), 1);
        assert_eq!(dashboard.pending_by_priority.count(Priority::Emergency), 0);
    }

    #[test]
    fn test_peek_next_matches_dispatch() {
        let mut queue = QueueManager::new();
        assert!(queue.peek_next().is_none());
        queue.admit("A", "a", Priority::Normal);
        queue.admit("B", "b", Priority::Vip);

        let next = queue.peek_next().map(Ticket::id);
        assert_eq!(next, queue.dispatch_next().ok().map(|t| t.id()));
    }
}
