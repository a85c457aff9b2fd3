//! Test utilities for ticket-desk
//!
//! Common fixtures shared by the unit tests: a clock the test advances by
//! hand and helpers that read queue order as plain ids.

#![cfg(test)]

use crate::core::{Clock, Priority};
use crate::queue::QueueManager;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Clock that only moves when told to
///
/// Clones share the same instant, so a test keeps one handle and gives the
/// other to the queue.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn starting_at(time: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(time)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += Duration::seconds(secs);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// Pending ticket ids in service order
pub fn pending_ids(queue: &QueueManager) -> Vec<u64> {
    queue.list_all().pending.iter().map(|t| t.id().value()).collect()
}

/// Resolved ticket ids in resolution order
pub fn resolved_ids(queue: &QueueManager) -> Vec<u64> {
    queue.list_all().resolved.iter().map(|t| t.id().value()).collect()
}

/// Queue holding A (Normal), B (VIP) and C (Emergency), admitted in that order
pub fn abc_queue() -> QueueManager {
    let mut queue = QueueManager::with_clock(ManualClock::default());
    queue.admit("A", "issue1", Priority::Normal);
    queue.admit("B", "issue2", Priority::Vip);
    queue.admit("C", "issue3", Priority::Emergency);
    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        let start = clock.now();
        handle.advance_secs(5);
        assert_eq!(clock.now() - start, Duration::seconds(5));
    }

    #[test]
    fn test_abc_queue_order() {
        let queue = abc_queue();
        assert_eq!(pending_ids(&queue), vec![3, 2, 1]);
        assert!(resolved_ids(&queue).is_empty());
    }
}
