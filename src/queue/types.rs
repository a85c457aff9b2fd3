//! Result types returned by the queue manager

use crate::core::{Priority, Ticket};
use serde::Serialize;
use std::fmt;

/// Which collection a looked-up ticket came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketLocation {
    Pending,
    Resolved,
}

impl fmt::Display for TicketLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending queue"),
            Self::Resolved => write!(f, "resolved tickets"),
        }
    }
}

/// A ticket found by id, tagged with where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLookup {
    pub location: TicketLocation,
    pub ticket: Ticket,
}

/// Matches from a customer-name search, each list in collection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub pending: Vec<Ticket>,
    pub resolved: Vec<Ticket>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.resolved.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.resolved.len()
    }
}

/// Point-in-time copy of both collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    /// In service order
    pub pending: Vec<Ticket>,
    /// In resolution order
    pub resolved: Vec<Ticket>,
}

/// Pending ticket counts per priority class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityDistribution {
    pub normal: usize,
    pub vip: usize,
    pub emergency: usize,
}

impl PriorityDistribution {
    pub(crate) fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Normal => self.normal += 1,
            Priority::Vip => self.vip += 1,
            Priority::Emergency => self.emergency += 1,
        }
    }

    #[must_use]
    pub const fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Normal => self.normal,
            Priority::Vip => self.vip,
            Priority::Emergency => self.emergency,
        }
    }
}

/// Aggregate statistics for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub pending: usize,
    pub resolved: usize,
    pub total: usize,
    /// `None` when nothing has been resolved yet
    pub average_resolution_secs: Option<f64>,
    pub pending_by_priority: PriorityDistribution,
}
