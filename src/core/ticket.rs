use super::Priority;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, monotonically assigned ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Lifecycle state, derived from whether the ticket has a resolution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Resolved,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Resolved => write!(f, "RESOLVED"),
        }
    }
}

/// A customer support ticket
///
/// Fields are private: id, customer, issue, priority and creation time are
/// fixed once the ticket exists, and the resolution time can only be set by
/// the queue, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub(super) id: TicketId,
    pub(super) customer_name: String,
    pub(super) issue_description: String,
    pub(super) priority: Priority,
    pub(super) created_at: DateTime<Utc>,
    pub(super) resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn issue_description(&self) -> &str {
        &self.issue_description
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        if self.resolved_at.is_some() {
            TicketStatus::Resolved
        } else {
            TicketStatus::Pending
        }
    }

    /// Time between creation and resolution, if resolved
    #[must_use]
    pub fn resolution_time(&self) -> Option<Duration> {
        self.resolved_at.map(|resolved| resolved - self.created_at)
    }

    /// Resolution time in fractional seconds
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn resolution_seconds(&self) -> Option<f64> {
        self.resolution_time().map(|delta| {
            delta
                .num_microseconds()
                .map_or_else(|| delta.num_seconds() as f64, |us| us as f64 / 1_000_000.0)
        })
    }

    /// Case-insensitive substring match on the customer name
    ///
    /// `query_lower` must already be lowercased.
    #[must_use]
    pub fn customer_matches(&self, query_lower: &str) -> bool {
        self.customer_name.to_lowercase().contains(query_lower)
    }

    /// Mark the ticket resolved; the stamp never precedes creation
    pub(crate) fn resolve(&mut self, at: DateTime<Utc>) {
        debug_assert!(self.resolved_at.is_none(), "ticket resolved twice");
        self.resolved_at = Some(at.max(self.created_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_ticket_id_parse() {
        assert_eq!("42".parse::<TicketId>().unwrap(), TicketId::new(42));
        assert_eq!("#7".parse::<TicketId>().unwrap(), TicketId::new(7));
        assert!("abc".parse::<TicketId>().is_err());
    }

    #[test]
    fn test_resolve_sets_status_and_duration() {
        let mut ticket = TicketBuilder::new(TicketId::new(1))
            .customer_name("Ann")
            .issue_description("Broken printer")
            .created_at(at(0))
            .build();
        assert_eq!(ticket.status(), TicketStatus::Pending);
        assert!(ticket.resolution_seconds().is_none());

        ticket.resolve(at(90));
        assert_eq!(ticket.status(), TicketStatus::Resolved);
        assert_eq!(ticket.resolved_at(), Some(at(90)));
        assert_eq!(ticket.resolution_seconds(), Some(90.0));
    }

    #[test]
    fn test_resolve_never_precedes_creation() {
        let mut ticket = TicketBuilder::new(TicketId::new(1))
            .customer_name("Ann")
            .issue_description("Clock skew")
            .created_at(at(10))
            .build();
        ticket.resolve(at(5));
        assert_eq!(ticket.resolved_at(), Some(at(10)));
    }

    #[test]
    fn test_customer_matches_case_insensitive() {
        let ticket = TicketBuilder::new(TicketId::new(3))
            .customer_name("Jane Smith")
            .issue_description("Payment error")
            .build();
        assert!(ticket.customer_matches("smith"));
        assert!(ticket.customer_matches("e s"));
        assert!(!ticket.customer_matches("john"));
    }
}
