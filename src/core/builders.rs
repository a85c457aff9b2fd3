use super::{Priority, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// The id is mandatory; it is handed out by the queue's counter and never
/// defaulted.
pub struct TicketBuilder {
    id: TicketId,
    customer_name: Option<String>,
    issue_description: Option<String>,
    priority: Option<Priority>,
    created_at: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub const fn new(id: TicketId) -> Self {
        Self {
            id,
            customer_name: None,
            issue_description: None,
            priority: None,
            created_at: None,
            resolved_at: None,
        }
    }

    /// Set the customer name
    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Set the issue description
    #[must_use]
    pub fn issue_description(mut self, issue: impl Into<String>) -> Self {
        self.issue_description = Some(issue.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `resolved_at` timestamp
    #[must_use]
    pub const fn resolved_at(mut self, resolved_at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(resolved_at);
        self
    }

    /// Build the ticket
    ///
    /// A resolution time earlier than the creation time is clamped up to it.
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id,
            customer_name: self.customer_name.unwrap_or_default(),
            issue_description: self.issue_description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            created_at,
            resolved_at: self.resolved_at.map(|at| at.max(created_at)),
        }
    }
}
