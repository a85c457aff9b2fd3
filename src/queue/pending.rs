//! Pending ticket ordering
//!
//! Two tiers: a stack of high-priority (VIP and Emergency) tickets in front
//! of a FIFO line of Normal tickets. The most recently admitted high-priority
//! ticket is served first; Normal tickets are served in arrival order once the
//! stack is empty.

use crate::core::{Ticket, TicketId};
use std::collections::VecDeque;

#[derive(Debug, Default, Clone)]
pub struct PendingQueue {
    /// Top of the stack is the last element
    high: Vec<Ticket>,
    normal: VecDeque<Ticket>,
}

impl PendingQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a ticket according to its priority class
    pub fn push(&mut self, ticket: Ticket) {
        if ticket.priority().is_high() {
            self.high.push(ticket);
        } else {
            self.normal.push_back(ticket);
        }
    }

    /// Remove the ticket at the front of the line
    pub fn pop_front(&mut self) -> Option<Ticket> {
        self.high.pop().or_else(|| self.normal.pop_front())
    }

    #[must_use]
    pub fn front(&self) -> Option<&Ticket> {
        self.high.last().or_else(|| self.normal.front())
    }

    /// Remove the first ticket with the given id, front to rear
    pub fn remove(&mut self, id: TicketId) -> Option<Ticket> {
        if let Some(pos) = self.high.iter().rposition(|t| t.id() == id) {
            return Some(self.high.remove(pos));
        }
        let pos = self.normal.iter().position(|t| t.id() == id)?;
        self.normal.remove(pos)
    }

    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.iter().find(|t| t.id() == id)
    }

    /// Tickets in service order
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.high.iter().rev().chain(self.normal.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len() + self.normal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.normal.is_empty()
    }
}
