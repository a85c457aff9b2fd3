//! Ticket queue manager
//!
//! Admission, dispatch, cancellation, lookup and reporting over an in-memory
//! pending line and resolved list.

mod manager;
mod pending;
mod stats;
mod types;

pub use manager::QueueManager;
pub use pending::PendingQueue;
pub use types::{
    Dashboard, PriorityDistribution, QueueSnapshot, SearchResults, TicketLocation, TicketLookup,
};
