//! ticket-desk - An in-memory support ticket intake and resolution tracker
//!
//! Customers file issues, agents resolve them in priority order, and
//! operators inspect state through search and aggregate statistics.
//!
//! - [`queue::QueueManager`] owns every ticket and decides which one is
//!   served next
//! - [`cli`] and [`interactive`] collect input and render results
//! - [`seed`] loads demo tickets at startup
//!
//! # Ordering
//!
//! VIP and Emergency tickets are admitted at the front of the pending line,
//! Normal tickets at the back. The two high classes are not ranked against
//! each other: the most recently admitted high-priority ticket is served
//! first.
//!
//! # Example
//!
//! ```rust
//! use ticket_desk::core::Priority;
//! use ticket_desk::queue::QueueManager;
//!
//! let mut queue = QueueManager::new();
//! queue.admit("A", "issue1", Priority::Normal);
//! let vip = queue.admit("B", "issue2", Priority::Vip);
//!
//! let served = queue.dispatch_next()?;
//! assert_eq!(served.id(), vip);
//! # Ok::<(), ticket_desk::TicketDeskError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod queue;
pub mod seed;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
