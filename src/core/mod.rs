//! Core domain types: tickets, priorities and the clock that stamps them

mod builders;
mod clock;
mod priority;
mod ticket;

pub use builders::TicketBuilder;
pub use clock::{Clock, SystemClock};
pub use priority::Priority;
pub use ticket::{Ticket, TicketId, TicketStatus};
