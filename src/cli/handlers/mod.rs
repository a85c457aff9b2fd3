//! Command handlers
//!
//! Each handler takes the queue and an output formatter, calls one queue
//! operation and renders the result as text or JSON.

mod cancel;
mod common;
mod create;
mod dashboard;
mod list;
mod resolve;
mod search;

pub use cancel::handle_cancel_command;
pub use common::{print_ticket, ticket_json};
pub use create::{handle_create_command, parse_priority_or_default, validate_ticket_input};
pub use dashboard::{dashboard_lines, handle_dashboard_command};
pub use list::handle_list_command;
pub use resolve::handle_resolve_command;
pub use search::{handle_find_command, handle_search_command};
