//! Interactive menu for ticket-desk
//!
//! The numbered menu an operator drives from the terminal. Input is collected
//! and validated here; the queue only ever sees clean values.

use crate::cli::OutputFormatter;
use crate::cli::handlers::{
    handle_cancel_command, handle_create_command, handle_dashboard_command, handle_find_command,
    handle_list_command, handle_resolve_command, handle_search_command, validate_ticket_input,
};
use crate::core::{Priority, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::queue::QueueManager;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Resolve,
    Cancel,
    Search,
    ViewAll,
    Dashboard,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::Resolve,
        Self::Cancel,
        Self::Search,
        Self::ViewAll,
        Self::Dashboard,
        Self::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "1. Create Ticket",
            Self::Resolve => "2. Resolve Ticket",
            Self::Cancel => "3. Cancel Ticket",
            Self::Search => "4. Search Ticket",
            Self::ViewAll => "5. View All Tickets",
            Self::Dashboard => "6. Dashboard",
            Self::Exit => "7. Exit",
        }
    }

    /// Menu entry for a 1-based choice number
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Interactive menu session
pub struct MenuSession {
    theme: ColorfulTheme,
    default_priority: Priority,
}

impl MenuSession {
    pub fn new(default_priority: Priority) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            default_priority,
        }
    }

    /// Run the menu until the operator exits
    ///
    /// Recoverable errors are shown and the loop continues.
    pub fn run(&self, queue: &mut QueueManager, output: &OutputFormatter) -> Result<()> {
        output.info("Customer Ticket Booking System");
        output.info(&"=".repeat(50));

        loop {
            let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
            let selection = Select::with_theme(&self.theme)
                .with_prompt("Menu Options")
                .items(&labels)
                .default(0)
                .interact()?;

            let Some(choice) = MenuChoice::from_number(selection + 1) else {
                continue;
            };
            if choice == MenuChoice::Exit {
                output.info("Thank you for using the Customer Ticket Booking System!");
                return Ok(());
            }

            match self.handle_choice(choice, queue, output) {
                Ok(()) => {},
                Err(e) if e.is_recoverable() => output.error(&e.user_message()),
                Err(e) => return Err(e),
            }
        }
    }

    fn handle_choice(
        &self,
        choice: MenuChoice,
        queue: &mut QueueManager,
        output: &OutputFormatter,
    ) -> Result<()> {
        match choice {
            MenuChoice::Create => self.create_ticket(queue, output),
            MenuChoice::Resolve => handle_resolve_command(queue, output),
            MenuChoice::Cancel => self.cancel_ticket(queue, output),
            MenuChoice::Search => self.search_ticket(queue, output),
            MenuChoice::ViewAll => handle_list_command(queue, output),
            MenuChoice::Dashboard => handle_dashboard_command(queue, output),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_ticket(&self, queue: &mut QueueManager, output: &OutputFormatter) -> Result<()> {
        output.info("\nCreating new ticket...");

        let name = Input::<String>::with_theme(&self.theme)
            .with_prompt("Enter customer name")
            .allow_empty(true)
            .interact_text()?;
        let issue = Input::<String>::with_theme(&self.theme)
            .with_prompt("Enter issue description")
            .allow_empty(true)
            .interact_text()?;
        // Reject blanks before asking for the priority
        let (name, issue) = validate_ticket_input(&name, &issue)?;

        let priority = self.select_priority()?;
        handle_create_command(queue, &name, &issue, priority, output).map(|_| ())
    }

    fn select_priority(&self) -> Result<Priority> {
        let labels: Vec<String> = Priority::ALL
            .iter()
            .map(|p| format!("{}. {p}", p.level()))
            .collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select priority level")
            .items(&labels)
            .default(usize::from(self.default_priority.level()))
            .interact()?;

        Ok(Priority::ALL.get(selection).copied().unwrap_or(self.default_priority))
    }

    fn cancel_ticket(&self, queue: &mut QueueManager, output: &OutputFormatter) -> Result<()> {
        // Checked before prompting for an id
        if queue.pending_len() == 0 {
            return Err(TicketDeskError::NothingToCancel);
        }

        let id = self.input_ticket_id("Enter ticket ID to cancel")?;
        handle_cancel_command(queue, id, output)
    }

    fn search_ticket(&self, queue: &QueueManager, output: &OutputFormatter) -> Result<()> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Search by")
            .items(&["1. Ticket ID", "2. Customer Name"])
            .default(0)
            .interact()?;

        if selection == 0 {
            let id = self.input_ticket_id("Enter ticket ID")?;
            handle_find_command(queue, id, output)
        } else {
            let name = Input::<String>::with_theme(&self.theme)
                .with_prompt("Enter customer name")
                .interact_text()?;
            handle_search_command(queue, &name, output)
        }
    }

    fn input_ticket_id(&self, prompt: &str) -> Result<TicketId> {
        let raw = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        raw.parse()
            .map_err(|_| TicketDeskError::InvalidInput(format!("invalid ticket id: {}", raw.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
    }

    #[test]
    fn test_menu_labels_are_numbered_in_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert!(choice.label().starts_with(&format!("{}.", i + 1)));
        }
    }
}
