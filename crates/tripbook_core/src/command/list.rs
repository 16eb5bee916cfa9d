//! Filter reset commands.

use crate::book::manager::Model;
use crate::command::{Command, CommandOutcome, CommandResult};
use crate::model::predicate::{ContactPredicate, TripPredicate};

/// Shows every contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_contact_list(ContactPredicate::All);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

/// Shows every trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTripCommand;

impl ListTripCommand {
    pub const MESSAGE_SUCCESS: &'static str = "Listed all trips";
}

impl Command for ListTripCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_trip_list(TripPredicate::All);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
