//! Entity creation commands.

use crate::book::manager::Model;
use crate::command::{Command, CommandOutcome, CommandResult};
use crate::model::contact::Contact;
use crate::model::trip::Trip;

/// Adds one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactCommand {
    contact: Contact,
}

impl AddContactCommand {
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }
}

impl Command for AddContactCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.add_contact(self.contact.clone())?;
        Ok(CommandResult::new(format!(
            "New person added: {}",
            self.contact
        )))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}

/// Adds one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTripCommand {
    trip: Trip,
}

impl AddTripCommand {
    pub fn new(trip: Trip) -> Self {
        Self { trip }
    }
}

impl Command for AddTripCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.add_trip(self.trip.clone())?;
        Ok(CommandResult::new(format!("New trip added: {}", self.trip)))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}
