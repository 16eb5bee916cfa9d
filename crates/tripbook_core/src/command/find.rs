//! Filter commands for the contact and trip views.

use crate::book::manager::Model;
use crate::command::{Command, CommandOutcome, CommandResult};
use crate::model::predicate::{ContactPredicate, NameContainsKeywordsPredicate, TripPredicate};

pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";
pub const MESSAGE_NO_MATCHING_NAMES_FOUND: &str = "No matching names found";
pub const MESSAGE_TRIPS_LISTED_OVERVIEW: &str = "trips listed!";
pub const MESSAGE_NO_MATCHING_TRIPS_FOUND: &str = "No matching trips found";

/// Shows contacts whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &NameContainsKeywordsPredicate {
        &self.predicate
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_contact_list(ContactPredicate::from(self.predicate.clone()));
        let count = model.filtered_contacts().len();
        let message = if count > 0 {
            format!("{count} {MESSAGE_PERSONS_LISTED_OVERVIEW}")
        } else {
            MESSAGE_NO_MATCHING_NAMES_FOUND.to_string()
        };
        Ok(CommandResult::new(message))
    }
}

/// Shows trips matching a trip predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTripCommand {
    predicate: TripPredicate,
}

impl FindTripCommand {
    pub fn new(predicate: TripPredicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &TripPredicate {
        &self.predicate
    }
}

impl Command for FindTripCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_trip_list(self.predicate.clone());
        let count = model.filtered_trips().len();
        let message = if count > 0 {
            format!("{count} {MESSAGE_TRIPS_LISTED_OVERVIEW}")
        } else {
            MESSAGE_NO_MATCHING_TRIPS_FOUND.to_string()
        };
        Ok(CommandResult::new(message))
    }
}
