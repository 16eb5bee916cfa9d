//! Entity removal commands addressed by displayed index.

use crate::book::manager::Model;
use crate::command::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::entity::EntityKind;
use crate::model::value::Index;
use std::rc::Rc;

/// Deletes the contact at a position of the displayed contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteContactCommand {
    index: Index,
}

impl DeleteContactCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteContactCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = model
            .filtered_contacts()
            .get(self.index.zero_based())
            .map(Rc::clone)
            .ok_or(CommandError::InvalidIndex {
                kind: EntityKind::Contact,
                index: self.index,
            })?;
        model.remove_contact(&target)?;
        Ok(CommandResult::new(format!("Deleted Person: {target}")))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}

/// Deletes the trip at a position of the displayed trip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTripCommand {
    index: Index,
}

impl DeleteTripCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteTripCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = model
            .filtered_trips()
            .get(self.index.zero_based())
            .map(Rc::clone)
            .ok_or(CommandError::InvalidIndex {
                kind: EntityKind::Trip,
                index: self.index,
            })?;
        model.remove_trip(&target)?;
        Ok(CommandResult::new(format!("Deleted Trip: {target}")))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}
