//! Entity edit commands addressed by displayed index.
//!
//! An edit builds a replacement from the current entity plus the descriptor's
//! fields, then swaps it in through the model. The affected view is reset to
//! show everything afterwards.

use crate::book::manager::Model;
use crate::command::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::contact::Contact;
use crate::model::entity::EntityKind;
use crate::model::predicate::{ContactPredicate, TripPredicate};
use crate::model::trip::Trip;
use crate::model::value::{
    Accommodation, Address, Email, Index, Itinerary, Name, Note, Phone, Tag, TripDate, TripName,
};
use std::collections::BTreeSet;
use std::rc::Rc;

/// Contact fields to overwrite. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContactDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// Replaces the whole tag set when present.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditContactDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the replacement for `current`.
    pub fn apply(&self, current: &Contact) -> Contact {
        Contact::new(
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.phone.clone().unwrap_or_else(|| current.phone().clone()),
            self.email.clone().unwrap_or_else(|| current.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| current.address().clone()),
            self.tags.clone().unwrap_or_else(|| current.tags().clone()),
        )
    }
}

/// Edits the contact at a position of the displayed contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContactCommand {
    index: Index,
    descriptor: EditContactDescriptor,
}

impl EditContactCommand {
    pub fn new(index: Index, descriptor: EditContactDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditContactCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit);
        }
        let target = model
            .filtered_contacts()
            .get(self.index.zero_based())
            .map(Rc::clone)
            .ok_or(CommandError::InvalidIndex {
                kind: EntityKind::Contact,
                index: self.index,
            })?;
        let edited = self.descriptor.apply(&target);
        model.set_contact(&target, edited.clone())?;
        model.update_filtered_contact_list(ContactPredicate::All);
        Ok(CommandResult::new(format!("Edited Person: {edited}")))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}

/// Trip fields to overwrite. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTripDescriptor {
    pub name: Option<TripName>,
    pub accommodation: Option<Accommodation>,
    pub itinerary: Option<Itinerary>,
    pub date: Option<TripDate>,
    pub note: Option<Note>,
    /// Replaces the whole customer name set when present.
    pub customer_names: Option<BTreeSet<Name>>,
}

impl EditTripDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.accommodation.is_some()
            || self.itinerary.is_some()
            || self.date.is_some()
            || self.note.is_some()
            || self.customer_names.is_some()
    }

    /// Builds the replacement for `current`.
    pub fn apply(&self, current: &Trip) -> Trip {
        Trip::new(
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.accommodation
                .clone()
                .unwrap_or_else(|| current.accommodation().clone()),
            self.itinerary
                .clone()
                .unwrap_or_else(|| current.itinerary().clone()),
            self.date.unwrap_or_else(|| current.date()),
            self.note.clone().unwrap_or_else(|| current.note().clone()),
            self.customer_names
                .clone()
                .unwrap_or_else(|| current.customer_names().clone()),
        )
    }
}

/// Edits the trip at a position of the displayed trip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTripCommand {
    index: Index,
    descriptor: EditTripDescriptor,
}

impl EditTripCommand {
    pub fn new(index: Index, descriptor: EditTripDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditTripCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NothingToEdit);
        }
        let target = model
            .filtered_trips()
            .get(self.index.zero_based())
            .map(Rc::clone)
            .ok_or(CommandError::InvalidIndex {
                kind: EntityKind::Trip,
                index: self.index,
            })?;
        let edited = self.descriptor.apply(&target);
        model.set_trip(&target, edited.clone())?;
        model.update_filtered_trip_list(TripPredicate::All);
        Ok(CommandResult::new(format!("Edited Trip: {edited}")))
    }

    fn mutates_data(&self) -> bool {
        true
    }
}
