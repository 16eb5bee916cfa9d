//! Trip entity.
//!
//! # Responsibility
//! - Aggregate validated trip fields into one immutable record.
//! - Keep the set of customer names a trip refers to.
//!
//! # Invariants
//! - `customer_names` is a lookup key set, never an owning link. Names without
//!   a matching contact are tolerated.
//! - Two trips are the same iff their trip names are equal.

use crate::model::entity::{Entity, EntityKind, MissingFieldError};
use crate::model::value::{Accommodation, Itinerary, Name, Note, TripDate, TripName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A planned trip and the contacts travelling on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TripRecord", into = "TripRecord")]
pub struct Trip {
    name: TripName,
    accommodation: Accommodation,
    itinerary: Itinerary,
    date: TripDate,
    note: Note,
    customer_names: BTreeSet<Name>,
}

impl Trip {
    pub fn new(
        name: TripName,
        accommodation: Accommodation,
        itinerary: Itinerary,
        date: TripDate,
        note: Note,
        customer_names: impl IntoIterator<Item = Name>,
    ) -> Self {
        Self {
            name,
            accommodation,
            itinerary,
            date,
            note,
            customer_names: customer_names.into_iter().collect(),
        }
    }

    pub fn builder() -> TripBuilder {
        TripBuilder::default()
    }

    /// Returns a builder pre-filled with this trip's fields.
    pub fn to_builder(&self) -> TripBuilder {
        TripBuilder {
            name: Some(self.name.clone()),
            accommodation: Some(self.accommodation.clone()),
            itinerary: Some(self.itinerary.clone()),
            date: Some(self.date),
            note: Some(self.note.clone()),
            customer_names: self.customer_names.clone(),
        }
    }

    pub fn name(&self) -> &TripName {
        &self.name
    }

    pub fn accommodation(&self) -> &Accommodation {
        &self.accommodation
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn date(&self) -> TripDate {
        self.date
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Read-only view of the customer name set.
    pub fn customer_names(&self) -> &BTreeSet<Name> {
        &self.customer_names
    }

    pub fn has_customer(&self, name: &Name) -> bool {
        self.customer_names.contains(name)
    }
}

impl Entity for Trip {
    const KIND: EntityKind = EntityKind::Trip;

    fn business_key(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Trip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Accommodation: {}; Itinerary: {}; Date: {}; Note: {}; Customers: ",
            self.name, self.accommodation, self.itinerary, self.date, self.note
        )?;
        for name in &self.customer_names {
            write!(f, "[{name}]")?;
        }
        Ok(())
    }
}

/// Incremental trip assembly; `build` fails on the first absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripBuilder {
    name: Option<TripName>,
    accommodation: Option<Accommodation>,
    itinerary: Option<Itinerary>,
    date: Option<TripDate>,
    note: Option<Note>,
    customer_names: BTreeSet<Name>,
}

impl TripBuilder {
    pub fn name(mut self, name: TripName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn accommodation(mut self, accommodation: Accommodation) -> Self {
        self.accommodation = Some(accommodation);
        self
    }

    pub fn itinerary(mut self, itinerary: Itinerary) -> Self {
        self.itinerary = Some(itinerary);
        self
    }

    pub fn date(mut self, date: TripDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    pub fn customer(mut self, name: Name) -> Self {
        self.customer_names.insert(name);
        self
    }

    /// Replaces the whole customer name set.
    pub fn customer_names(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.customer_names = names.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<Trip, MissingFieldError> {
        let missing = |field| MissingFieldError::new(EntityKind::Trip, field);
        Ok(Trip {
            name: self.name.ok_or_else(|| missing("name"))?,
            accommodation: self.accommodation.ok_or_else(|| missing("accommodation"))?,
            itinerary: self.itinerary.ok_or_else(|| missing("itinerary"))?,
            date: self.date.ok_or_else(|| missing("date"))?,
            note: self.note.ok_or_else(|| missing("note"))?,
            customer_names: self.customer_names,
        })
    }
}

/// Wire shape for trips. Absent fields surface as `MissingFieldError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TripRecord {
    name: Option<TripName>,
    accommodation: Option<Accommodation>,
    itinerary: Option<Itinerary>,
    date: Option<TripDate>,
    note: Option<Note>,
    #[serde(default)]
    customer_names: Vec<Name>,
}

impl TryFrom<TripRecord> for Trip {
    type Error = MissingFieldError;

    fn try_from(record: TripRecord) -> Result<Self, Self::Error> {
        let mut builder = Trip::builder().customer_names(record.customer_names);
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        if let Some(accommodation) = record.accommodation {
            builder = builder.accommodation(accommodation);
        }
        if let Some(itinerary) = record.itinerary {
            builder = builder.itinerary(itinerary);
        }
        if let Some(date) = record.date {
            builder = builder.date(date);
        }
        if let Some(note) = record.note {
            builder = builder.note(note);
        }
        builder.build()
    }
}

impl From<Trip> for TripRecord {
    fn from(trip: Trip) -> Self {
        Self {
            name: Some(trip.name),
            accommodation: Some(trip.accommodation),
            itinerary: Some(trip.itinerary),
            date: Some(trip.date),
            note: Some(trip.note),
            customer_names: trip.customer_names.into_iter().collect(),
        }
    }
}
