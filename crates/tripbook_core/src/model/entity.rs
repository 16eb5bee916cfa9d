//! Shared entity contract.
//!
//! Entities carry two equalities: `PartialEq` compares every field, while
//! `Entity::is_same` compares business keys only and drives duplicate
//! detection.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Entity category, used in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Contact,
    Trip,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Trip => "trip",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable domain aggregate identified by a business key.
pub trait Entity: Clone + PartialEq + Debug + Display {
    const KIND: EntityKind;

    /// Field value that uniquely identifies the entity in its collection.
    fn business_key(&self) -> &str;

    /// Business-key equality, weaker than `PartialEq`.
    fn is_same(&self, other: &Self) -> bool {
        self.business_key() == other.business_key()
    }
}

/// Raised when an entity is assembled without one of its required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFieldError {
    pub entity: EntityKind,
    pub field: &'static str,
}

impl MissingFieldError {
    pub fn new(entity: EntityKind, field: &'static str) -> Self {
        Self { entity, field }
    }
}

impl Display for MissingFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is missing required field `{}`", self.entity, self.field)
    }
}

impl Error for MissingFieldError {}
