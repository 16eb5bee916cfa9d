//! Model-level business rule errors.

use crate::model::entity::{Entity, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Business rule violation raised by model mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An entity with the same business key already exists.
    DuplicateEntity { kind: EntityKind, key: String },
    /// No entity fully equal to the target exists.
    EntityNotFound { kind: EntityKind, key: String },
}

impl ModelError {
    pub fn duplicate<T: Entity>(entity: &T) -> Self {
        Self::DuplicateEntity {
            kind: T::KIND,
            key: entity.business_key().to_string(),
        }
    }

    pub fn not_found<T: Entity>(entity: &T) -> Self {
        Self::EntityNotFound {
            kind: T::KIND,
            key: entity.business_key().to_string(),
        }
    }

    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEntity { .. } => "duplicate_entity",
            Self::EntityNotFound { .. } => "entity_not_found",
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity { kind, .. } => {
                write!(f, "This {kind} already exists in the address book")
            }
            Self::EntityNotFound { kind, key } => {
                write!(f, "The {kind} `{key}` does not exist in the address book")
            }
        }
    }
}

impl Error for ModelError {}
