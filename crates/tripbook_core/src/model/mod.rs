//! Domain model for contacts and trips.
//!
//! # Responsibility
//! - Define validated value objects, immutable entities and predicates.
//! - Keep domain types free of storage and presentation concerns.
//!
//! # Invariants
//! - Entities are immutable; edits build a replacement value.
//! - Business-key equality (`Entity::is_same`) and full equality
//!   (`PartialEq`) are separate operations.

pub mod contact;
pub mod entity;
pub mod predicate;
pub mod trip;
pub mod value;
