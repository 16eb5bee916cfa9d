//! Address book model: master collections, filtered views and observation.
//!
//! # Responsibility
//! - Own contact and trip collections and enforce business-key uniqueness.
//! - Expose one observable, predicate-filtered view per entity type.
//!
//! # Invariants
//! - The model is the only mutation point for entity data.
//! - Views reference master entities and never own them.
//! - Notification is synchronous; the model is single-threaded (`!Send`).

pub mod error;
pub mod filtered_list;
pub mod manager;
pub mod snapshot;
pub mod unique_list;
pub mod view_state;
