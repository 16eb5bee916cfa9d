//! Core domain logic for Tripbook, a contact and trip book for travel agents.
//! This crate is the single source of truth for business invariants.

pub mod book;
pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use book::error::{ModelError, ModelResult};
pub use book::filtered_list::{ChangeCause, Listener, ListenerId, ViewChange};
pub use book::manager::{CustomerResolution, Model, ModelManager};
pub use book::snapshot::AddressBookSnapshot;
pub use book::view_state::ViewState;
pub use command::add::{AddContactCommand, AddTripCommand};
pub use command::delete::{DeleteContactCommand, DeleteTripCommand};
pub use command::edit::{
    EditContactCommand, EditContactDescriptor, EditTripCommand, EditTripDescriptor,
};
pub use command::find::{FindCommand, FindTripCommand};
pub use command::general::{ClearCommand, ExitCommand, HelpCommand};
pub use command::list::{ListCommand, ListTripCommand};
pub use command::{Command, CommandError, CommandOutcome, CommandResult};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LoggingStatus};
pub use model::contact::{Contact, ContactBuilder};
pub use model::entity::{Entity, EntityKind, MissingFieldError};
pub use model::predicate::{
    ContactPredicate, DateRange, NameContainsKeywordsPredicate, Predicate, TripPredicate,
};
pub use model::trip::{Trip, TripBuilder};
pub use model::value::{
    Accommodation, Address, Email, Index, Itinerary, Name, Note, Phone, Tag, TripDate, TripName,
    ValidationError,
};
pub use repo::address_book_repo::{
    AddressBookRepository, RepoError, RepoResult, SqliteAddressBookRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
