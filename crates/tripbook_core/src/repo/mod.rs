//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract the model's snapshots go through.
//! - Isolate SQLite query details from model and command code.
//!
//! # Invariants
//! - Every value read back passes the same validation as user input.

pub mod address_book_repo;
