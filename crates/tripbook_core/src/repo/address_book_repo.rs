//! Address book repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist and restore `AddressBookSnapshot` values.
//! - Persist and restore the active view predicates (`ViewState`).
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` replaces stored contents atomically in one transaction.
//! - `load` returns entities in their saved order.
//! - Read paths reject rows that fail value-object validation instead of
//!   masking them.
//! - A view without a stored predicate loads as unfiltered.

use crate::book::snapshot::AddressBookSnapshot;
use crate::book::view_state::ViewState;
use crate::db::schema::{current_user_version, schema_version};
use crate::db::DbError;
use crate::model::contact::Contact;
use crate::model::predicate::{ContactPredicate, TripPredicate};
use crate::model::trip::Trip;
use crate::model::value::{
    Accommodation, Address, Email, Itinerary, Name, Note, Phone, Tag, TripDate, TripName,
    ValidationError,
};
use log::{debug, error, info};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for address book persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection was not bootstrapped through `open_db*`.
    SchemaNotReady { found: u32, expected: u32 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "storage schema not ready: found version {found}, expected {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::SchemaNotReady { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for whole-address-book snapshots.
pub trait AddressBookRepository {
    fn load(&self) -> RepoResult<AddressBookSnapshot>;
    fn save(&mut self, snapshot: &AddressBookSnapshot) -> RepoResult<()>;
    fn load_view_state(&self) -> RepoResult<ViewState>;
    fn save_view_state(&mut self, state: &ViewState) -> RepoResult<()>;
}

/// SQLite-backed address book repository.
pub struct SqliteAddressBookRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAddressBookRepository<'conn> {
    /// Wraps a connection returned by `open_db` or `open_db_in_memory`.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let found = current_user_version(conn)?;
        let expected = schema_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

type ContactRow = (i64, String, String, String, String);
type TripRow = (i64, String, String, String, String, String);

impl AddressBookRepository for SqliteAddressBookRepository<'_> {
    fn load(&self) -> RepoResult<AddressBookSnapshot> {
        let contact_rows = self
            .conn
            .prepare("SELECT position, name, phone, email, address FROM contacts ORDER BY position;")?
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?
            .collect::<Result<Vec<ContactRow>, _>>()?;
        let mut tags = self.grouped(
            "SELECT contact_position, tag FROM contact_tags ORDER BY contact_position, tag;",
        )?;

        let mut contacts = Vec::with_capacity(contact_rows.len());
        for (position, name, phone, email, address) in contact_rows {
            let context = |err: ValidationError| invalid_row("contacts", position, err);
            let contact_tags = tags
                .remove(&position)
                .unwrap_or_default()
                .into_iter()
                .map(Tag::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(context)?;
            contacts.push(Contact::new(
                Name::new(name).map_err(context)?,
                Phone::new(phone).map_err(context)?,
                Email::new(email).map_err(context)?,
                Address::new(address).map_err(context)?,
                contact_tags,
            ));
        }

        let trip_rows = self
            .conn
            .prepare(
                "SELECT position, name, accommodation, itinerary, trip_date, note
                 FROM trips ORDER BY position;",
            )?
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })?
            .collect::<Result<Vec<TripRow>, _>>()?;
        let mut customers = self.grouped(
            "SELECT trip_position, customer_name FROM trip_customers
             ORDER BY trip_position, customer_name;",
        )?;

        let mut trips = Vec::with_capacity(trip_rows.len());
        for (position, name, accommodation, itinerary, date, note) in trip_rows {
            let context = |err: ValidationError| invalid_row("trips", position, err);
            let customer_names = customers
                .remove(&position)
                .unwrap_or_default()
                .into_iter()
                .map(Name::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(context)?;
            trips.push(Trip::new(
                TripName::new(name).map_err(context)?,
                Accommodation::new(accommodation).map_err(context)?,
                Itinerary::new(itinerary).map_err(context)?,
                TripDate::parse(date).map_err(context)?,
                Note::new(note).map_err(context)?,
                customer_names,
            ));
        }

        info!(
            "event=store_load module=repo status=ok contacts={} trips={}",
            contacts.len(),
            trips.len()
        );
        Ok(AddressBookSnapshot { contacts, trips })
    }

    fn save(&mut self, snapshot: &AddressBookSnapshot) -> RepoResult<()> {
        let result = write_snapshot(self.conn, snapshot);
        match &result {
            Ok(()) => info!(
                "event=store_save module=repo status=ok contacts={} trips={}",
                snapshot.contacts.len(),
                snapshot.trips.len()
            ),
            Err(err) => error!("event=store_save module=repo status=error error={err}"),
        }
        result
    }

    fn load_view_state(&self) -> RepoResult<ViewState> {
        let contacts = self
            .stored_predicate::<ContactPredicate>(CONTACT_VIEW)?
            .unwrap_or(ContactPredicate::All);
        let trips = self
            .stored_predicate::<TripPredicate>(TRIP_VIEW)?
            .unwrap_or(TripPredicate::All);
        let state = ViewState { contacts, trips };
        debug!(
            "event=view_state_load module=repo status=ok unfiltered={}",
            state.is_unfiltered()
        );
        Ok(state)
    }

    fn save_view_state(&mut self, state: &ViewState) -> RepoResult<()> {
        let result = write_view_state(self.conn, state);
        match &result {
            Ok(()) => info!(
                "event=view_state_save module=repo status=ok unfiltered={}",
                state.is_unfiltered()
            ),
            Err(err) => error!("event=view_state_save module=repo status=error error={err}"),
        }
        result
    }
}

impl SqliteAddressBookRepository<'_> {
    /// Runs a two-column `(position, value)` query grouped by position.
    fn grouped(&self, sql: &str) -> RepoResult<BTreeMap<i64, Vec<String>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
        let mut grouped: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for row in rows {
            let (position, value) = row?;
            grouped.entry(position).or_default().push(value);
        }
        Ok(grouped)
    }

    fn stored_predicate<P: DeserializeOwned>(&self, view: &str) -> RepoResult<Option<P>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT predicate FROM view_filters WHERE view = ?1;",
                [view],
                |row| row.get(0),
            )
            .optional()?;
        stored
            .map(|json| {
                serde_json::from_str(&json).map_err(|err| {
                    RepoError::InvalidData(format!(
                        "view_filters row {view} has invalid predicate: {err}"
                    ))
                })
            })
            .transpose()
    }
}

const CONTACT_VIEW: &str = "contacts";
const TRIP_VIEW: &str = "trips";

fn write_view_state(conn: &mut Connection, state: &ViewState) -> RepoResult<()> {
    let contacts = encode_predicate(CONTACT_VIEW, &state.contacts)?;
    let trips = encode_predicate(TRIP_VIEW, &state.trips)?;
    let tx = conn.transaction()?;
    {
        let mut upsert = tx.prepare(
            "INSERT INTO view_filters (view, predicate) VALUES (?1, ?2)
             ON CONFLICT(view) DO UPDATE SET predicate = excluded.predicate;",
        )?;
        upsert.execute(params![CONTACT_VIEW, contacts])?;
        upsert.execute(params![TRIP_VIEW, trips])?;
    }
    tx.commit()?;
    Ok(())
}

fn encode_predicate<P: Serialize>(view: &str, predicate: &P) -> RepoResult<String> {
    serde_json::to_string(predicate).map_err(|err| {
        RepoError::InvalidData(format!("{view} predicate cannot be encoded: {err}"))
    })
}

fn write_snapshot(conn: &mut Connection, snapshot: &AddressBookSnapshot) -> RepoResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        "DELETE FROM contact_tags;
         DELETE FROM trip_customers;
         DELETE FROM contacts;
         DELETE FROM trips;",
    )?;

    {
        let mut insert_contact = tx.prepare(
            "INSERT INTO contacts (position, name, phone, email, address)
             VALUES (?1, ?2, ?3, ?4, ?5);",
        )?;
        let mut insert_tag =
            tx.prepare("INSERT INTO contact_tags (contact_position, tag) VALUES (?1, ?2);")?;
        for (position, contact) in (0_i64..).zip(&snapshot.contacts) {
            insert_contact.execute(params![
                position,
                contact.name().as_str(),
                contact.phone().as_str(),
                contact.email().as_str(),
                contact.address().as_str(),
            ])?;
            for tag in contact.tags() {
                insert_tag.execute(params![position, tag.as_str()])?;
            }
        }

        let mut insert_trip = tx.prepare(
            "INSERT INTO trips (position, name, accommodation, itinerary, trip_date, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        let mut insert_customer = tx.prepare(
            "INSERT INTO trip_customers (trip_position, customer_name) VALUES (?1, ?2);",
        )?;
        for (position, trip) in (0_i64..).zip(&snapshot.trips) {
            insert_trip.execute(params![
                position,
                trip.name().as_str(),
                trip.accommodation().as_str(),
                trip.itinerary().as_str(),
                trip.date().to_string(),
                trip.note().as_str(),
            ])?;
            for name in trip.customer_names() {
                insert_customer.execute(params![position, name.as_str()])?;
            }
        }
    }

    tx.commit()?;
    Ok(())
}

fn invalid_row(table: &str, position: i64, err: ValidationError) -> RepoError {
    RepoError::InvalidData(format!(
        "{table} row {position} has invalid {}: {err}",
        err.field()
    ))
}
