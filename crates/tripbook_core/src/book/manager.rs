//! In-memory model: master collections plus their filtered views.
//!
//! # Responsibility
//! - Be the single mutation point for contact and trip data.
//! - Keep both filtered views consistent with master data and predicates.
//! - Publish view changes to registered listeners within the mutating call.
//!
//! # Invariants
//! - Each view equals `{ e in master : predicate(e) }` in master order after
//!   every public call returns.
//! - A failing mutation changes neither master data nor views.
//! - Contact removal never cascades into trip customer names.
//! - Log events carry counts and error codes only, never entity data.

use crate::book::error::ModelResult;
use crate::book::filtered_list::{ChangeCause, FilteredList, Listener, ListenerId};
use crate::book::snapshot::AddressBookSnapshot;
use crate::book::unique_list::UniqueList;
use crate::book::view_state::ViewState;
use crate::model::contact::Contact;
use crate::model::entity::Entity;
use crate::model::predicate::{ContactPredicate, TripPredicate};
use crate::model::trip::Trip;
use crate::model::value::Name;
use log::{debug, info, warn};
use std::rc::Rc;

/// Operations commands may run against the model.
pub trait Model {
    fn has_contact(&self, contact: &Contact) -> bool;
    fn add_contact(&mut self, contact: Contact) -> ModelResult<()>;
    fn remove_contact(&mut self, target: &Contact) -> ModelResult<()>;
    fn set_contact(&mut self, target: &Contact, edited: Contact) -> ModelResult<()>;

    fn has_trip(&self, trip: &Trip) -> bool;
    fn add_trip(&mut self, trip: Trip) -> ModelResult<()>;
    fn remove_trip(&mut self, target: &Trip) -> ModelResult<()>;
    fn set_trip(&mut self, target: &Trip, edited: Trip) -> ModelResult<()>;

    /// Empties both master collections.
    fn clear(&mut self);

    fn update_filtered_contact_list(&mut self, predicate: ContactPredicate);
    fn update_filtered_trip_list(&mut self, predicate: TripPredicate);

    /// Live contact view in master order.
    fn filtered_contacts(&self) -> &[Rc<Contact>];
    /// Live trip view in master order.
    fn filtered_trips(&self) -> &[Rc<Trip>];

    fn subscribe_contacts(&mut self, listener: Listener<Contact>) -> ListenerId;
    fn subscribe_trips(&mut self, listener: Listener<Trip>) -> ListenerId;
    /// Removes a listener from whichever view holds it.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// Trip customers resolved against the contact collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerResolution {
    /// Contacts matching a customer name, in customer name order.
    pub resolved: Vec<Rc<Contact>>,
    /// Customer names without a matching contact.
    pub dangling: Vec<Name>,
}

/// Default `Model` implementation.
#[derive(Debug)]
pub struct ModelManager {
    contacts: UniqueList<Contact>,
    trips: UniqueList<Trip>,
    contact_view: FilteredList<Contact, ContactPredicate>,
    trip_view: FilteredList<Trip, TripPredicate>,
    next_listener_id: u64,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::from_lists(UniqueList::new(), UniqueList::new())
    }
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from persisted data; both views start unfiltered.
    pub fn from_snapshot(snapshot: AddressBookSnapshot) -> ModelResult<Self> {
        let contacts = UniqueList::from_entities(snapshot.contacts)?;
        let trips = UniqueList::from_entities(snapshot.trips)?;
        info!(
            "event=model_load module=model status=ok contacts={} trips={}",
            contacts.len(),
            trips.len()
        );
        Ok(Self::from_lists(contacts, trips))
    }

    fn from_lists(contacts: UniqueList<Contact>, trips: UniqueList<Trip>) -> Self {
        let contact_view = FilteredList::new(ContactPredicate::All, contacts.as_slice());
        let trip_view = FilteredList::new(TripPredicate::All, trips.as_slice());
        Self {
            contacts,
            trips,
            contact_view,
            trip_view,
            next_listener_id: 0,
        }
    }

    /// Copies master collections into plain data.
    pub fn snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot {
            contacts: self.contacts.to_vec(),
            trips: self.trips.to_vec(),
        }
    }

    /// Replaces all master data. Active predicates and listeners are kept.
    ///
    /// The snapshot is validated in full before anything is replaced.
    pub fn reset_data(&mut self, snapshot: AddressBookSnapshot) -> ModelResult<()> {
        let contacts = UniqueList::from_entities(snapshot.contacts).inspect_err(|err| {
            warn!(
                "event=model_reset module=model status=error error_code={}",
                err.code()
            )
        })?;
        let trips = UniqueList::from_entities(snapshot.trips).inspect_err(|err| {
            warn!(
                "event=model_reset module=model status=error error_code={}",
                err.code()
            )
        })?;
        self.contacts = contacts;
        self.trips = trips;
        self.contact_view
            .refresh(self.contacts.as_slice(), ChangeCause::Reset);
        self.trip_view.refresh(self.trips.as_slice(), ChangeCause::Reset);
        info!(
            "event=model_reset module=model status=ok contacts={} trips={}",
            self.contacts.len(),
            self.trips.len()
        );
        Ok(())
    }

    /// Full contact collection in insertion order.
    pub fn contacts(&self) -> &[Rc<Contact>] {
        self.contacts.as_slice()
    }

    /// Full trip collection in insertion order.
    pub fn trips(&self) -> &[Rc<Trip>] {
        self.trips.as_slice()
    }

    pub fn contact_predicate(&self) -> &ContactPredicate {
        self.contact_view.predicate()
    }

    pub fn trip_predicate(&self) -> &TripPredicate {
        self.trip_view.predicate()
    }

    /// Copies both active predicates.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            contacts: self.contact_predicate().clone(),
            trips: self.trip_predicate().clone(),
        }
    }

    /// Re-applies predicates saved by `view_state`.
    pub fn restore_view_state(&mut self, state: ViewState) {
        self.update_filtered_contact_list(state.contacts);
        self.update_filtered_trip_list(state.trips);
    }

    /// Looks up each customer name of `trip` in the contact collection.
    pub fn resolve_customers(&self, trip: &Trip) -> CustomerResolution {
        let mut resolution = CustomerResolution::default();
        for name in trip.customer_names() {
            match self
                .contacts
                .as_slice()
                .iter()
                .find(|contact| contact.name() == name)
            {
                Some(contact) => resolution.resolved.push(Rc::clone(contact)),
                None => resolution.dangling.push(name.clone()),
            }
        }
        resolution
    }

    /// Trips whose customer names include `name`, in trip order.
    pub fn trips_with_customer(&self, name: &Name) -> Vec<Rc<Trip>> {
        self.trips
            .as_slice()
            .iter()
            .filter(|trip| trip.has_customer(name))
            .cloned()
            .collect()
    }

    fn next_listener(&mut self) -> ListenerId {
        self.next_listener_id += 1;
        ListenerId(self.next_listener_id)
    }

    fn refresh_contacts(&mut self, cause: ChangeCause) {
        self.contact_view.refresh(self.contacts.as_slice(), cause);
    }

    fn refresh_trips(&mut self, cause: ChangeCause) {
        self.trip_view.refresh(self.trips.as_slice(), cause);
    }
}

fn log_mutation<T: Entity>(event: &str, result: &ModelResult<()>, total: usize, visible: usize) {
    match result {
        Ok(()) => info!(
            "event={event} module=model status=ok kind={} total={total} visible={visible}",
            T::KIND
        ),
        Err(err) => warn!(
            "event={event} module=model status=error kind={} error_code={}",
            T::KIND,
            err.code()
        ),
    }
}

impl Model for ModelManager {
    fn has_contact(&self, contact: &Contact) -> bool {
        self.contacts.contains(contact)
    }

    fn add_contact(&mut self, contact: Contact) -> ModelResult<()> {
        let result = self.contacts.add(contact);
        if result.is_ok() {
            self.refresh_contacts(ChangeCause::Added);
        }
        log_mutation::<Contact>(
            "contact_add",
            &result,
            self.contacts.len(),
            self.contact_view.len(),
        );
        result
    }

    fn remove_contact(&mut self, target: &Contact) -> ModelResult<()> {
        let result = self.contacts.remove(target).map(|_| ());
        if result.is_ok() {
            self.refresh_contacts(ChangeCause::Removed);
        }
        log_mutation::<Contact>(
            "contact_remove",
            &result,
            self.contacts.len(),
            self.contact_view.len(),
        );
        result
    }

    fn set_contact(&mut self, target: &Contact, edited: Contact) -> ModelResult<()> {
        let result = self.contacts.set(target, edited);
        if result.is_ok() {
            self.refresh_contacts(ChangeCause::Replaced);
        }
        log_mutation::<Contact>(
            "contact_set",
            &result,
            self.contacts.len(),
            self.contact_view.len(),
        );
        result
    }

    fn has_trip(&self, trip: &Trip) -> bool {
        self.trips.contains(trip)
    }

    fn add_trip(&mut self, trip: Trip) -> ModelResult<()> {
        let result = self.trips.add(trip);
        if result.is_ok() {
            self.refresh_trips(ChangeCause::Added);
        }
        log_mutation::<Trip>("trip_add", &result, self.trips.len(), self.trip_view.len());
        result
    }

    fn remove_trip(&mut self, target: &Trip) -> ModelResult<()> {
        let result = self.trips.remove(target).map(|_| ());
        if result.is_ok() {
            self.refresh_trips(ChangeCause::Removed);
        }
        log_mutation::<Trip>(
            "trip_remove",
            &result,
            self.trips.len(),
            self.trip_view.len(),
        );
        result
    }

    fn set_trip(&mut self, target: &Trip, edited: Trip) -> ModelResult<()> {
        let result = self.trips.set(target, edited);
        if result.is_ok() {
            self.refresh_trips(ChangeCause::Replaced);
        }
        log_mutation::<Trip>("trip_set", &result, self.trips.len(), self.trip_view.len());
        result
    }

    fn clear(&mut self) {
        self.contacts.clear();
        self.trips.clear();
        self.refresh_contacts(ChangeCause::Reset);
        self.refresh_trips(ChangeCause::Reset);
        info!("event=model_clear module=model status=ok");
    }

    fn update_filtered_contact_list(&mut self, predicate: ContactPredicate) {
        let changed = self
            .contact_view
            .set_predicate(predicate, self.contacts.as_slice());
        debug!(
            "event=contact_filter module=model status=ok changed={changed} visible={}",
            self.contact_view.len()
        );
    }

    fn update_filtered_trip_list(&mut self, predicate: TripPredicate) {
        let changed = self
            .trip_view
            .set_predicate(predicate, self.trips.as_slice());
        debug!(
            "event=trip_filter module=model status=ok changed={changed} visible={}",
            self.trip_view.len()
        );
    }

    fn filtered_contacts(&self) -> &[Rc<Contact>] {
        self.contact_view.items()
    }

    fn filtered_trips(&self) -> &[Rc<Trip>] {
        self.trip_view.items()
    }

    fn subscribe_contacts(&mut self, listener: Listener<Contact>) -> ListenerId {
        let id = self.next_listener();
        self.contact_view.subscribe(id, listener);
        id
    }

    fn subscribe_trips(&mut self, listener: Listener<Trip>) -> ListenerId {
        let id = self.next_listener();
        self.trip_view.subscribe(id, listener);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.contact_view.unsubscribe(id) || self.trip_view.unsubscribe(id)
    }
}
