mod common;

use common::{contact, contact_with, trip};
use std::cell::RefCell;
use std::rc::Rc;
use tripbook_core::{
    AddressBookSnapshot, ChangeCause, Contact, ContactPredicate, Entity, Model, ModelError,
    ModelManager, Name, NameContainsKeywordsPredicate, Tag, Trip, TripDate, TripPredicate,
    ViewChange,
};

type Events = Rc<RefCell<Vec<(ChangeCause, Vec<String>)>>>;

fn record_contacts(model: &mut ModelManager) -> Events {
    let events: Events = Rc::default();
    let sink = Rc::clone(&events);
    model.subscribe_contacts(Box::new(move |change: &ViewChange<'_, Contact>| {
        let names = change
            .items
            .iter()
            .map(|contact| contact.name().to_string())
            .collect();
        sink.borrow_mut().push((change.cause, names));
    }));
    events
}

fn record_trips(model: &mut ModelManager) -> Events {
    let events: Events = Rc::default();
    let sink = Rc::clone(&events);
    model.subscribe_trips(Box::new(move |change: &ViewChange<'_, Trip>| {
        let names = change
            .items
            .iter()
            .map(|trip| trip.name().to_string())
            .collect();
        sink.borrow_mut().push((change.cause, names));
    }));
    events
}

fn keywords(words: &[&str]) -> NameContainsKeywordsPredicate {
    NameContainsKeywordsPredicate::new(words).unwrap()
}

#[test]
fn view_is_ordered_subsequence_of_master() {
    let mut model = ModelManager::new();
    for (name, tags) in [
        ("Alice Tan", &["friends"][..]),
        ("Bob Lee", &[][..]),
        ("Carol Ng", &["friends", "vip"][..]),
        ("Dan Wu", &["vip"][..]),
    ] {
        model.add_contact(contact_with(name, "94351253", tags)).unwrap();
    }

    model.update_filtered_contact_list(ContactPredicate::HasTag(Tag::new("friends").unwrap()));

    let visible = model
        .filtered_contacts()
        .iter()
        .map(|contact| contact.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(visible, vec!["Alice Tan", "Carol Ng"]);
    for shown in model.filtered_contacts() {
        assert!(model
            .contacts()
            .iter()
            .any(|master| Rc::ptr_eq(master, shown)));
    }
}

#[test]
fn reapplying_same_predicate_is_idempotent_and_silent() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();
    model.add_contact(contact("Bob Lee")).unwrap();
    let events = record_contacts(&mut model);

    model.update_filtered_contact_list(keywords(&["alice"]).into());
    let first = model.filtered_contacts().to_vec();
    model.update_filtered_contact_list(keywords(&["alice"]).into());

    assert_eq!(model.filtered_contacts(), first.as_slice());
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(events.borrow()[0].0, ChangeCause::Refiltered);
}

#[test]
fn listeners_see_post_mutation_view() {
    let mut model = ModelManager::new();
    let events = record_contacts(&mut model);

    model.add_contact(contact("Alice Tan")).unwrap();
    model.add_contact(contact("Bob Lee")).unwrap();
    model.remove_contact(&contact("Alice Tan")).unwrap();

    let events = events.borrow();
    assert_eq!(
        *events,
        vec![
            (ChangeCause::Added, vec!["Alice Tan".to_string()]),
            (
                ChangeCause::Added,
                vec!["Alice Tan".to_string(), "Bob Lee".to_string()]
            ),
            (ChangeCause::Removed, vec!["Bob Lee".to_string()]),
        ]
    );
}

#[test]
fn mutation_outside_filter_does_not_notify() {
    let mut model = ModelManager::new();
    model.update_filtered_contact_list(keywords(&["alice"]).into());
    let events = record_contacts(&mut model);

    model.add_contact(contact("Bob Lee")).unwrap();

    assert!(events.borrow().is_empty());
    assert!(model.filtered_contacts().is_empty());
    assert_eq!(model.contacts().len(), 1);
}

#[test]
fn set_trip_emits_single_replace_event() {
    let mut model = ModelManager::new();
    let bali = trip("Bali Retreat", "2024-06-01", &[]);
    model.add_trip(bali.clone()).unwrap();
    model.add_trip(trip("Alps Hike", "2024-08-20", &[])).unwrap();
    let events = record_trips(&mut model);

    model
        .set_trip(&bali, trip("Bali Retreat", "2024-06-05", &["Alice Tan"]))
        .unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, ChangeCause::Replaced);
    assert_eq!(events[0].1, vec!["Bali Retreat", "Alps Hike"]);
    assert_eq!(
        model.trips()[0].date(),
        TripDate::parse("2024-06-05").unwrap()
    );
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut model = ModelManager::new();
    let calls = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&calls);
    let id = model.subscribe_trips(Box::new(move |_: &ViewChange<'_, Trip>| {
        *sink.borrow_mut() += 1
    }));

    model.add_trip(trip("Bali Retreat", "2024-06-01", &[])).unwrap();
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    model.add_trip(trip("Alps Hike", "2024-08-20", &[])).unwrap();

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn is_same_is_weaker_than_equality() {
    let first = contact_with("Alice Tan", "94351253", &[]);
    let second = contact_with("Alice Tan", "81234567", &["friends"]);
    assert!(first.is_same(&second));
    assert_ne!(first, second);

    let bali = trip("Bali Retreat", "2024-06-01", &[]);
    let moved = trip("Bali Retreat", "2024-09-01", &["Bob Lee"]);
    assert!(bali.is_same(&moved));
    assert_ne!(bali, moved);
}

#[test]
fn add_then_remove_restores_master() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();
    let before = model.snapshot();

    let bob = contact("Bob Lee");
    model.add_contact(bob.clone()).unwrap();
    model.remove_contact(&bob).unwrap();

    assert_eq!(model.snapshot(), before);
}

#[test]
fn duplicate_add_leaves_collection_and_view_unchanged() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();
    let before = model.snapshot();
    let events = record_contacts(&mut model);

    let err = model
        .add_contact(contact_with("Alice Tan", "81234567", &[]))
        .unwrap_err();

    assert!(matches!(err, ModelError::DuplicateEntity { .. }));
    assert_eq!(model.snapshot(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn remove_requires_full_equality() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();

    let err = model
        .remove_contact(&contact_with("Alice Tan", "81234567", &[]))
        .unwrap_err();

    assert_eq!(err.code(), "entity_not_found");
    assert_eq!(model.contacts().len(), 1);
}

#[test]
fn trip_predicates_compose() {
    let mut model = ModelManager::new();
    model
        .add_trip(trip("Bali Retreat", "2024-06-01", &["Alice Tan"]))
        .unwrap();
    model
        .add_trip(trip("Bali Dive Week", "2024-09-01", &["Bob Lee"]))
        .unwrap();
    model
        .add_trip(trip("Alps Hike", "2024-06-01", &["Alice Tan"]))
        .unwrap();

    let alice = TripPredicate::HasCustomer(Name::new("Alice Tan").unwrap());
    let bali = TripPredicate::from(keywords(&["bali"]));
    model.update_filtered_trip_list(alice.clone().and(bali.clone().negate()));
    let visible = model
        .filtered_trips()
        .iter()
        .map(|trip| trip.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(visible, vec!["Alps Hike"]);

    model.update_filtered_trip_list(
        TripPredicate::OnDate(TripDate::parse("2024-09-01").unwrap()).or(alice.and(bali)),
    );
    let visible = model
        .filtered_trips()
        .iter()
        .map(|trip| trip.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(visible, vec!["Bali Retreat", "Bali Dive Week"]);
}

#[test]
fn reset_data_rejects_duplicates_without_touching_state() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();
    let before = model.snapshot();

    let err = model
        .reset_data(AddressBookSnapshot {
            contacts: vec![contact("Bob Lee"), contact("Bob Lee")],
            trips: Vec::new(),
        })
        .unwrap_err();

    assert!(matches!(err, ModelError::DuplicateEntity { .. }));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn trips_with_customer_follows_names() {
    let mut model = ModelManager::new();
    model.add_contact(contact("Alice Tan")).unwrap();
    model
        .add_trip(trip("Bali Retreat", "2024-06-01", &["Alice Tan", "Bob Lee"]))
        .unwrap();
    model.add_trip(trip("Alps Hike", "2024-08-20", &["Bob Lee"])).unwrap();

    let trips = model.trips_with_customer(&Name::new("Bob Lee").unwrap());
    assert_eq!(trips.len(), 2);

    let resolution = model.resolve_customers(&model.trips()[0]);
    assert_eq!(resolution.resolved.len(), 1);
    assert_eq!(resolution.resolved[0].name().as_str(), "Alice Tan");
    assert_eq!(resolution.dangling, vec![Name::new("Bob Lee").unwrap()]);
}
