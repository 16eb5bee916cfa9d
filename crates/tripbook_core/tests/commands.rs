mod common;

use common::{contact, contact_with, trip};
use tripbook_core::{
    AddContactCommand, AddTripCommand, ClearCommand, Command, CommandError, ContactPredicate,
    DeleteContactCommand, DeleteTripCommand, EditContactCommand, EditContactDescriptor,
    EditTripCommand, EditTripDescriptor, EntityKind, ExitCommand, FindCommand, FindTripCommand,
    HelpCommand, Index, ListCommand, ListTripCommand, Model, ModelError, ModelManager, Name,
    NameContainsKeywordsPredicate, Note, Phone, TripDate, TripPredicate,
};

fn three_contacts() -> ModelManager {
    let mut model = ModelManager::new();
    for name in ["Alice Tan", "Bob Lee", "Charlie Oh"] {
        model.add_contact(contact(name)).unwrap();
    }
    model
}

fn contact_names(model: &ModelManager) -> Vec<String> {
    model
        .filtered_contacts()
        .iter()
        .map(|contact| contact.name().to_string())
        .collect()
}

fn trip_names(model: &ModelManager) -> Vec<String> {
    model
        .filtered_trips()
        .iter()
        .map(|trip| trip.name().to_string())
        .collect()
}

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

#[test]
fn find_lists_matching_contacts_in_master_order() {
    let mut model = three_contacts();
    let command = FindCommand::new(NameContainsKeywordsPredicate::new(["charlie", "alice"]).unwrap());

    let result = command.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), "2 persons listed!");
    assert_eq!(contact_names(&model), vec!["Alice Tan", "Charlie Oh"]);
    assert!(!result.is_show_help());
    assert!(!result.is_exit());
}

#[test]
fn find_without_match_reports_no_matching_names() {
    let mut model = three_contacts();
    let command = FindCommand::new(NameContainsKeywordsPredicate::new(["xyz"]).unwrap());

    let result = command.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), "No matching names found");
    assert!(model.filtered_contacts().is_empty());
}

#[test]
fn list_trips_resets_an_empty_filter() {
    let mut model = ModelManager::new();
    model.add_trip(trip("Bali Retreat", "2024-06-01", &[])).unwrap();
    model.add_trip(trip("Tokyo Food Tour", "2024-07-10", &[])).unwrap();
    model.add_trip(trip("Alps Hike", "2024-08-20", &[])).unwrap();
    FindTripCommand::new(TripPredicate::from(
        NameContainsKeywordsPredicate::new(["nowhere"]).unwrap(),
    ))
    .execute(&mut model)
    .unwrap();
    assert!(model.filtered_trips().is_empty());

    let result = ListTripCommand.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), "Listed all trips");
    assert_eq!(
        trip_names(&model),
        vec!["Bali Retreat", "Tokyo Food Tour", "Alps Hike"]
    );
}

#[test]
fn list_resets_contact_filter() {
    let mut model = three_contacts();
    model.update_filtered_contact_list(ContactPredicate::from(
        NameContainsKeywordsPredicate::new(["bob"]).unwrap(),
    ));

    let result = ListCommand.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), "Listed all persons");
    assert_eq!(model.filtered_contacts().len(), 3);
}

#[test]
fn find_trip_counts_date_range_matches() {
    let mut model = ModelManager::new();
    model.add_trip(trip("Bali Retreat", "2024-06-01", &[])).unwrap();
    model.add_trip(trip("Tokyo Food Tour", "2024-07-10", &[])).unwrap();
    let range = TripPredicate::date_between(
        TripDate::parse("2024-05-01").unwrap(),
        TripDate::parse("2024-06-30").unwrap(),
    )
    .unwrap();

    let result = FindTripCommand::new(range).execute(&mut model).unwrap();
    assert_eq!(result.feedback(), "1 trips listed!");
    assert_eq!(trip_names(&model), vec!["Bali Retreat"]);

    let none = FindTripCommand::new(TripPredicate::HasCustomer(Name::new("Nobody").unwrap()))
        .execute(&mut model)
        .unwrap();
    assert_eq!(none.feedback(), "No matching trips found");
}

#[test]
fn add_contact_reports_new_person() {
    let mut model = ModelManager::new();
    let alice = contact("Alice Tan");

    let command = AddContactCommand::new(alice.clone());
    let result = command.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), format!("New person added: {alice}"));
    assert!(command.mutates_data());
    assert!(model.has_contact(&alice));
}

#[test]
fn add_duplicate_contact_surfaces_model_error() {
    let mut model = three_contacts();

    let err = AddContactCommand::new(contact_with("Alice Tan", "11111111", &[]))
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(
        err,
        CommandError::Model(ModelError::DuplicateEntity {
            kind: EntityKind::Contact,
            key: "Alice Tan".to_string(),
        })
    );
    assert_eq!(err.to_string(), "This contact already exists in the address book");
    assert_eq!(model.contacts().len(), 3);
}

#[test]
fn add_trip_rejects_same_trip_name() {
    let mut model = ModelManager::new();
    AddTripCommand::new(trip("Bali Retreat", "2024-06-01", &[]))
        .execute(&mut model)
        .unwrap();

    let err = AddTripCommand::new(trip("Bali Retreat", "2025-01-01", &["Alice Tan"]))
        .execute(&mut model)
        .unwrap_err();

    assert!(matches!(
        err,
        CommandError::Model(ModelError::DuplicateEntity {
            kind: EntityKind::Trip,
            ..
        })
    ));
}

#[test]
fn delete_resolves_index_against_filtered_view() {
    let mut model = three_contacts();
    model.update_filtered_contact_list(ContactPredicate::from(
        NameContainsKeywordsPredicate::new(["charlie"]).unwrap(),
    ));

    let result = DeleteContactCommand::new(index(1))
        .execute(&mut model)
        .unwrap();

    assert_eq!(
        result.feedback(),
        format!("Deleted Person: {}", contact("Charlie Oh"))
    );
    let remaining = model
        .contacts()
        .iter()
        .map(|contact| contact.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(remaining, vec!["Alice Tan", "Bob Lee"]);
}

#[test]
fn delete_out_of_range_index_is_rejected() {
    let mut model = three_contacts();

    let err = DeleteContactCommand::new(index(4))
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(
        err,
        CommandError::InvalidIndex {
            kind: EntityKind::Contact,
            index: index(4),
        }
    );
    assert_eq!(err.to_string(), "The contact index provided is invalid: 4");
    assert_eq!(model.contacts().len(), 3);
}

#[test]
fn deleting_contact_keeps_trip_customers() {
    let mut model = three_contacts();
    model
        .add_trip(trip("Bali Retreat", "2024-06-01", &["Alice Tan"]))
        .unwrap();

    DeleteContactCommand::new(index(1))
        .execute(&mut model)
        .unwrap();

    let bali = &model.trips()[0];
    assert!(bali.has_customer(&Name::new("Alice Tan").unwrap()));
    assert_eq!(
        model.resolve_customers(bali).dangling,
        vec![Name::new("Alice Tan").unwrap()]
    );
}

#[test]
fn delete_trip_reports_removed_trip() {
    let mut model = ModelManager::new();
    let bali = trip("Bali Retreat", "2024-06-01", &[]);
    model.add_trip(bali.clone()).unwrap();

    let result = DeleteTripCommand::new(index(1)).execute(&mut model).unwrap();

    assert_eq!(result.feedback(), format!("Deleted Trip: {bali}"));
    assert!(model.trips().is_empty());
}

#[test]
fn edit_contact_replaces_in_place_and_resets_filter() {
    let mut model = three_contacts();
    model.update_filtered_contact_list(ContactPredicate::from(
        NameContainsKeywordsPredicate::new(["bob"]).unwrap(),
    ));
    let descriptor = EditContactDescriptor {
        phone: Some(Phone::new("88887777").unwrap()),
        ..EditContactDescriptor::default()
    };

    let result = EditContactCommand::new(index(1), descriptor)
        .execute(&mut model)
        .unwrap();

    let expected = contact_with("Bob Lee", "88887777", &[]);
    assert_eq!(result.feedback(), format!("Edited Person: {expected}"));
    assert_eq!(*model.contacts()[1], expected);
    assert_eq!(model.contact_predicate(), &ContactPredicate::All);
    assert_eq!(model.filtered_contacts().len(), 3);
}

#[test]
fn edit_contact_into_existing_name_is_duplicate() {
    let mut model = three_contacts();
    let descriptor = EditContactDescriptor {
        name: Some(Name::new("Alice Tan").unwrap()),
        ..EditContactDescriptor::default()
    };

    let err = EditContactCommand::new(index(2), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert!(matches!(
        err,
        CommandError::Model(ModelError::DuplicateEntity { .. })
    ));
    assert_eq!(model.contacts()[1].name().as_str(), "Bob Lee");
}

#[test]
fn edit_without_fields_is_rejected() {
    let mut model = three_contacts();

    let err = EditContactCommand::new(index(1), EditContactDescriptor::default())
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err, CommandError::NothingToEdit);
    assert_eq!(err.to_string(), "At least one field to edit must be provided.");
}

#[test]
fn edit_trip_updates_note_and_customers() {
    let mut model = ModelManager::new();
    model
        .add_trip(trip("Bali Retreat", "2024-06-01", &["Alice Tan"]))
        .unwrap();
    let descriptor = EditTripDescriptor {
        note: Some(Note::new("Vegetarian meals").unwrap()),
        customer_names: Some([Name::new("Bob Lee").unwrap()].into_iter().collect()),
        ..EditTripDescriptor::default()
    };

    let result = EditTripCommand::new(index(1), descriptor)
        .execute(&mut model)
        .unwrap();

    let edited = &model.trips()[0];
    assert!(result.feedback().starts_with("Edited Trip: Bali Retreat"));
    assert_eq!(edited.note().as_str(), "Vegetarian meals");
    assert!(edited.has_customer(&Name::new("Bob Lee").unwrap()));
    assert!(!edited.has_customer(&Name::new("Alice Tan").unwrap()));
    assert_eq!(edited.date(), TripDate::parse("2024-06-01").unwrap());
}

#[test]
fn clear_empties_everything() {
    let mut model = three_contacts();
    model.add_trip(trip("Bali Retreat", "2024-06-01", &[])).unwrap();

    let result = ClearCommand.execute(&mut model).unwrap();

    assert_eq!(result.feedback(), "Address book has been cleared!");
    assert!(ClearCommand.mutates_data());
    assert!(model.contacts().is_empty());
    assert!(model.filtered_trips().is_empty());
}

#[test]
fn help_and_exit_set_presentation_flags() {
    let mut model = ModelManager::new();

    let help = HelpCommand.execute(&mut model).unwrap();
    assert_eq!(help.feedback(), "Opened help window.");
    assert!(help.is_show_help());
    assert!(!help.is_exit());

    let exit = ExitCommand.execute(&mut model).unwrap();
    assert_eq!(exit.feedback(), "Exiting Address Book as requested ...");
    assert!(exit.is_exit());
    assert!(!exit.is_show_help());
}

#[test]
fn read_only_commands_do_not_mutate() {
    assert!(!ListCommand.mutates_data());
    assert!(!ListTripCommand.mutates_data());
    assert!(!HelpCommand.mutates_data());
    assert!(!FindTripCommand::new(TripPredicate::All).mutates_data());
}
