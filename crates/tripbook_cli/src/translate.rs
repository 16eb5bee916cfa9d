//! Turns parsed arguments into core commands.
//!
//! Raw strings are validated here through the core value objects, so an
//! invalid field is reported before the store is touched.

use crate::cli::{Commands, ContactArgs, EditContactArgs, EditTripArgs, FindTripArgs, TripArgs};
use anyhow::Context;
use std::collections::BTreeSet;
use tripbook_core::{
    Accommodation, AddContactCommand, AddTripCommand, Address, ClearCommand, Command, Contact,
    DeleteContactCommand, DeleteTripCommand, EditContactCommand, EditContactDescriptor,
    EditTripCommand, EditTripDescriptor, Email, FindCommand, FindTripCommand, Index, Itinerary,
    ListCommand, ListTripCommand, Name, NameContainsKeywordsPredicate, Note, Phone, Tag, Trip,
    TripDate, TripName, TripPredicate,
};

pub fn to_command(command: Commands) -> anyhow::Result<Box<dyn Command>> {
    let translated: Box<dyn Command> = match command {
        Commands::List => Box::new(ListCommand),
        Commands::ListTrips => Box::new(ListTripCommand),
        Commands::Find { keywords } => Box::new(FindCommand::new(
            NameContainsKeywordsPredicate::new(&keywords).context("invalid keywords")?,
        )),
        Commands::FindTrip(args) => Box::new(FindTripCommand::new(trip_predicate(args)?)),
        Commands::AddContact(args) => Box::new(AddContactCommand::new(contact(args)?)),
        Commands::AddTrip(args) => Box::new(AddTripCommand::new(trip(args)?)),
        Commands::DeleteContact { index } => {
            Box::new(DeleteContactCommand::new(display_index(index)?))
        }
        Commands::DeleteTrip { index } => Box::new(DeleteTripCommand::new(display_index(index)?)),
        Commands::EditContact(args) => {
            let index = display_index(args.index)?;
            Box::new(EditContactCommand::new(index, contact_edits(args)?))
        }
        Commands::EditTrip(args) => {
            let index = display_index(args.index)?;
            Box::new(EditTripCommand::new(index, trip_edits(args)?))
        }
        Commands::Clear => Box::new(ClearCommand),
    };
    Ok(translated)
}

fn display_index(value: usize) -> anyhow::Result<Index> {
    Ok(Index::from_one_based(value)?)
}

/// Every given filter must hold; no filter shows all trips.
fn trip_predicate(args: FindTripArgs) -> anyhow::Result<TripPredicate> {
    let mut filters = Vec::new();
    if !args.keywords.is_empty() {
        filters.push(TripPredicate::from(
            NameContainsKeywordsPredicate::new(&args.keywords).context("invalid keywords")?,
        ));
    }
    if let Some(on) = args.on {
        filters.push(TripPredicate::OnDate(TripDate::parse(on)?));
    }
    if let (Some(from), Some(to)) = (args.from, args.to) {
        filters.push(TripPredicate::date_between(
            TripDate::parse(from)?,
            TripDate::parse(to)?,
        )?);
    }
    if let Some(customer) = args.customer {
        filters.push(TripPredicate::HasCustomer(Name::new(customer)?));
    }

    Ok(filters
        .into_iter()
        .reduce(TripPredicate::and)
        .unwrap_or_default())
}

fn contact(args: ContactArgs) -> anyhow::Result<Contact> {
    Ok(Contact::new(
        Name::new(args.name)?,
        Phone::new(args.phone)?,
        Email::new(args.email)?,
        Address::new(args.address)?,
        tags(&args.tags)?,
    ))
}

fn trip(args: TripArgs) -> anyhow::Result<Trip> {
    Ok(Trip::new(
        TripName::new(args.name)?,
        Accommodation::new(args.accommodation)?,
        Itinerary::new(args.itinerary)?,
        TripDate::parse(args.date)?,
        Note::new(args.note)?,
        names(&args.customers)?,
    ))
}

fn contact_edits(args: EditContactArgs) -> anyhow::Result<EditContactDescriptor> {
    let tags = if args.clear_tags {
        Some(BTreeSet::new())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(tags(&args.tags)?)
    };
    Ok(EditContactDescriptor {
        name: args.name.map(Name::new).transpose()?,
        phone: args.phone.map(Phone::new).transpose()?,
        email: args.email.map(Email::new).transpose()?,
        address: args.address.map(Address::new).transpose()?,
        tags,
    })
}

fn trip_edits(args: EditTripArgs) -> anyhow::Result<EditTripDescriptor> {
    let customer_names = if args.clear_customers {
        Some(BTreeSet::new())
    } else if args.customers.is_empty() {
        None
    } else {
        Some(names(&args.customers)?)
    };
    Ok(EditTripDescriptor {
        name: args.name.map(TripName::new).transpose()?,
        accommodation: args.accommodation.map(Accommodation::new).transpose()?,
        itinerary: args.itinerary.map(Itinerary::new).transpose()?,
        date: args.date.map(TripDate::parse).transpose()?,
        note: args.note.map(Note::new).transpose()?,
        customer_names,
    })
}

fn tags(raw: &[String]) -> anyhow::Result<BTreeSet<Tag>> {
    Ok(raw.iter().map(Tag::new).collect::<Result<BTreeSet<_>, _>>()?)
}

fn names(raw: &[String]) -> anyhow::Result<BTreeSet<Name>> {
    Ok(raw.iter().map(Name::new).collect::<Result<BTreeSet<_>, _>>()?)
}
