#![allow(dead_code)]

use tripbook_core::{
    Accommodation, Address, Contact, Email, Itinerary, Name, Note, Phone, Tag, Trip, TripDate,
    TripName,
};

pub fn contact(name: &str) -> Contact {
    contact_with(name, "94351253", &[])
}

pub fn contact_with(name: &str, phone: &str, tags: &[&str]) -> Contact {
    Contact::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("someone@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        tags.iter().map(|tag| Tag::new(tag).unwrap()),
    )
}

pub fn trip(name: &str, date: &str, customers: &[&str]) -> Trip {
    Trip::new(
        TripName::new(name).unwrap(),
        Accommodation::new("Harbour Hotel").unwrap(),
        Itinerary::new("Day 1 arrival, day 2 city tour").unwrap(),
        TripDate::parse(date).unwrap(),
        Note::empty(),
        customers.iter().map(|name| Name::new(name).unwrap()),
    )
}
