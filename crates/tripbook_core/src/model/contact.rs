//! Contact entity.
//!
//! # Responsibility
//! - Aggregate validated contact fields into one immutable record.
//! - Provide builder-based assembly for edit and decode paths.
//!
//! # Invariants
//! - Every field except tags is required; tags default to an empty set.
//! - Two contacts are the same iff their names are equal.

use crate::model::entity::{Entity, EntityKind, MissingFieldError};
use crate::model::value::{Address, Email, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A person in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord", into = "ContactRecord")]
pub struct Contact {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Contact {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn builder() -> ContactBuilder {
        ContactBuilder::default()
    }

    /// Returns a builder pre-filled with this contact's fields.
    pub fn to_builder(&self) -> ContactBuilder {
        ContactBuilder {
            name: Some(self.name.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            tags: self.tags.clone(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn business_key(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

/// Incremental contact assembly; `build` fails on the first absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBuilder {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    tags: BTreeSet<Tag>,
}

impl ContactBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Replaces the whole tag set.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<Contact, MissingFieldError> {
        let missing = |field| MissingFieldError::new(EntityKind::Contact, field);
        Ok(Contact {
            name: self.name.ok_or_else(|| missing("name"))?,
            phone: self.phone.ok_or_else(|| missing("phone"))?,
            email: self.email.ok_or_else(|| missing("email"))?,
            address: self.address.ok_or_else(|| missing("address"))?,
            tags: self.tags,
        })
    }
}

/// Wire shape for contacts. Absent fields surface as `MissingFieldError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactRecord {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = MissingFieldError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let mut builder = Contact::builder().tags(record.tags);
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        if let Some(phone) = record.phone {
            builder = builder.phone(phone);
        }
        if let Some(email) = record.email {
            builder = builder.email(email);
        }
        if let Some(address) = record.address {
            builder = builder.address(address);
        }
        builder.build()
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        Self {
            name: Some(contact.name),
            phone: Some(contact.phone),
            email: Some(contact.email),
            address: Some(contact.address),
            tags: contact.tags.into_iter().collect(),
        }
    }
}
