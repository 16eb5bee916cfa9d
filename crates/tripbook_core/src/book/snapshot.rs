//! Plain-data copy of the master collections for persistence.

use crate::model::contact::Contact;
use crate::model::trip::Trip;
use serde::{Deserialize, Serialize};

/// Master collections in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookSnapshot {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl AddressBookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.trips.is_empty()
    }
}
