//! Active view predicates carried between runs.
//!
//! Display indices are resolved against the filtered views, so a front end
//! that rebuilds the model per invocation must restore the predicates the
//! previous invocation left behind before it resolves an index.

use crate::model::predicate::{ContactPredicate, TripPredicate};
use serde::{Deserialize, Serialize};

/// Predicates of the contact and trip views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub contacts: ContactPredicate,
    pub trips: TripPredicate,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            contacts: ContactPredicate::All,
            trips: TripPredicate::All,
        }
    }
}

impl ViewState {
    /// True when neither view is filtered.
    pub fn is_unfiltered(&self) -> bool {
        self.contacts == ContactPredicate::All && self.trips == TripPredicate::All
    }
}
