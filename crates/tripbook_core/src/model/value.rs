//! Self-validating value objects for contact and trip fields.
//!
//! # Responsibility
//! - Validate raw user input once, at construction.
//! - Give every field a typed, immutable, structurally comparable shape.
//!
//! # Invariants
//! - A constructed value object always satisfies its `MESSAGE_CONSTRAINTS`.
//! - Deserialization re-runs the same validation as `new`.
//! - String-backed values are stored trimmed.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));
static TRIP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 '&\-]*$").expect("valid trip name regex"));
static TRIP_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid trip date regex"));

/// Maximum note length in characters.
pub const NOTE_MAX_CHARS: usize = 500;

/// Raised when raw input does not satisfy a value object's constraints.
///
/// `Display` yields the human-readable constraint, suitable for showing to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: &'static str,
    constraint: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }

    /// Stable field identifier, e.g. `name` or `trip_date`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Constraint description shown to the user.
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constraint)
    }
}

impl Error for ValidationError {}

macro_rules! string_value {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, constraints = $constraints:expr, valid = $valid:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            /// Validates and wraps trimmed input.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                let trimmed = value.as_ref().trim();
                let valid: fn(&str) -> bool = $valid;
                if !valid(trimmed) {
                    return Err(ValidationError::new($field, Self::MESSAGE_CONSTRAINTS));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns whether `value` would be accepted by `new`.
            pub fn is_valid(value: &str) -> bool {
                let valid: fn(&str) -> bool = $valid;
                valid(value.trim())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_value!(
    /// Contact name. Doubles as the contact's business key and as the
    /// reference a trip keeps to its customers.
    Name,
    field = "name",
    constraints = "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    valid = |value| NAME_RE.is_match(value)
);

string_value!(
    Phone,
    field = "phone",
    constraints = "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    valid = |value| PHONE_RE.is_match(value)
);

string_value!(
    /// Email in `local-part@domain` form.
    Email,
    field = "email",
    constraints = "Emails should be of the format local-part@domain. The local-part should only contain \
alphanumeric characters and the special characters +_.-, and may not start or end with a special character. \
The domain is made of labels separated by periods; each label starts and ends with an alphanumeric character, \
may contain hyphens in between, and the last label is at least 2 characters long",
    valid = |value| EMAIL_RE.is_match(value)
);

string_value!(
    Address,
    field = "address",
    constraints = "Addresses can take any values, and it should not be blank",
    valid = |value| !value.is_empty()
);

string_value!(
    Tag,
    field = "tag",
    constraints = "Tags names should be alphanumeric",
    valid = |value| TAG_RE.is_match(value)
);

string_value!(
    /// Trip name, the trip's business key.
    TripName,
    field = "trip_name",
    constraints = "Trip names should only contain alphanumeric characters, spaces, hyphens, apostrophes \
and ampersands, and it should not be blank",
    valid = |value| TRIP_NAME_RE.is_match(value)
);

string_value!(
    Accommodation,
    field = "accommodation",
    constraints = "Accommodations can take any values, and it should not be blank",
    valid = |value| !value.is_empty()
);

string_value!(
    Itinerary,
    field = "itinerary",
    constraints = "Itineraries can take any values, and it should not be blank",
    valid = |value| !value.is_empty()
);

string_value!(
    /// Free-form trip note. Empty is allowed.
    Note,
    field = "note",
    constraints = "Notes can take any values, and should be at most 500 characters long",
    valid = |value| value.chars().count() <= NOTE_MAX_CHARS
);

impl Note {
    /// Returns an empty note.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Calendar date of a trip, written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripDate(NaiveDate);

impl TripDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Trip dates should be in the format YYYY-MM-DD and be a valid calendar date";
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parses a strict `YYYY-MM-DD` date.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if !TRIP_DATE_RE.is_match(trimmed) {
            return Err(Self::invalid());
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|_| Self::invalid())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    fn invalid() -> ValidationError {
        ValidationError::new("trip_date", Self::MESSAGE_CONSTRAINTS)
    }
}

impl Display for TripDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl TryFrom<String> for TripDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TripDate> for String {
    fn from(value: TripDate) -> Self {
        value.to_string()
    }
}

/// Position in a displayed list.
///
/// Stored zero-based; users see and type one-based numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Index must be a positive integer";

    pub fn from_one_based(value: usize) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::new("index", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value - 1))
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(value)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
