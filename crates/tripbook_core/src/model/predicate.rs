//! Entity predicates used by filtered views.
//!
//! # Responsibility
//! - Provide pure match functions over contacts and trips.
//! - Keep predicates comparable so commands holding them can be compared
//!   without executing.
//!
//! # Invariants
//! - Predicates never read model state.
//! - Keyword matching is case-insensitive and whole-word; keywords are OR-ed.
//! - `All` is the match-all predicate used to reset a view.

use crate::model::contact::Contact;
use crate::model::trip::Trip;
use crate::model::value::{Name, Tag, TripDate, ValidationError};
use serde::{Deserialize, Serialize};

/// Boolean test over one entity type.
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}

/// Matches entities whose name contains any of the given words.
///
/// Serializes as the keyword list; decoding re-runs keyword validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub const MESSAGE_NO_KEYWORDS: &'static str = "At least one keyword must be provided";
    pub const MESSAGE_KEYWORD_CONSTRAINTS: &'static str =
        "Keywords should be single words and should not be blank";

    /// Builds a predicate from single-word keywords, kept in the given order.
    pub fn new<I, S>(keywords: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected = Vec::new();
        for keyword in keywords {
            let trimmed = keyword.as_ref().trim();
            if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
                return Err(ValidationError::new(
                    "keyword",
                    Self::MESSAGE_KEYWORD_CONSTRAINTS,
                ));
            }
            collected.push(trimmed.to_string());
        }
        if collected.is_empty() {
            return Err(ValidationError::new("keyword", Self::MESSAGE_NO_KEYWORDS));
        }
        Ok(Self {
            keywords: collected,
        })
    }

    /// Splits a whitespace-separated keyword line.
    pub fn from_line(line: &str) -> Result<Self, ValidationError> {
        Self::new(line.split_whitespace())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns whether any word of `text` equals any keyword, ignoring case.
    pub fn matches_text(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(text, keyword))
    }
}

impl TryFrom<Vec<String>> for NameContainsKeywordsPredicate {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NameContainsKeywordsPredicate> for Vec<String> {
    fn from(value: NameContainsKeywordsPredicate) -> Self {
        value.keywords
    }
}

impl Predicate<Contact> for NameContainsKeywordsPredicate {
    fn test(&self, contact: &Contact) -> bool {
        self.matches_text(contact.name().as_str())
    }
}

impl Predicate<Trip> for NameContainsKeywordsPredicate {
    fn test(&self, trip: &Trip) -> bool {
        self.matches_text(trip.name().as_str())
    }
}

/// Returns whether `sentence` has a whitespace-separated word equal to
/// `word`, ignoring case. Partial words never match.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let needle = word.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == needle)
}

/// Active filter of the contact view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPredicate {
    #[default]
    All,
    NameContainsKeywords(NameContainsKeywordsPredicate),
    HasTag(Tag),
}

impl Predicate<Contact> for ContactPredicate {
    fn test(&self, contact: &Contact) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(predicate) => predicate.test(contact),
            Self::HasTag(tag) => contact.tags().contains(tag),
        }
    }
}

impl From<NameContainsKeywordsPredicate> for ContactPredicate {
    fn from(value: NameContainsKeywordsPredicate) -> Self {
        Self::NameContainsKeywords(value)
    }
}

/// Inclusive trip date range with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRecord", into = "DateRangeRecord")]
pub struct DateRange {
    from: TripDate,
    to: TripDate,
}

impl DateRange {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "The start date of a date range must not be after its end date";

    pub fn new(from: TripDate, to: TripDate) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::new("date_range", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self { from, to })
    }

    pub fn start(&self) -> TripDate {
        self.from
    }

    pub fn end(&self) -> TripDate {
        self.to
    }

    pub fn contains(&self, date: TripDate) -> bool {
        (self.from..=self.to).contains(&date)
    }
}

#[derive(Serialize, Deserialize)]
struct DateRangeRecord {
    from: TripDate,
    to: TripDate,
}

impl TryFrom<DateRangeRecord> for DateRange {
    type Error = ValidationError;

    fn try_from(record: DateRangeRecord) -> Result<Self, Self::Error> {
        Self::new(record.from, record.to)
    }
}

impl From<DateRange> for DateRangeRecord {
    fn from(range: DateRange) -> Self {
        Self {
            from: range.from,
            to: range.to,
        }
    }
}

/// Active filter of the trip view. Composable through `and`, `or` and
/// `negate`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripPredicate {
    #[default]
    All,
    NameContainsKeywords(NameContainsKeywordsPredicate),
    OnDate(TripDate),
    DateBetween(DateRange),
    HasCustomer(Name),
    And(Box<TripPredicate>, Box<TripPredicate>),
    Or(Box<TripPredicate>, Box<TripPredicate>),
    Not(Box<TripPredicate>),
}

impl TripPredicate {
    pub const MESSAGE_DATE_RANGE_CONSTRAINTS: &'static str = DateRange::MESSAGE_CONSTRAINTS;

    /// Inclusive date range; rejects `from > to`.
    pub fn date_between(from: TripDate, to: TripDate) -> Result<Self, ValidationError> {
        DateRange::new(from, to).map(Self::DateBetween)
    }

    pub fn and(self, other: TripPredicate) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: TripPredicate) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl Predicate<Trip> for TripPredicate {
    fn test(&self, trip: &Trip) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(predicate) => predicate.test(trip),
            Self::OnDate(date) => trip.date() == *date,
            Self::DateBetween(range) => range.contains(trip.date()),
            Self::HasCustomer(name) => trip.has_customer(name),
            Self::And(left, right) => left.test(trip) && right.test(trip),
            Self::Or(left, right) => left.test(trip) || right.test(trip),
            Self::Not(inner) => !inner.test(trip),
        }
    }
}

impl From<NameContainsKeywordsPredicate> for TripPredicate {
    fn from(value: NameContainsKeywordsPredicate) -> Self {
        Self::NameContainsKeywords(value)
    }
}
