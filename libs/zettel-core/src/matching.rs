//! Predicate matching for card queries.
//!
//! Each of the five card fields has an independent comparison rule. A card
//! matches when every supplied predicate passes and at least one predicate
//! was supplied. Unsupplied predicates are skipped, never counted as failures.

use crate::types::CardRecord;

/// A filterable card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    References,
    Date,
    CardType,
    Words,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Number,
        Field::References,
        Field::Date,
        Field::CardType,
        Field::Words,
    ];
}

/// Card number starts with the expected prefix.
pub fn number_matches(expected: &str, number: &str) -> bool {
    number.starts_with(expected)
}

/// Expected reference is one of the `/`-separated tokens.
pub fn reference_matches(expected: &str, record: &CardRecord) -> bool {
    record.reference_tokens().any(|token| token == expected)
}

/// Card date starts with the expected prefix, so `2021` or `202108` work.
pub fn date_matches(expected: &str, date: &str) -> bool {
    date.starts_with(expected)
}

pub fn type_matches(expected: &str, card_type: &str) -> bool {
    card_type == expected
}

/// Case-insensitive substring search in the body.
pub fn words_match(expected: &str, body: &str) -> bool {
    body.to_lowercase().contains(&expected.to_lowercase())
}

/// The optional filters of one query.
///
/// Inputs are trimmed on the way in; an input that is empty after trimming
/// leaves its predicate unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    pub number: Option<String>,
    pub references: Option<String>,
    pub date: Option<String>,
    pub card_type: Option<String>,
    pub words: Option<String>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, value: impl AsRef<str>) -> Self {
        self.number = supplied(value.as_ref());
        self
    }

    pub fn references(mut self, value: impl AsRef<str>) -> Self {
        self.references = supplied(value.as_ref());
        self
    }

    pub fn date(mut self, value: impl AsRef<str>) -> Self {
        self.date = supplied(value.as_ref());
        self
    }

    pub fn card_type(mut self, value: impl AsRef<str>) -> Self {
        self.card_type = supplied(value.as_ref());
        self
    }

    pub fn words(mut self, value: impl AsRef<str>) -> Self {
        self.words = supplied(value.as_ref());
        self
    }

    /// The predicate value for a field, if supplied.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Number => self.number.as_deref(),
            Field::References => self.references.as_deref(),
            Field::Date => self.date.as_deref(),
            Field::CardType => self.card_type.as_deref(),
            Field::Words => self.words.as_deref(),
        }
    }

    /// True when no predicate was supplied.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Supplied fields, in field order.
    pub fn supplied_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }

    /// Evaluate one field. `None` means the field was not supplied.
    pub fn check(&self, field: Field, record: &CardRecord) -> Option<bool> {
        let expected = self.get(field)?;
        let passed = match field {
            Field::Number => number_matches(expected, &record.number),
            Field::References => reference_matches(expected, record),
            Field::Date => date_matches(expected, &record.date),
            Field::CardType => type_matches(expected, &record.card_type),
            Field::Words => words_match(expected, &record.body),
        };
        Some(passed)
    }

    /// Per-field results for a record, in field order.
    pub fn checks(&self, record: &CardRecord) -> [(Field, Option<bool>); 5] {
        Field::ALL.map(|field| (field, self.check(field, record)))
    }

    /// Whether the record satisfies every supplied predicate.
    ///
    /// Always false when nothing was supplied.
    pub fn matches(&self, record: &CardRecord) -> bool {
        let (any_supplied, all_passed) = self.checks(record).iter().fold(
            (false, true),
            |(any, all), (_, check)| match check {
                Some(passed) => (true, all && *passed),
                None => (any, all),
            },
        );
        any_supplied && all_passed
    }
}

fn supplied(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
