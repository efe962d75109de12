//! Core types for the card index.

use serde::Serialize;

/// Card file as read from a source, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    pub file_name: String,
    pub content: String,
}

impl RawCard {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Parsed card. Header fields are kept verbatim; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub number: String,
    /// Raw `/`-delimited reference line.
    pub references: String,
    /// `YYYYMMDD` by convention, compared as text.
    pub date: String,
    pub card_type: String,
    /// Non-blank body lines joined with single spaces.
    pub body: String,
}

impl CardRecord {
    /// Reference tokens in file order, duplicates included.
    ///
    /// An empty reference line yields a single empty token.
    pub fn reference_tokens(&self) -> impl Iterator<Item = &str> {
        self.references.split('/')
    }
}

/// A card selected by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardMatch {
    pub number: String,
    pub file_name: String,
}

impl CardMatch {
    pub fn new(number: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            file_name: file_name.into(),
        }
    }
}
