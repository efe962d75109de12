//! Linear-scan query engine.

use crate::error::{Result, ZettelError};
use crate::format::{render_json, render_report, sort_matches, NO_ARGUMENTS};
use crate::matching::PredicateSet;
use crate::parser::parse;
use crate::source::CardSource;
use crate::types::CardMatch;
use serde::Serialize;
use tracing::{debug, warn};

/// Result of running a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "cards", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// No predicate was supplied, so nothing was scanned.
    NoPredicates,
    /// Matching cards in report order.
    Matches(Vec<CardMatch>),
}

impl QueryOutcome {
    pub fn render(&self) -> String {
        match self {
            Self::NoPredicates => NO_ARGUMENTS.to_string(),
            Self::Matches(matches) => render_report(matches),
        }
    }

    pub fn render_json(&self) -> Result<String> {
        match self {
            Self::NoPredicates => Ok(serde_json::to_string_pretty(self)?),
            Self::Matches(matches) => render_json(matches),
        }
    }

    pub fn matches(&self) -> &[CardMatch] {
        match self {
            Self::NoPredicates => &[],
            Self::Matches(matches) => matches,
        }
    }
}

/// Runs predicate sets against every card in a source.
///
/// Nothing is cached between runs; each query re-reads the source.
pub struct QueryEngine<S> {
    source: S,
}

impl<S: CardSource> QueryEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn run(&self, predicates: &PredicateSet) -> Result<QueryOutcome> {
        if predicates.is_empty() {
            debug!("query has no predicates, skipping scan");
            return Ok(QueryOutcome::NoPredicates);
        }

        let mut found = Vec::new();
        let mut scanned = 0usize;

        for card in self.source.cards()? {
            let card = match card {
                Ok(card) => card,
                Err(ZettelError::UnreadableCard { file, source }) => {
                    warn!(file = %file, error = %source, "skipping unreadable card");
                    continue;
                }
                Err(e) => return Err(e),
            };
            scanned += 1;

            let record = parse(&card.content);
            if predicates.matches(&record) {
                found.push(CardMatch::new(record.number, card.file_name));
            }
        }

        debug!(scanned, matched = found.len(), "query finished");
        sort_matches(&mut found);
        Ok(QueryOutcome::Matches(found))
    }
}
