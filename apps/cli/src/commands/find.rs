//! Card search command.

use crate::config::Settings;
use anyhow::Context;
use std::io::Write;
use tracing::info;
use zettel_core::{DirectorySource, PredicateSet, QueryEngine, QueryOutcome};

/// Scan the cards directory and print the matching cards.
pub fn find_cards<W: Write>(
    settings: &Settings,
    predicates: &PredicateSet,
    json: bool,
    out: &mut W,
) -> anyhow::Result<QueryOutcome> {
    let engine = QueryEngine::new(DirectorySource::new(&settings.cards_path));
    let outcome = engine.run(predicates)?;

    if let QueryOutcome::Matches(matches) = &outcome {
        info!(
            fields = ?predicates.supplied_fields(),
            matched = matches.len(),
            "search complete"
        );
    }

    let report = if json {
        outcome.render_json()?
    } else {
        outcome.render()
    };
    writeln!(out, "{report}").context("failed to write report")?;

    Ok(outcome)
}
