//! Core Zettelkasten library used by the `zettel` command line tool.
//!
//! Provides:
//! - Positional parser for plain-text card files
//! - Predicate matching with AND-with-opt-out semantics
//! - Query engine scanning a card source
//! - Tabular and JSON report formatting
//! - Random card file naming

pub mod error;
pub mod format;
pub mod matching;
pub mod naming;
pub mod parser;
pub mod query;
pub mod source;
pub mod types;

pub use error::{Result, ZettelError};
pub use format::{render_json, render_report, NOTHING_FOUND, NO_ARGUMENTS};
pub use matching::{Field, PredicateSet};
pub use naming::{card_skeleton, generate_name, unique_name};
pub use parser::{parse, parse_lines};
pub use query::{QueryEngine, QueryOutcome};
pub use source::{CardSource, DirectorySource};
pub use types::{CardMatch, CardRecord, RawCard};
