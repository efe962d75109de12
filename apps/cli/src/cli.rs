//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use zettel_core::PredicateSet;

#[derive(Debug, Parser)]
#[command(name = "zettel")]
#[command(version, about = "Search and edit a plain-text Zettelkasten", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to $ZETTEL_CONFIG, ./settings.json, then the user config dir)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find cards matching every given filter
    Find(FindArgs),
    /// Create a new card and open it in the editor
    New,
    /// Open an existing card in the editor
    Open {
        /// Card file name, e.g. AbC123.txt
        file: String,
    },
    /// Delete a card file
    Remove {
        /// Card file name, e.g. AbC123.txt
        file: String,
    },
    /// Write a default settings file
    Init,
}

#[derive(Debug, Default, Args)]
pub struct FindArgs {
    /// Card number prefix. Example: 1_111_a_2
    #[arg(short = 'n', long, default_value = "")]
    pub number: String,

    /// Reference listed on the card. Example: 1_111_2
    #[arg(short = 'r', long, default_value = "")]
    pub reference: String,

    /// Creation date prefix in YYYYMMDD form. Example: 202108
    #[arg(short = 'd', long, default_value = "")]
    pub date: String,

    /// Card type code. Example: n
    #[arg(short = 't', long = "type", default_value = "")]
    pub card_type: String,

    /// Text contained in the body, case-insensitive. Example: index
    #[arg(short = 'w', long, default_value = "")]
    pub words: String,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    pub fn predicates(&self) -> PredicateSet {
        PredicateSet::new()
            .number(&self.number)
            .references(&self.reference)
            .date(&self.date)
            .card_type(&self.card_type)
            .words(&self.words)
    }
}
