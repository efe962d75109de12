//! `zettel` command line tool around `zettel-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::editor::CommandEditor;
use std::io::Write;

/// Today's date as written on new cards.
pub fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

/// Run a parsed command line, writing user output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config_path = Settings::locate(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => {
            commands::init_settings(&config_path, out)?;
        }
        Commands::Find(args) => {
            let settings = Settings::load(&config_path)?;
            commands::find_cards(&settings, &args.predicates(), args.json, out)?;
        }
        Commands::New => {
            let settings = Settings::load(&config_path)?;
            let editor = CommandEditor::new(&settings.editor);
            commands::new_card(&settings, &editor, &mut rand::thread_rng(), &today(), out)?;
        }
        Commands::Open { file } => {
            let settings = Settings::load(&config_path)?;
            let editor = CommandEditor::new(&settings.editor);
            commands::open_card(&settings, &editor, &file)?;
        }
        Commands::Remove { file } => {
            let settings = Settings::load(&config_path)?;
            commands::remove_card(&settings, &file, out)?;
        }
    }

    Ok(())
}
