//! Settings initialization command.

use crate::config::Settings;
use std::io::Write;
use std::path::Path;

/// Write a default settings file at `path`.
pub fn init_settings<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<Settings> {
    let settings = Settings::default();
    settings.create(path)?;

    writeln!(out, "Created settings file at: {}", path.display())?;
    writeln!(out, "  cards_path:   {}", settings.cards_path.display())?;
    writeln!(out, "  editor:       {}", settings.editor)?;
    writeln!(out, "  prefill_date: {}", settings.prefill_date)?;
    Ok(settings)
}
