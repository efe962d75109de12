//! Card file commands: create, open, remove.

use crate::config::Settings;
use crate::editor::CardEditor;
use crate::error::CardFileError;
use anyhow::Context;
use rand::Rng;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::info;
use zettel_core::{card_skeleton, unique_name};

/// Resolve a card file name inside the cards directory.
///
/// Only bare file names are accepted.
pub fn card_path(settings: &Settings, file: &str) -> Result<PathBuf, CardFileError> {
    let name = Path::new(file);
    let mut components = name.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(settings.cards_path.join(name)),
        _ => Err(CardFileError::InvalidName(file.to_string())),
    }
}

/// Create a uniquely named card and open it in the editor.
///
/// `today` fills the date line when `prefill_date` is set.
pub fn new_card<E, R, W>(
    settings: &Settings,
    editor: &E,
    rng: &mut R,
    today: &str,
    out: &mut W,
) -> anyhow::Result<PathBuf>
where
    E: CardEditor + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let dir = &settings.cards_path;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create cards directory {}", dir.display()))?;

    let path = dir.join(unique_name(dir, rng));
    writeln!(out, "Creating the file: {}", path.display())?;

    if settings.prefill_date {
        fs::write(&path, card_skeleton(today))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!(path = %path.display(), "created card");
    editor.launch(&path)?;
    Ok(path)
}

/// Open an existing card in the editor.
pub fn open_card<E: CardEditor + ?Sized>(
    settings: &Settings,
    editor: &E,
    file: &str,
) -> anyhow::Result<PathBuf> {
    let path = card_path(settings, file)?;
    if !path.is_file() {
        return Err(CardFileError::NotFound(file.to_string()).into());
    }
    editor.launch(&path)?;
    Ok(path)
}

/// Delete a card file.
pub fn remove_card<W: Write>(settings: &Settings, file: &str, out: &mut W) -> anyhow::Result<PathBuf> {
    let path = card_path(settings, file)?;
    if !path.is_file() {
        return Err(CardFileError::NotFound(file.to_string()).into());
    }

    fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
    info!(path = %path.display(), "removed card");
    writeln!(out, "Removed {}", path.display())?;
    Ok(path)
}
