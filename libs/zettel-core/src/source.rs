//! Card sources feeding the query engine.

use crate::error::{Result, ZettelError};
use crate::types::RawCard;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension a file must carry to count as a card.
pub const CARD_EXTENSION: &str = "txt";

/// Something that yields raw cards one at a time.
///
/// Opening the source may fail as a whole; individual cards may fail
/// without ending the iteration.
pub trait CardSource {
    fn cards(&self) -> Result<Box<dyn Iterator<Item = Result<RawCard>> + '_>>;
}

impl<S: CardSource + ?Sized> CardSource for &S {
    fn cards(&self) -> Result<Box<dyn Iterator<Item = Result<RawCard>> + '_>> {
        (**self).cards()
    }
}

impl CardSource for Vec<RawCard> {
    fn cards(&self) -> Result<Box<dyn Iterator<Item = Result<RawCard>> + '_>> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

/// Reads `*.txt` cards from a single directory, one file at a time.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_card(path: &Path) -> Result<RawCard> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let content = fs::read_to_string(path).map_err(|source| ZettelError::UnreadableCard {
            file: file_name.clone(),
            source,
        })?;
        Ok(RawCard { file_name, content })
    }
}

/// Whether a path names a card file by extension.
pub fn is_card_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == CARD_EXTENSION)
}

impl CardSource for DirectorySource {
    fn cards(&self) -> Result<Box<dyn Iterator<Item = Result<RawCard>> + '_>> {
        let entries = fs::read_dir(&self.root).map_err(|source| ZettelError::CardsDirUnavailable {
            path: self.root.clone(),
            source,
        })?;

        let cards = entries.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ZettelError::UnreadableCard {
                        file: self.root.display().to_string(),
                        source,
                    }))
                }
            };
            let path = entry.path();
            if !is_card_file(&path) || path.is_dir() {
                return None;
            }
            Some(Self::read_card(&path))
        });

        Ok(Box::new(cards))
    }
}
