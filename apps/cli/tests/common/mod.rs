//! Common test utilities for CLI integration tests.
//!
//! Provides a scratch card directory with settings, and an editor double
//! that records launches instead of spawning a process.

pub mod fixtures;

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zettel_cli::config::{Settings, SETTINGS_FILE};
use zettel_cli::editor::CardEditor;

/// Temporary Zettelkasten: a cards directory plus a settings file.
pub struct TestDeck {
    dir: TempDir,
    pub settings: Settings,
}

impl TestDeck {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let cards_path = dir.path().join("cards");
        fs::create_dir(&cards_path).expect("create cards dir");

        let settings = Settings {
            cards_path,
            editor: "true".to_string(),
            prefill_date: true,
        };
        settings
            .create(&dir.path().join(SETTINGS_FILE))
            .expect("write settings");

        Self { dir, settings }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join(SETTINGS_FILE)
    }

    pub fn cards_path(&self) -> &Path {
        &self.settings.cards_path
    }

    /// Write a card file and return its path.
    pub fn add_card(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.cards_path().join(file_name);
        fs::write(&path, content).expect("write card");
        path
    }

    pub fn card_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.cards_path())
            .expect("read cards dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Editor double recording every path it was asked to open.
#[derive(Default)]
pub struct RecordingEditor {
    pub launched: RefCell<Vec<PathBuf>>,
}

impl CardEditor for RecordingEditor {
    fn launch(&self, path: &Path) -> anyhow::Result<()> {
        self.launched.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Editor double that always fails.
pub struct BrokenEditor;

impl CardEditor for BrokenEditor {
    fn launch(&self, _path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("editor crashed")
    }
}

/// Run a command and capture its stdout as a string.
pub fn output_of<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).expect("command succeeds");
    String::from_utf8(out).expect("utf-8 output")
}
