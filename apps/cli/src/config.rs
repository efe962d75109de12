//! Settings file handling.
//!
//! Settings are JSON:
//! ```json
//! {
//!   "cards_path": "/home/me/zettel",
//!   "editor": "vim",
//!   "prefill_date": true
//! }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "ZETTEL_CONFIG";

/// File name looked up in the working directory and the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Tool settings, passed explicitly to every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the `*.txt` cards.
    pub cards_path: PathBuf,
    /// Editor command; the card path is appended as the last argument.
    #[serde(default = "Settings::default_editor")]
    pub editor: String,
    /// Write the date line into new cards before opening the editor.
    #[serde(default = "Settings::default_prefill_date")]
    pub prefill_date: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cards_path: Self::default_cards_path(),
            editor: Self::default_editor(),
            prefill_date: Self::default_prefill_date(),
        }
    }
}

impl Settings {
    fn default_cards_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zettel")
    }

    fn default_editor() -> String {
        std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string())
    }

    fn default_prefill_date() -> bool {
        true
    }

    /// Pick the settings file to use.
    ///
    /// Order: explicit path, `ZETTEL_CONFIG`, `./settings.json` if present,
    /// then `<config dir>/zettel/settings.json`.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let local = PathBuf::from(SETTINGS_FILE);
        let global = dirs::config_dir().map(|dir| dir.join("zettel").join(SETTINGS_FILE));
        Self::choose_path(explicit, from_env, &local, global)
    }

    fn choose_path(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        local: &Path,
        global: Option<PathBuf>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }
        if local.is_file() {
            return Ok(local.to_path_buf());
        }
        global.ok_or(ConfigError::NoConfigDir)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), cards_path = %settings.cards_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write these settings to a new file, never overwriting.
    pub fn create(&self, path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content + "\n").map_err(io_error)?;
        Ok(())
    }
}
