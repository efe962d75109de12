//! External editor used to write and revise cards.

use crate::error::CardFileError;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Opens a card file for editing and returns once the user is done.
pub trait CardEditor {
    fn launch(&self, path: &Path) -> anyhow::Result<()>;
}

impl<E: CardEditor + ?Sized> CardEditor for &E {
    fn launch(&self, path: &Path) -> anyhow::Result<()> {
        (**self).launch(path)
    }
}

/// Runs the configured editor command with the card path appended.
///
/// The command is split with shell quoting rules, so `code -w` and
/// `"/opt/My Editor/bin/edit" --wait` both work.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl CardEditor for CommandEditor {
    fn launch(&self, path: &Path) -> anyhow::Result<()> {
        let parts =
            shell_words::split(&self.command).map_err(|source| CardFileError::InvalidEditor {
                command: self.command.clone(),
                source,
            })?;
        let (program, args) = parts.split_first().ok_or(CardFileError::EmptyEditor)?;

        info!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|source| CardFileError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CardFileError::EditorFailed {
                command: self.command.clone(),
                status,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let error = CommandEditor::new("   ").launch(Path::new("a.txt")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CardFileError>(),
            Some(CardFileError::EmptyEditor)
        ));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let error = CommandEditor::new("zettel-no-such-editor-binary")
            .launch(Path::new("a.txt"))
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CardFileError>(),
            Some(CardFileError::Spawn { .. })
        ));
    }

    #[test]
    fn unbalanced_quote_is_invalid() {
        let error = CommandEditor::new("\"vim -u NONE").launch(Path::new("a.txt")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CardFileError>(),
            Some(CardFileError::InvalidEditor { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn quoted_program_path_with_space() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let program = dir.path().join("my editor");
        let marker = dir.path().join("opened");
        std::fs::write(
            &program,
            format!("#!/bin/sh\n[ \"$1\" = --wait ] && echo \"$2\" > '{}'\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();

        let command = format!("\"{}\" --wait", program.display());
        CommandEditor::new(command).launch(Path::new("a.txt")).unwrap();
        assert_eq!(std::fs::read_to_string(&marker).unwrap(), "a.txt\n");
    }

    #[cfg(unix)]
    #[test]
    fn successful_editor() {
        CommandEditor::new("true").launch(Path::new("a.txt")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_reports_status() {
        let error = CommandEditor::new("false").launch(Path::new("a.txt")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CardFileError>(),
            Some(CardFileError::EditorFailed { .. })
        ));
    }
}
