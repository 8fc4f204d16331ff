use std::path::{Path, PathBuf};

use super::errors::NoteError;

/// Reads and writes the note text file.
///
/// The file holds the raw UTF-8 text with no framing or escaping.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the note file with `text` verbatim.
    pub fn save(&self, text: &str) -> Result<(), NoteError> {
        let write_failed = |source| NoteError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }

        std::fs::write(&self.path, text).map_err(write_failed)?;

        tracing::info!(
            event = "core.note.saved",
            path = %self.path.display(),
            bytes = text.len()
        );

        Ok(())
    }

    /// Load the note text, or an empty string when nothing has been saved yet.
    ///
    /// Contents that are not valid UTF-8 are reported as a read error rather
    /// than lossily converted, so a later save cannot clobber them.
    pub fn load(&self) -> Result<String, NoteError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                tracing::debug!(
                    event = "core.note.loaded",
                    path = %self.path.display(),
                    bytes = text.len()
                );
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(event = "core.note.not_found", path = %self.path.display());
                Ok(String::new())
            }
            Err(source) => Err(NoteError::ReadFailed {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}
