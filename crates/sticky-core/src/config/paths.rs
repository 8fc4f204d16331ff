use std::path::PathBuf;

use crate::config::types::StickyConfig;

pub const GEOMETRY_FILE_NAME: &str = "window.cfg";
pub const NOTE_FILE_NAME: &str = "note.txt";

pub const GEOMETRY_FILE_ENV: &str = "STICKY_GEOMETRY_FILE";
pub const NOTE_FILE_ENV: &str = "STICKY_NOTE_FILE";

/// Resolved locations of the two state files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub geometry_file: PathBuf,
    pub note_file: PathBuf,
}

impl StatePaths {
    /// Both files inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            geometry_file: dir.join(GEOMETRY_FILE_NAME),
            note_file: dir.join(NOTE_FILE_NAME),
        }
    }

    /// Resolve state file locations.
    ///
    /// Resolution order, per file:
    /// 1. `STICKY_GEOMETRY_FILE` / `STICKY_NOTE_FILE` when set and non-empty
    /// 2. `[storage] dir` from config
    /// 3. The current working directory (relative paths)
    pub fn resolve(config: &StickyConfig) -> Self {
        let base = match config.storage.dir {
            Some(ref dir) => Self::in_dir(dir),
            None => Self {
                geometry_file: PathBuf::from(GEOMETRY_FILE_NAME),
                note_file: PathBuf::from(NOTE_FILE_NAME),
            },
        };

        Self {
            geometry_file: env_override(GEOMETRY_FILE_ENV).unwrap_or(base.geometry_file),
            note_file: env_override(NOTE_FILE_ENV).unwrap_or(base.note_file),
        }
    }
}

fn env_override(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(path_str) if !path_str.is_empty() => Some(PathBuf::from(path_str)),
        _ => None,
    }
}
