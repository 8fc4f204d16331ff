use crate::config::StatePaths;
use crate::errors::StickyError;
use crate::geometry::{GeometryError, GeometryStore, WindowGeometry};
use crate::note::{NoteError, NoteStore};

use super::types::{ShellPhase, StartupState};

/// Loads state at startup and persists it at shutdown, each exactly once.
///
/// Transitions: `Starting -> Running -> Closing -> Closed`. A destroy that
/// arrives without a prior close request goes straight from `Running` to
/// `Closed` and only persists the note.
#[derive(Debug)]
pub struct Shell {
    phase: ShellPhase,
    geometry_store: GeometryStore,
    note_store: NoteStore,
    /// The note file existed but was unreadable; do not overwrite it.
    preserve_note_file: bool,
}

impl Shell {
    pub fn new(paths: &StatePaths) -> Self {
        Self::from_stores(
            GeometryStore::new(&paths.geometry_file),
            NoteStore::new(&paths.note_file),
        )
    }

    pub fn from_stores(geometry_store: GeometryStore, note_store: NoteStore) -> Self {
        Self {
            phase: ShellPhase::Starting,
            geometry_store,
            note_store,
            preserve_note_file: false,
        }
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    /// Load the note text and saved geometry and enter `Running`.
    ///
    /// Load failures degrade to defaults so the window still opens; they are
    /// logged and returned in [`StartupState`].
    pub fn start(&mut self) -> StartupState {
        if self.phase != ShellPhase::Starting {
            tracing::warn!(
                event = "core.shell.start_ignored",
                phase = ?self.phase,
                "start called after startup; state not reloaded"
            );
            return StartupState::default();
        }

        let mut state = StartupState::default();

        match self.note_store.load() {
            Ok(text) => state.text = text,
            Err(e) => {
                tracing::error!(
                    event = "core.shell.note_load_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                self.preserve_note_file = true;
                state.note_error = Some(e);
            }
        }

        match self.geometry_store.load() {
            Ok(geometry) => state.geometry = geometry,
            Err(e) => {
                log_geometry_load_error(&e);
                state.geometry_error = Some(e);
            }
        }

        self.phase = ShellPhase::Running;

        tracing::info!(
            event = "core.shell.started",
            note_bytes = state.text.len(),
            has_geometry = state.geometry.is_some()
        );

        state
    }

    /// Handle the user's close request by persisting `geometry`.
    ///
    /// Returns `Ok(true)` when geometry was written and `Ok(false)` when the
    /// request was ignored because close was already handled. The phase
    /// advances even when the write fails so shutdown is never blocked.
    pub fn close_requested(&mut self, geometry: WindowGeometry) -> Result<bool, GeometryError> {
        if self.phase != ShellPhase::Running {
            tracing::debug!(
                event = "core.shell.close_request_ignored",
                phase = ?self.phase
            );
            return Ok(false);
        }

        self.phase = ShellPhase::Closing;

        match self.geometry_store.save(geometry) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::error!(
                    event = "core.shell.geometry_save_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                Err(e)
            }
        }
    }

    /// Handle window destruction by persisting the note `text`.
    ///
    /// Returns `Ok(true)` when the note was written and `Ok(false)` when
    /// destroy was already handled or startup never ran.
    pub fn destroyed(&mut self, text: &str) -> Result<bool, NoteError> {
        match self.phase {
            ShellPhase::Running | ShellPhase::Closing => {}
            ShellPhase::Starting | ShellPhase::Closed => {
                tracing::debug!(event = "core.shell.destroy_ignored", phase = ?self.phase);
                return Ok(false);
            }
        }

        self.phase = ShellPhase::Closed;

        if self.preserve_note_file {
            let e = NoteError::PreservedUnreadable {
                path: self.note_store.path().display().to_string(),
            };
            tracing::error!(
                event = "core.shell.note_save_skipped",
                error = %e,
                error_code = e.error_code()
            );
            return Err(e);
        }

        match self.note_store.save(text) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::error!(
                    event = "core.shell.note_save_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                Err(e)
            }
        }
    }
}

fn log_geometry_load_error(e: &GeometryError) {
    if e.is_user_error() {
        tracing::warn!(
            event = "core.shell.geometry_load_failed",
            error = %e,
            error_code = e.error_code(),
            "Ignoring saved geometry; using default placement"
        );
    } else {
        tracing::error!(
            event = "core.shell.geometry_load_failed",
            error = %e,
            error_code = e.error_code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell_in(dir: &TempDir) -> Shell {
        Shell::new(&StatePaths::in_dir(dir.path()))
    }

    #[test]
    fn test_new_shell_is_starting() {
        let dir = TempDir::new().unwrap();
        assert_eq!(shell_in(&dir).phase(), ShellPhase::Starting);
    }

    #[test]
    fn test_start_with_no_files() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir);

        let state = shell.start();

        assert_eq!(state.text, "");
        assert_eq!(state.geometry, None);
        assert!(!state.has_errors());
        assert_eq!(shell.phase(), ShellPhase::Running);
    }

    #[test]
    fn test_start_twice_does_not_reload() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        std::fs::write(&paths.note_file, "first").unwrap();
        let mut shell = Shell::new(&paths);

        assert_eq!(shell.start().text, "first");
        assert_eq!(shell.start().text, "");
        assert_eq!(shell.phase(), ShellPhase::Running);
    }

    #[test]
    fn test_close_request_saves_geometry_once() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        let mut shell = Shell::new(&paths);
        shell.start();

        assert!(shell.close_requested(WindowGeometry::new(1, 2, 3, 4)).unwrap());
        assert!(!shell.close_requested(WindowGeometry::new(9, 9, 9, 9)).unwrap());

        assert_eq!(shell.phase(), ShellPhase::Closing);
        assert_eq!(
            std::fs::read_to_string(&paths.geometry_file).unwrap(),
            "1 2 3 4"
        );
    }

    #[test]
    fn test_destroy_saves_note_once() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        let mut shell = Shell::new(&paths);
        shell.start();
        shell.close_requested(WindowGeometry::new(1, 2, 3, 4)).unwrap();

        assert!(shell.destroyed("buy milk").unwrap());
        assert!(!shell.destroyed("something else").unwrap());

        assert_eq!(shell.phase(), ShellPhase::Closed);
        assert_eq!(
            std::fs::read_to_string(&paths.note_file).unwrap(),
            "buy milk"
        );
    }

    #[test]
    fn test_destroy_without_close_request_skips_geometry() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        let mut shell = Shell::new(&paths);
        shell.start();

        assert!(shell.destroyed("note").unwrap());

        assert_eq!(shell.phase(), ShellPhase::Closed);
        assert!(paths.note_file.exists());
        assert!(!paths.geometry_file.exists());
        // Close after destroy is too late to matter
        assert!(!shell.close_requested(WindowGeometry::new(1, 2, 3, 4)).unwrap());
        assert!(!paths.geometry_file.exists());
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        let mut shell = Shell::new(&paths);

        assert!(!shell.close_requested(WindowGeometry::new(1, 2, 3, 4)).unwrap());
        assert!(!shell.destroyed("text").unwrap());

        assert_eq!(shell.phase(), ShellPhase::Starting);
        assert!(!paths.geometry_file.exists());
        assert!(!paths.note_file.exists());
    }

    #[test]
    fn test_malformed_geometry_reported_and_ignored() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        std::fs::write(&paths.geometry_file, "10 20 abc 400").unwrap();
        let mut shell = Shell::new(&paths);

        let state = shell.start();

        assert_eq!(state.geometry, None);
        assert!(matches!(
            state.geometry_error,
            Some(GeometryError::Malformed { .. })
        ));
        assert_eq!(shell.phase(), ShellPhase::Running);
    }

    #[test]
    fn test_unreadable_note_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let paths = StatePaths::in_dir(dir.path());
        std::fs::write(&paths.note_file, [0xff, 0xfe]).unwrap();
        let mut shell = Shell::new(&paths);

        let state = shell.start();
        assert!(matches!(state.note_error, Some(NoteError::ReadFailed { .. })));

        let err = shell.destroyed("replacement").unwrap_err();
        assert!(matches!(err, NoteError::PreservedUnreadable { .. }));
        assert_eq!(std::fs::read(&paths.note_file).unwrap(), vec![0xff, 0xfe]);
        assert_eq!(shell.phase(), ShellPhase::Closed);
    }

    #[test]
    fn test_geometry_save_failure_still_advances() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut shell = Shell::from_stores(
            GeometryStore::new(blocker.join("window.cfg")),
            NoteStore::new(dir.path().join("note.txt")),
        );
        shell.start();

        assert!(shell.close_requested(WindowGeometry::new(1, 2, 3, 4)).is_err());
        assert_eq!(shell.phase(), ShellPhase::Closing);
        assert!(shell.destroyed("still saved").unwrap());
    }
}
