use crate::geometry::{GeometryError, WindowGeometry};
use crate::note::NoteError;

/// Lifecycle phase of the note window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    /// State not loaded yet.
    Starting,
    /// Event loop is dispatching input.
    Running,
    /// Close was requested and geometry persisted; waiting for destroy.
    Closing,
    /// Note persisted; the event loop may stop.
    Closed,
}

/// What the window needs to apply at startup.
#[derive(Debug, Default)]
pub struct StartupState {
    /// Text for the editor. Empty when nothing was saved.
    pub text: String,
    /// Saved placement, or `None` to keep the toolkit default.
    pub geometry: Option<WindowGeometry>,
    /// Set when a geometry file exists but could not be used.
    pub geometry_error: Option<GeometryError>,
    /// Set when a note file exists but could not be read.
    pub note_error: Option<NoteError>,
}

impl StartupState {
    pub fn has_errors(&self) -> bool {
        self.geometry_error.is_some() || self.note_error.is_some()
    }
}
