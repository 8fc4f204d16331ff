//! View components for the note window.
//!
//! - `note_view` - Root view holding the editor and the window lifecycle

pub mod note_view;

pub use note_view::NoteView;
