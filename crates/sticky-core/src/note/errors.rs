use crate::errors::StickyError;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Failed to read note file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write note file '{path}': {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Note file '{path}' could not be read at startup; refusing to overwrite it")]
    PreservedUnreadable { path: String },
}

impl StickyError for NoteError {
    fn error_code(&self) -> &'static str {
        match self {
            NoteError::ReadFailed { .. } => "NOTE_READ_FAILED",
            NoteError::WriteFailed { .. } => "NOTE_WRITE_FAILED",
            NoteError::PreservedUnreadable { .. } => "NOTE_PRESERVED_UNREADABLE",
        }
    }
}
