use sticky_core::errors::StickyError;
use thiserror::Error;

use crate::overlay::OverlayError;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Failed to open note window: {message}")]
    OpenFailed { message: String },

    #[error("Note window was closed during startup")]
    WindowGone,

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}

impl StickyError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::OpenFailed { .. } => "WINDOW_OPEN_FAILED",
            WindowError::WindowGone => "WINDOW_GONE",
            WindowError::Overlay(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            WindowError::Overlay(e) => e.is_user_error(),
            WindowError::OpenFailed { .. } | WindowError::WindowGone => false,
        }
    }
}
