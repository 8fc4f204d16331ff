use sticky_core::errors::StickyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Window is running on the {backend} backend; the overlay needs X11")]
    UnsupportedPlatform { backend: &'static str },

    #[error("Window handle unavailable: {message}")]
    HandleUnavailable { message: String },

    #[error("Failed to connect to the X server: {0}")]
    Connect(#[from] x11rb::errors::ConnectError),

    #[error("X11 connection failed: {0}")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("X11 request failed: {0}")]
    Reply(#[from] x11rb::errors::ReplyError),
}

impl StickyError for OverlayError {
    fn error_code(&self) -> &'static str {
        match self {
            OverlayError::UnsupportedPlatform { .. } => "OVERLAY_UNSUPPORTED_PLATFORM",
            OverlayError::HandleUnavailable { .. } => "OVERLAY_HANDLE_UNAVAILABLE",
            OverlayError::Connect(_) => "OVERLAY_CONNECT_FAILED",
            OverlayError::Connection(_) => "OVERLAY_CONNECTION_FAILED",
            OverlayError::Reply(_) => "OVERLAY_REQUEST_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Running under a non-X11 session is something the user can change.
        matches!(self, OverlayError::UnsupportedPlatform { .. })
    }
}
