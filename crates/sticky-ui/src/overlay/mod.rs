//! "Always above" window-manager hints.
//!
//! Applied once, after the window is realized. Only X11 window managers
//! implementing EWMH are supported; any other backend is reported as
//! [`OverlayError::UnsupportedPlatform`] and left to the caller to treat as
//! fatal.

pub mod errors;
pub mod x11;

pub use errors::OverlayError;
pub use x11::{OverlayHandle, OverlayHints, apply};
