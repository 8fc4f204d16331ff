//! Note window lifecycle.
//!
//! The GUI drives a [`Shell`] through three callbacks: startup, the user's
//! close request, and the final destroy. The shell decides what gets loaded
//! and persisted at each step so the rules can be tested without a window.

pub mod lifecycle;
pub mod types;

pub use lifecycle::Shell;
pub use types::{ShellPhase, StartupState};
