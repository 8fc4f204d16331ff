//! sticky-core: Core library for the Sticky desktop note
//!
//! Owns everything that does not need a window: reading and writing the note
//! text and window geometry, configuration, and the shutdown lifecycle that
//! decides when each piece of state is persisted. Used by `sticky-ui`.
//!
//! # Main Entry Points
//!
//! - [`geometry`] - Window position and size persistence
//! - [`note`] - Note text persistence
//! - [`shell`] - Startup/close/destroy lifecycle
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod geometry;
pub mod logging;
pub mod note;
pub mod shell;

// Re-export commonly used types at crate root for convenience
pub use config::{StatePaths, StickyConfig};
pub use errors::{ConfigError, StickyError};
pub use geometry::{GeometryError, GeometryStore, WindowGeometry};
pub use note::{NoteError, NoteStore};
pub use shell::{Shell, ShellPhase, StartupState};

pub use logging::init_logging;
