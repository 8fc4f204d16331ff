//! Configuration type definitions.
//!
//! Every field is optional so that a partial file only overrides what it
//! names; the accessors in [`super::defaults`] fill in the rest.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! width = 200
//! height = 200
//! title = "Sticky Notes"
//! background = "#fff59d"
//! sticky = true
//! skip_taskbar = true
//!
//! [storage]
//! dir = "/home/me/notes"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StickyConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Appearance and window-manager behavior of the note window.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WindowConfig {
    /// Initial width in pixels when no geometry has been saved. Default: 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Initial height in pixels when no geometry has been saved. Default: 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Window title. Default: "Sticky Notes".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Background color as `#rrggbb`. Default: `#fff59d`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Show the note on every workspace. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,

    /// Keep the note out of taskbars and pagers. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_taskbar: Option<bool>,
}

/// Where the note and geometry files live.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory holding `note.txt` and `window.cfg`.
    /// Default: the current working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}
