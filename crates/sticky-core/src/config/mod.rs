//! # Configuration System
//!
//! Hierarchical TOML configuration for Sticky.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.sticky/config.toml`
//! 3. **Local config** - `./.sticky/config.toml`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.sticky/config.toml
//! [window]
//! width = 240
//! height = 180
//! background = "#fff59d"
//!
//! [storage]
//! dir = "/home/me/.local/share/sticky"
//! ```
//!
//! ```rust,no_run
//! use sticky_core::config::{StatePaths, StickyConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StickyConfig::load_hierarchy()?;
//!     let paths = StatePaths::resolve(&config);
//!     println!("note lives at {}", paths.note_file.display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod paths;
pub mod types;
pub mod validation;

pub use paths::StatePaths;
pub use types::{StickyConfig, StorageConfig, WindowConfig};
pub use validation::{parse_hex_color, validate_config};

impl StickyConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
