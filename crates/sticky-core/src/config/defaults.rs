//! Default values for configuration types.

use crate::config::types::WindowConfig;

pub const DEFAULT_WIDTH: u32 = 200;
pub const DEFAULT_HEIGHT: u32 = 200;
pub const DEFAULT_TITLE: &str = "Sticky Notes";
/// Pale yellow.
pub const DEFAULT_BACKGROUND: u32 = 0xfff59d;

impl WindowConfig {
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Background color as `0xrrggbb`.
    ///
    /// Falls back to the default when the configured value does not parse;
    /// [`super::validate_config`] reports that case at load time.
    pub fn background_rgb(&self) -> u32 {
        self.background
            .as_deref()
            .and_then(|value| super::parse_hex_color(value).ok())
            .unwrap_or(DEFAULT_BACKGROUND)
    }

    pub fn sticky(&self) -> bool {
        self.sticky.unwrap_or(true)
    }

    pub fn skip_taskbar(&self) -> bool {
        self.skip_taskbar.unwrap_or(true)
    }
}
