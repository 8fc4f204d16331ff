use crate::config::types::StickyConfig;
use crate::errors::ConfigError;

/// Parse a `#rrggbb` color into `0xrrggbb`.
pub fn parse_hex_color(value: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    u32::from_str_radix(hex, 16).map_err(|_| invalid())
}

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns an error for a zero width/height, an unparseable background
/// color, or an empty storage directory.
pub fn validate_config(config: &StickyConfig) -> Result<(), ConfigError> {
    if config.window.width == Some(0) || config.window.height == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "window width and height must be greater than 0".to_string(),
        });
    }

    if let Some(ref background) = config.window.background {
        parse_hex_color(background)?;
    }

    if let Some(ref dir) = config.storage.dir
        && dir.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "storage.dir must not be empty".to_string(),
        });
    }

    Ok(())
}
