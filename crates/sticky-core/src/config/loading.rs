//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.sticky/config.toml`
//! 3. **Local config** - `./.sticky/config.toml`

use crate::config::types::{StickyConfig, StorageConfig, WindowConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation of the merged result fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<StickyConfig, ConfigError> {
    let mut sources = Vec::new();

    match dirs::home_dir() {
        Some(home) => sources.push(home.join(".sticky").join("config.toml")),
        None => tracing::warn!(
            event = "core.config.home_dir_not_found",
            "Could not determine home directory - skipping user config"
        ),
    }

    match std::env::current_dir() {
        Ok(cwd) => sources.push(cwd.join(".sticky").join("config.toml")),
        Err(e) => tracing::warn!(
            event = "core.config.cwd_unavailable",
            error = %e,
            "Could not determine current directory - skipping local config"
        ),
    }

    load_from_paths(&sources)
}

/// Load and merge the given config files in order, then validate.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<StickyConfig, ConfigError> {
    let mut config = StickyConfig::default();

    for path in paths {
        if let Some(file_config) = load_config_file(path)? {
            tracing::debug!(event = "core.config.loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` when it does not exist.
fn load_config_file(path: &Path) -> Result<Option<StickyConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Fields only replace base values when the override sets them.
pub fn merge_configs(base: StickyConfig, override_config: StickyConfig) -> StickyConfig {
    StickyConfig {
        window: WindowConfig {
            width: override_config.window.width.or(base.window.width),
            height: override_config.window.height.or(base.window.height),
            title: override_config.window.title.or(base.window.title),
            background: override_config.window.background.or(base.window.background),
            sticky: override_config.window.sticky.or(base.window.sticky),
            skip_taskbar: override_config
                .window
                .skip_taskbar
                .or(base.window.skip_taskbar),
        },
        storage: StorageConfig {
            dir: override_config.storage.dir.or(base.storage.dir),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_merge_override_wins_when_set() {
        let base = StickyConfig {
            window: WindowConfig {
                width: Some(300),
                title: Some("Base".to_string()),
                ..Default::default()
            },
            storage: StorageConfig {
                dir: Some(PathBuf::from("/base")),
            },
        };
        let override_config = StickyConfig {
            window: WindowConfig {
                title: Some("Local".to_string()),
                sticky: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = merge_configs(base, override_config);

        assert_eq!(merged.window.width, Some(300));
        assert_eq!(merged.window.title.as_deref(), Some("Local"));
        assert_eq!(merged.window.sticky, Some(false));
        assert_eq!(merged.storage.dir, Some(PathBuf::from("/base")));
    }

    #[test]
    fn test_load_from_paths_missing_files_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_from_paths(&[
            dir.path().join("nope.toml"),
            dir.path().join("also-nope.toml"),
        ])
        .unwrap();
        assert_eq!(config, StickyConfig::default());
    }

    #[test]
    fn test_load_from_paths_later_file_overrides() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user.toml");
        let local = dir.path().join("local.toml");
        fs::write(&user, "[window]\nwidth = 320\nheight = 240\n").unwrap();
        fs::write(&local, "[window]\nheight = 100\n").unwrap();

        let config = load_from_paths(&[user, local]).unwrap();

        assert_eq!(config.window.width(), 320);
        assert_eq!(config.window.height(), 100);
    }

    #[test]
    fn test_load_from_paths_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();

        let err = load_from_paths(&[path]).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_from_paths_validates_merged_result() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window]\nbackground = \"yellow\"\n").unwrap();

        let err = load_from_paths(&[path]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn test_load_from_paths_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::create_dir_all(&path).unwrap();

        let err = load_from_paths(&[path]).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }
}
