use std::path::{Path, PathBuf};

use super::errors::GeometryError;
use super::types::WindowGeometry;

/// Reads and writes the window geometry file.
#[derive(Debug, Clone)]
pub struct GeometryStore {
    path: PathBuf,
}

impl GeometryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the geometry file with `x y width height`.
    ///
    /// Creates the parent directory when it does not exist yet.
    pub fn save(&self, geometry: WindowGeometry) -> Result<(), GeometryError> {
        let write_failed = |source| GeometryError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }

        std::fs::write(&self.path, geometry.to_string()).map_err(write_failed)?;

        tracing::info!(
            event = "core.geometry.saved",
            path = %self.path.display(),
            x = geometry.x,
            y = geometry.y,
            width = geometry.width,
            height = geometry.height
        );

        Ok(())
    }

    /// Load the saved geometry.
    ///
    /// Returns `Ok(None)` when no geometry has been saved yet, so the caller
    /// keeps the default placement. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load(&self) -> Result<Option<WindowGeometry>, GeometryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    event = "core.geometry.not_found",
                    path = %self.path.display()
                );
                return Ok(None);
            }
            Err(source) => {
                return Err(GeometryError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        let geometry =
            content
                .parse::<WindowGeometry>()
                .map_err(|source| GeometryError::Malformed {
                    path: self.path.display().to_string(),
                    source,
                })?;

        tracing::debug!(
            event = "core.geometry.loaded",
            path = %self.path.display(),
            geometry = %geometry
        );

        Ok(Some(geometry))
    }
}
