use crate::errors::StickyError;

use super::types::ParseGeometryError;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Failed to read geometry file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write geometry file '{path}': {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Geometry file '{path}' is malformed: {source}")]
    Malformed {
        path: String,
        source: ParseGeometryError,
    },
}

impl StickyError for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            GeometryError::ReadFailed { .. } => "GEOMETRY_READ_FAILED",
            GeometryError::WriteFailed { .. } => "GEOMETRY_WRITE_FAILED",
            GeometryError::Malformed { .. } => "GEOMETRY_MALFORMED",
        }
    }

    fn is_user_error(&self) -> bool {
        // A hand-edited file is the usual cause of malformed geometry.
        matches!(self, GeometryError::Malformed { .. })
    }
}
