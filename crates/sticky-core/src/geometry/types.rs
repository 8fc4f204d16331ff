use std::fmt;
use std::str::FromStr;

/// On-screen position and size of the note window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Reason a geometry string could not be parsed.
///
/// Kept separate from [`super::GeometryError`] so parsing stays independent of
/// where the text came from; the store attaches the file path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGeometryError {
    #[error("expected 4 integers, found {found}")]
    WrongTokenCount { found: usize },

    #[error("'{token}' is not an integer")]
    NotAnInteger { token: String },

    #[error("size {width}x{height} is not positive")]
    NonPositiveSize { width: i32, height: i32 },
}

impl FromStr for WindowGeometry {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [x, y, width, height] = tokens.as_slice() else {
            return Err(ParseGeometryError::WrongTokenCount {
                found: tokens.len(),
            });
        };

        let parse = |token: &str| {
            token
                .parse::<i32>()
                .map_err(|_| ParseGeometryError::NotAnInteger {
                    token: token.to_string(),
                })
        };

        let geometry = WindowGeometry::new(
            parse(*x)?,
            parse(*y)?,
            parse(*width)?,
            parse(*height)?,
        );

        // Origins may be negative on multi-monitor layouts; sizes may not.
        if geometry.width <= 0 || geometry.height <= 0 {
            return Err(ParseGeometryError::NonPositiveSize {
                width: geometry.width,
                height: geometry.height,
            });
        }

        Ok(geometry)
    }
}
