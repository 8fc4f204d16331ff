//! Colors and spacing for the note window.

/// Note text.
pub const TEXT: u32 = 0x212121;

/// Horizontal text margin inside the note, in pixels.
pub const TEXT_MARGIN: f32 = 8.0;
/// Vertical padding above and below the text, in pixels.
pub const TEXT_PADDING_Y: f32 = 4.0;
