//! Color theme constants for the fact view.

use ratatui::style::Color;

/// Card border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Heading color - indigo
pub const COLOR_HEADER: Color = Color::Rgb(129, 140, 248);

/// Fact text color
pub const COLOR_FACT: Color = Color::White;

/// Loading message and spinner
pub const COLOR_LOADING: Color = Color::Gray;

/// Error message color
pub const COLOR_ERROR: Color = Color::Rgb(248, 113, 113);

/// Dim text for hints and disabled controls
pub const COLOR_DIM: Color = Color::DarkGray;

/// Enabled button border and label
pub const COLOR_BUTTON: Color = Color::Rgb(99, 102, 241);

/// Button background while hovered
pub const COLOR_BUTTON_HOVER_BG: Color = Color::Rgb(49, 46, 129);
