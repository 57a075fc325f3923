//! Responsive Layout
//!
//! `LayoutContext` wraps the terminal size and answers the few sizing
//! questions the fact view has: how wide the content column is, how tall,
//! and whether the terminal is too small to draw anything useful.

use ratatui::layout::Rect;

/// Smallest terminal width the view renders into.
pub const MIN_TERMINAL_WIDTH: u16 = 30;

/// Smallest terminal height the view renders into.
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Widest the content column gets.
pub const MAX_COLUMN_WIDTH: u16 = 64;

/// Tallest the content column gets.
pub const MAX_COLUMN_HEIGHT: u16 = 18;

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from a frame area.
    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// The result never exceeds the terminal width.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    /// Whether the terminal is below the minimum usable size.
    pub fn is_too_small(&self) -> bool {
        self.width < MIN_TERMINAL_WIDTH || self.height < MIN_TERMINAL_HEIGHT
    }

    /// Whether the terminal is narrow enough to use the whole width.
    pub fn is_narrow(&self) -> bool {
        self.width < 60
    }

    /// Width of the content column.
    pub fn column_width(&self) -> u16 {
        if self.is_narrow() {
            self.width.saturating_sub(2).max(1)
        } else {
            self.bounded_width(60, MIN_TERMINAL_WIDTH, MAX_COLUMN_WIDTH)
        }
    }

    /// Height of the content column.
    pub fn column_height(&self) -> u16 {
        self.height.min(MAX_COLUMN_HEIGHT)
    }

    /// Content column centered within `area`.
    pub fn column_rect(&self, area: Rect) -> Rect {
        centered_rect(area, self.column_width(), self.column_height())
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
