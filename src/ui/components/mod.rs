//! Reusable UI Components
//!
//! - `StatusIndicator` - Loading spinner, error line and quoted fact
//! - `Button` - Bordered button with disabled and hover states

mod button;
mod status_indicator;

pub use button::{
    button_rect, refresh_label, render_button, ButtonConfig, BUTTON_HEIGHT, LABEL_BUSY, LABEL_IDLE,
};
pub use status_indicator::{
    quoted_fact, render_status_indicator, render_status_lines, StatusIndicatorType,
    LOADING_MESSAGE,
};
