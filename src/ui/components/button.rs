//! Button Component
//!
//! A bordered, centered label that can be disabled. Disabled buttons render
//! dimmed and register no hit area.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_BUTTON, COLOR_BUTTON_HOVER_BG, COLOR_DIM};

/// Label while idle
pub const LABEL_IDLE: &str = "Get New Fact";

/// Label while a fetch is in flight
pub const LABEL_BUSY: &str = "Fetching...";

/// Button height including borders
pub const BUTTON_HEIGHT: u16 = 3;

/// Horizontal padding on each side of the label, inside the border
const PADDING: u16 = 2;

/// Configuration for rendering a button
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig<'a> {
    /// Label text
    pub label: &'a str,
    /// Whether the button reacts to clicks
    pub enabled: bool,
    /// Action registered for clicks when enabled
    pub action: ClickAction,
}

/// Label of the refresh button for the given loading flag.
pub fn refresh_label(loading: bool) -> &'static str {
    if loading {
        LABEL_BUSY
    } else {
        LABEL_IDLE
    }
}

/// Width a button needs for `label`.
pub fn button_width(label: &str) -> u16 {
    let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    label_width.saturating_add(2 * PADDING + 2)
}

/// Rect of a button centered horizontally at the top of `area`.
pub fn button_rect(area: Rect, label: &str) -> Rect {
    let width = button_width(label).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    }
}

/// Render the button in `area` and return the rect it occupies.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    config: &ButtonConfig,
    hit_areas: &mut HitAreaRegistry,
) -> Rect {
    let rect = button_rect(area, config.label);

    let mut style = if config.enabled {
        Style::default().fg(COLOR_BUTTON).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    if config.enabled {
        if let Some(hover) = hit_areas.hover_style_for(rect) {
            style = style.patch(hover);
        }
        hit_areas.register(
            rect,
            config.action,
            Some(Style::default().bg(COLOR_BUTTON_HOVER_BG)),
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);

    let paragraph = Paragraph::new(Span::styled(config.label.to_string(), style))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, rect);
    rect
}
