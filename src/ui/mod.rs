//! UI rendering for the fact view.
//!
//! Layout, top to bottom inside a centered column:
//! - Heading
//! - Card with the status/result area and the refresh button
//! - Key hints
//!
//! Rendering is a pure function of the [`ViewState`] plus the spinner tick;
//! the only side effect is registering the button's hit area.

pub mod components;
pub mod interaction;
mod layout;
pub mod theme;

pub use layout::{
    centered_rect, LayoutContext, MAX_COLUMN_HEIGHT, MAX_COLUMN_WIDTH, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::view_state::ViewState;
use components::{refresh_label, render_button, render_status_lines, ButtonConfig, BUTTON_HEIGHT};
use interaction::{ClickAction, HitAreaRegistry};
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Heading text
pub const HEADING: &str = "Random Cat Fact";

/// Footer key hints
pub const KEY_HINTS: &str = "r/Enter: new fact  ·  q: quit";

/// Render the app.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    render_view(
        frame,
        area,
        &app.state,
        app.tick_count as usize,
        &mut app.hit_areas,
    );
}

/// Render `state` into `area`, registering clickable regions in `hit_areas`.
pub fn render_view(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    spinner_frame: usize,
    hit_areas: &mut HitAreaRegistry,
) {
    hit_areas.clear();

    let ctx = LayoutContext::from_rect(area);
    if ctx.is_too_small() {
        render_too_small(frame, area);
        return;
    }

    let column = ctx.column_rect(area);
    let [heading_area, _, card_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(BUTTON_HEIGHT + 3),
        Constraint::Length(1),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Span::styled(
            HEADING,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        heading_area,
    );

    render_card(frame, card_area, state, spinner_frame, hit_areas);

    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        hints_area,
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    spinner_frame: usize,
    hit_areas: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status_area, button_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(BUTTON_HEIGHT)]).areas(inner);

    let lines = render_status_lines(state, spinner_frame);
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, status_area);

    let button = ButtonConfig {
        label: refresh_label(state.loading),
        enabled: state.can_refresh(),
        action: ClickAction::Refresh,
    };
    render_button(frame, button_area, &button, hit_areas);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(Line::from(Span::styled(
        format!(
            "Terminal too small (min {}x{})",
            MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
        ),
        Style::default().fg(COLOR_DIM),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::Fact;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &ViewState, width: u16, height: u16) -> (String, HitAreaRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hit_areas = HitAreaRegistry::new();
        terminal
            .draw(|f| render_view(f, f.area(), state, 0, &mut hit_areas))
            .unwrap();
        (buffer_text(terminal.backend().buffer()), hit_areas)
    }

    #[test]
    fn test_render_loading() {
        let (text, hit_areas) = draw(&ViewState::new(), 80, 24);
        assert!(text.contains(HEADING));
        assert!(text.contains("Loading a new fact..."));
        assert!(text.contains("Fetching..."));
        assert!(!text.contains("Get New Fact"));
        assert!(hit_areas.is_empty());
    }

    #[test]
    fn test_render_fact() {
        let mut state = ViewState::new();
        state.settle(Ok(Fact {
            fact: "Cats sleep 70% of their lives.".to_string(),
            length: Some(30),
        }));
        let (text, hit_areas) = draw(&state, 80, 24);
        assert!(text.contains("\"Cats sleep 70% of their lives.\""));
        assert!(text.contains("Get New Fact"));
        assert!(!text.contains("Loading"));
        assert_eq!(hit_areas.len(), 1);
    }

    #[test]
    fn test_render_error() {
        let mut state = ViewState::new();
        state.settle(Err(FetchError::HttpStatus { status: 500 }));
        let (text, _) = draw(&state, 100, 24);
        assert!(text.contains("Error: Failed to load fact: HTTP error! status: 500."));
        assert!(text.contains("Get New Fact"));
    }

    #[test]
    fn test_render_too_small() {
        let (text, hit_areas) = draw(&ViewState::new(), 20, 5);
        assert!(text.contains("Terminal"));
        assert!(!text.contains(HEADING));
        assert!(hit_areas.is_empty());
    }
}
