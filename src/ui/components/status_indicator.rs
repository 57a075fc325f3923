//! Status Indicator Component
//!
//! Turns a [`ViewState`] into the lines of the status/result area: a spinner
//! with the loading message, the error line, and the quoted fact. Each part
//! is shown independently according to the view's rendering rule.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ERROR, COLOR_FACT, COLOR_LOADING};
use crate::view_state::ViewState;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Loading message text
pub const LOADING_MESSAGE: &str = "Loading a new fact...";

/// One visible element of the status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinner with the loading message
    Loading {
        /// Current frame index (wraps)
        frame: usize,
    },
    /// Error message
    Error {
        /// Message from the view state
        message: String,
    },
    /// Fetched fact
    Fact {
        /// Fact text, unquoted
        text: String,
    },
}

impl StatusIndicatorType {
    /// Indicators visible for `state`, in display order.
    pub fn from_view(state: &ViewState, frame: usize) -> Vec<Self> {
        let mut indicators = Vec::new();
        if state.shows_loading() {
            indicators.push(Self::Loading { frame });
        }
        if let Some(message) = state.visible_error() {
            indicators.push(Self::Error {
                message: message.to_string(),
            });
        }
        if let Some(text) = state.visible_fact() {
            indicators.push(Self::Fact {
                text: text.to_string(),
            });
        }
        indicators
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Text of the fact line: the fact in double quotes.
pub fn quoted_fact(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Render one indicator as a line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Loading { frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(LOADING_MESSAGE, Style::default().fg(COLOR_LOADING)),
        ]),
        StatusIndicatorType::Error { message } => Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(COLOR_ERROR),
        )),
        StatusIndicatorType::Fact { text } => Line::from(Span::styled(
            quoted_fact(text),
            Style::default().fg(COLOR_FACT).add_modifier(Modifier::BOLD),
        )),
    }
}

/// Render every visible indicator for `state`.
pub fn render_status_lines(state: &ViewState, frame: usize) -> Vec<Line<'static>> {
    StatusIndicatorType::from_view(state, frame)
        .iter()
        .map(render_status_indicator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::Fact;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_spinner_frames() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(3), '◒');
        assert_eq!(get_spinner_char(4), '◐'); // Wraps around
    }

    #[test]
    fn test_loading_only() {
        let state = ViewState::new();
        let indicators = StatusIndicatorType::from_view(&state, 0);
        assert_eq!(indicators, vec![StatusIndicatorType::Loading { frame: 0 }]);

        let lines = render_status_lines(&state, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "◓ Loading a new fact...");
    }

    #[test]
    fn test_fact_is_quoted_exactly() {
        let mut state = ViewState::new();
        state.settle(Ok(Fact {
            fact: "Cats sleep 70% of their lives.".to_string(),
            length: Some(30),
        }));

        let lines = render_status_lines(&state, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "\"Cats sleep 70% of their lives.\"");
    }

    #[test]
    fn test_error_line() {
        let mut state = ViewState::new();
        state.settle(Err(FetchError::HttpStatus { status: 404 }));

        let lines = render_status_lines(&state, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            line_text(&lines[0]),
            "Error: Failed to load fact: HTTP error! status: 404."
        );
    }

    #[test]
    fn test_each_part_follows_its_own_rule() {
        let state = ViewState {
            fact: Some("hidden".to_string()),
            loading: true,
            error: Some("boom".to_string()),
        };
        let indicators = StatusIndicatorType::from_view(&state, 2);
        assert_eq!(
            indicators,
            vec![
                StatusIndicatorType::Loading { frame: 2 },
                StatusIndicatorType::Error {
                    message: "boom".to_string()
                },
            ]
        );
    }
}
