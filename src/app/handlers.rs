//! Message, keyboard and mouse handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AppMessage};
use crate::ui::interaction::ClickAction;

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::FactFetched { request_id, result } => {
                tracing::debug!(request_id, ok = result.is_ok(), "Fetch settled");
                self.state.settle(result);
            }
        }
    }

    /// Handle a key press.
    ///
    /// `r`, Enter and Space activate refresh; `q`, Esc and Ctrl+C quit.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Char(' ') => {
                self.refresh();
            }
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    self.handle_click(action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::Refresh => {
                tracing::debug!("Click: Refresh");
                self.refresh();
            }
        }
    }
}
