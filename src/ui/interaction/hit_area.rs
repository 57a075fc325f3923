//! Clickable regions.
//!
//! Components register hit areas while rendering; the event loop hit-tests
//! mouse events against the registry from the last frame.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// An action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Activate the refresh control
    Refresh,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas drawn in the current frame.
///
/// Later registrations sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    hovered: Option<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render.
    ///
    /// Hover state survives so a hovered button keeps its style across frames
    /// until the mouse moves.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.find_index(x, y).map(|idx| self.areas[idx].clone());
        let changed = hovered.as_ref().map(|a| a.rect) != self.hovered.as_ref().map(|a| a.rect);
        self.hovered = hovered;
        changed
    }

    /// Hover style for `rect` if the mouse is currently over it.
    pub fn hover_style_for(&self, rect: Rect) -> Option<Style> {
        self.hovered
            .as_ref()
            .filter(|area| area.rect == rect)
            .and_then(|area| area.hover_style)
    }

    /// Whether the mouse was over an area when last tracked.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_contains_edges() {
        let area = HitArea {
            rect: Rect::new(10, 5, 4, 3),
            action: ClickAction::Refresh,
            hover_style: None,
        };
        assert!(area.contains(10, 5));
        assert!(area.contains(13, 7));
        assert!(!area.contains(14, 5));
        assert!(!area.contains(10, 8));
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_hit_test() {
        let mut registry = HitAreaRegistry::new();
        assert!(registry.is_empty());
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::Refresh, None);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(3, 0), Some(ClickAction::Refresh));
        assert_eq!(registry.hit_test(3, 1), None);
    }

    #[test]
    fn test_clear_removes_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), ClickAction::Refresh, None);
        registry.clear();
        assert_eq!(registry.hit_test(3, 0), None);
    }

    #[test]
    fn test_hover_tracking() {
        let rect = Rect::new(2, 2, 6, 1);
        let hover = Style::default().bg(Color::Blue);
        let mut registry = HitAreaRegistry::new();
        registry.register(rect, ClickAction::Refresh, Some(hover));

        assert!(registry.update_hover(3, 2));
        assert!(registry.is_hovering());
        assert_eq!(registry.hover_style_for(rect), Some(hover));
        assert_eq!(registry.hover_style_for(Rect::new(0, 0, 1, 1)), None);

        // Same area again: no change
        assert!(!registry.update_hover(4, 2));

        assert!(registry.update_hover(0, 0));
        assert!(!registry.is_hovering());
        assert_eq!(registry.hover_style_for(rect), None);
    }
}
