//! Placement helpers for overlays.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    rect
}

/// A popup hanging below `anchor`, flipped above it when there is no room,
/// and clamped inside `bounds`.
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let below = anchor.bottom();
    let y = if below.saturating_add(height) <= bounds.bottom() {
        below
    } else if anchor.y.saturating_sub(bounds.y) >= height {
        anchor.y - height
    } else {
        bounds.bottom().saturating_sub(height)
    };
    let x = anchor
        .x
        .min(bounds.right().saturating_sub(width))
        .max(bounds.x);
    Rect::new(x, y, width, height)
}
