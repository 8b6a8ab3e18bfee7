//! Roving highlight plus committed selection over a fixed list of items.
//!
//! The highlight lives in a ratatui [`ListState`] so list-like widgets can
//! render it directly. Menus commit on `Confirmed`; tabs and radio groups set
//! `follows_highlight` so arrow keys commit immediately.

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextHighlighted,
    PreviousHighlighted,
    FirstHighlighted,
    LastHighlighted,
    Highlighted { index: usize },
    Confirmed,
    Selected { index: usize },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    state: ListState,
    selected: Option<usize>,
    disabled: Vec<bool>,
    wrap: bool,
    follows_highlight: bool,
}

impl Selection {
    /// `len` enabled items, wrapping navigation, nothing selected.
    pub fn new(len: usize) -> Self {
        let mut selection = Self {
            state: ListState::default(),
            selected: None,
            disabled: vec![false; len],
            wrap: true,
            follows_highlight: false,
        };
        selection.state.select(selection.first_enabled());
        selection
    }

    pub fn with_disabled(mut self, indices: &[usize]) -> Self {
        for &index in indices {
            if let Some(flag) = self.disabled.get_mut(index) {
                *flag = true;
            }
        }
        if self.state.selected().is_some_and(|i| self.is_disabled(i)) {
            self.state.select(self.first_enabled());
        }
        self
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        if self.is_enabled(index) {
            self.selected = Some(index);
            self.state.select(Some(index));
        }
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn follows_highlight(mut self, follows: bool) -> Self {
        self.follows_highlight = follows;
        self
    }

    pub fn len(&self) -> usize {
        self.disabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.get(index).copied().unwrap_or(true)
    }

    pub fn list_state(&self) -> &ListState {
        &self.state
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Returns the newly committed index when the selection changed.
    pub fn update(&mut self, message: Message) -> Option<usize> {
        let before = self.selected;
        match message {
            Message::NextHighlighted => self.move_highlight(true),
            Message::PreviousHighlighted => self.move_highlight(false),
            Message::FirstHighlighted => self.set_highlight(self.first_enabled()),
            Message::LastHighlighted => self.set_highlight(self.last_enabled()),
            Message::Highlighted { index } => {
                if self.is_enabled(index) {
                    self.set_highlight(Some(index));
                }
            }
            Message::Confirmed => {
                if let Some(index) = self.highlighted().filter(|&i| self.is_enabled(i)) {
                    self.selected = Some(index);
                }
            }
            Message::Selected { index } => {
                if self.is_enabled(index) {
                    self.selected = Some(index);
                    self.state.select(Some(index));
                }
            }
            Message::Cleared => self.selected = None,
        }
        if self.selected != before {
            self.selected
        } else {
            None
        }
    }

    fn is_enabled(&self, index: usize) -> bool {
        !self.is_disabled(index)
    }

    fn first_enabled(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_enabled(i))
    }

    fn last_enabled(&self) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.is_enabled(i))
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        self.state.select(index);
        if self.follows_highlight {
            if let Some(index) = index {
                self.selected = Some(index);
            }
        }
    }

    fn move_highlight(&mut self, forward: bool) {
        let len = self.len();
        let Some(current) = self.highlighted() else {
            let start = if forward {
                self.first_enabled()
            } else {
                self.last_enabled()
            };
            self.set_highlight(start);
            return;
        };
        let mut index = current;
        for _ in 0..len {
            index = match (forward, index) {
                (true, i) if i + 1 < len => i + 1,
                (true, _) if self.wrap => 0,
                (false, 0) if self.wrap => len - 1,
                (false, i) if i > 0 => i - 1,
                _ => return,
            };
            if self.is_enabled(index) {
                self.set_highlight(Some(index));
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_highlights_first_item() {
        let selection = Selection::new(3);
        assert_eq!(selection.highlighted(), Some(0));
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_empty_selection_has_no_highlight() {
        let mut selection = Selection::new(0);
        selection.update(Message::NextHighlighted);
        assert_eq!(selection.highlighted(), None);
        assert_eq!(selection.update(Message::Confirmed), None);
    }

    #[test]
    fn test_navigation_wraps_by_default() {
        let mut selection = Selection::new(3);
        selection.update(Message::PreviousHighlighted);
        assert_eq!(selection.highlighted(), Some(2));
        selection.update(Message::NextHighlighted);
        assert_eq!(selection.highlighted(), Some(0));
    }

    #[test]
    fn test_navigation_without_wrap_stops_at_edges() {
        let mut selection = Selection::new(2).wrap(false);
        selection.update(Message::PreviousHighlighted);
        assert_eq!(selection.highlighted(), Some(0));
        selection.update(Message::NextHighlighted);
        selection.update(Message::NextHighlighted);
        assert_eq!(selection.highlighted(), Some(1));
    }

    #[test]
    fn test_disabled_items_are_skipped() {
        let mut selection = Selection::new(4).with_disabled(&[0, 2]);
        assert_eq!(selection.highlighted(), Some(1));
        selection.update(Message::NextHighlighted);
        assert_eq!(selection.highlighted(), Some(3));
        selection.update(Message::NextHighlighted);
        assert_eq!(selection.highlighted(), Some(1));
        assert_eq!(selection.update(Message::Selected { index: 2 }), None);
        selection.update(Message::Highlighted { index: 0 });
        assert_eq!(selection.highlighted(), Some(1));
    }

    #[test]
    fn test_confirm_commits_highlight() {
        let mut selection = Selection::new(3);
        selection.update(Message::LastHighlighted);
        assert_eq!(selection.update(Message::Confirmed), Some(2));
        assert_eq!(selection.update(Message::Confirmed), None);
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn test_follows_highlight_commits_on_move() {
        let mut selection = Selection::new(3).follows_highlight(true).with_selected(0);
        assert_eq!(selection.update(Message::NextHighlighted), Some(1));
        assert_eq!(selection.selected(), Some(1));
    }

    #[test]
    fn test_cleared_drops_selection() {
        let mut selection = Selection::new(2).with_selected(1);
        selection.update(Message::Cleared);
        assert_eq!(selection.selected(), None);
        assert_eq!(selection.highlighted(), Some(1));
    }
}
