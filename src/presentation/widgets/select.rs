use ratatui::{
    prelude::*,
    widgets::{Block, BorderType},
};

use super::{
    dropdown_menu::{DropdownMenu, MenuItem},
    layout::anchored_rect,
};
use crate::{model::selection::Selection, presentation::theme::Theme};

/// A trigger field showing the committed option. While open, the option list
/// drops below the trigger (or above it when the buffer has no room).
#[derive(Debug, Clone)]
pub struct Select<'a> {
    options: &'a [&'a str],
    placeholder: &'a str,
    open: bool,
    focused: bool,
    theme: Theme,
}

impl<'a> Select<'a> {
    pub fn new(options: &'a [&'a str]) -> Self {
        Self {
            options,
            placeholder: "Select...",
            open: false,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl StatefulWidget for Select<'_> {
    type State = Selection;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused || self.open {
            self.theme.focus_ring()
        } else {
            self.theme.border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(self.theme.base());
        let inner = block.inner(area);
        block.render(area, buf);

        let value = match state.selected().and_then(|index| self.options.get(index)) {
            Some(option) => Span::styled(*option, self.theme.text()),
            None => Span::styled(self.placeholder, self.theme.muted_text()),
        };
        let chevron = if self.open { "▴" } else { "▾" };
        let [value_area, chevron_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);
        Line::from(value).render(value_area, buf);
        Span::styled(chevron, Style::default().fg(self.theme.primary)).render(chevron_area, buf);

        if !self.open {
            return;
        }
        let menu = DropdownMenu::new(self.options.iter().map(|&option| MenuItem::new(option)).collect())
            .theme(self.theme);
        let popup = anchored_rect(area, menu.width().max(area.width), menu.height(), buf.area);
        menu.render(popup, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::selection::Message, presentation::widgets::buffer_lines};
    use pretty_assertions::assert_eq;

    const OPTIONS: [&str; 2] = ["Arasaka", "Militech"];

    #[test]
    fn test_closed_shows_placeholder() {
        let area = Rect::new(0, 0, 14, 3);
        let mut buffer = Buffer::empty(area);
        let mut selection = Selection::new(2);
        Select::new(&OPTIONS).render(area, &mut buffer, &mut selection);
        assert_eq!(buffer_lines(&buffer)[1], "│Select...  ▾│");
    }

    #[test]
    fn test_closed_shows_selected() {
        let area = Rect::new(0, 0, 14, 3);
        let mut buffer = Buffer::empty(area);
        let mut selection = Selection::new(2);
        selection.update(Message::Selected { index: 1 });
        Select::new(&OPTIONS).render(area, &mut buffer, &mut selection);
        assert_eq!(buffer_lines(&buffer)[1], "│Militech   ▾│");
    }

    #[test]
    fn test_open_draws_list_below() {
        let bounds = Rect::new(0, 0, 14, 7);
        let trigger = Rect::new(0, 0, 14, 3);
        let mut buffer = Buffer::empty(bounds);
        let mut selection = Selection::new(2);
        Select::new(&OPTIONS)
            .open(true)
            .render(trigger, &mut buffer, &mut selection);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[1], "│Select...  ▴│");
        assert_eq!(lines[4], "│▶ Arasaka   │");
        assert_eq!(lines[5], "│  Militech  │");
    }
}
