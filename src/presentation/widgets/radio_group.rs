use ratatui::prelude::*;

use crate::{model::selection::Selection, presentation::theme::Theme};

/// One option per row; the committed selection is filled, the highlight is
/// marked while the group has focus.
#[derive(Debug, Clone)]
pub struct RadioGroup<'a> {
    selection: &'a Selection,
    options: &'a [&'a str],
    focused: bool,
    theme: Theme,
}

impl<'a> RadioGroup<'a> {
    pub fn new(selection: &'a Selection, options: &'a [&'a str]) -> Self {
        Self {
            selection,
            options,
            focused: false,
            theme: Theme::default(),
        }
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

impl Widget for RadioGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let rows = Layout::vertical(vec![Constraint::Length(1); self.options.len()]).split(area);
        for (index, (option, row)) in self.options.iter().zip(rows.iter()).enumerate() {
            let selected = self.selection.selected() == Some(index);
            let highlighted = self.focused && self.selection.highlighted() == Some(index);
            let mark = if selected { "(•)" } else { "( )" };
            let (mark_style, label_style) = if self.selection.is_disabled(index) {
                (self.theme.disabled(), self.theme.disabled())
            } else if highlighted {
                (self.theme.focus_ring(), self.theme.highlight())
            } else if selected {
                (Style::default().fg(self.theme.primary), self.theme.text())
            } else {
                (self.theme.border(), self.theme.text())
            };
            Line::from(vec![
                Span::styled(mark, mark_style),
                Span::raw(" "),
                Span::styled(*option, label_style),
            ])
            .render(*row, buf);
        }
    }
}
