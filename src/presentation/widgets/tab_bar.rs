use ratatui::{prelude::*, widgets::Tabs};

use crate::{model::selection::Selection, presentation::theme::Theme};

#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    selection: &'a Selection,
    titles: &'a [&'a str],
    theme: Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(selection: &'a Selection, titles: &'a [&'a str]) -> Self {
        Self {
            selection,
            titles,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn titles(&self) -> Vec<Line<'a>> {
        self.titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let style = if self.selection.is_disabled(index) {
                    self.theme.disabled()
                } else {
                    self.theme.muted_text()
                };
                Line::styled(*title, style)
            })
            .collect()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(self.titles())
            .select(self.selection.selected().or(self.selection.highlighted()))
            .style(Style::default().bg(self.theme.background))
            .highlight_style(self.theme.highlight())
            .divider(Span::styled("│", self.theme.border()))
            .render(area, buf);
    }
}
