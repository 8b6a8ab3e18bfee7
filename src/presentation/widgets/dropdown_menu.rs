use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::{model::selection::Selection, presentation::theme::Theme};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<'a> {
    pub label: &'a str,
    pub shortcut: Option<&'a str>,
}

impl<'a> MenuItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            shortcut: None,
        }
    }

    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }
}

/// A bordered popup list. The highlight comes from the [`Selection`] state;
/// disabled items are skipped by it and drawn dimmed here.
#[derive(Debug, Clone)]
pub struct DropdownMenu<'a> {
    items: Vec<MenuItem<'a>>,
    title: Option<&'a str>,
    theme: Theme,
}

impl<'a> DropdownMenu<'a> {
    pub fn new(items: Vec<MenuItem<'a>>) -> Self {
        Self {
            items,
            title: None,
            theme: Theme::default(),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn label_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0)
    }

    /// Columns needed for the widest row plus borders.
    pub fn width(&self) -> u16 {
        let shortcut = self
            .items
            .iter()
            .filter_map(|item| item.shortcut.map(|s| s.width() + 2))
            .max()
            .unwrap_or(0);
        let title = self.title.map_or(0, |t| t.width());
        let content = (self.label_width() + shortcut).max(title) + HIGHLIGHT_SYMBOL.width();
        u16::try_from(content + 2).unwrap_or(u16::MAX)
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.items.len() + 2).unwrap_or(u16::MAX)
    }
}

impl StatefulWidget for DropdownMenu<'_> {
    type State = Selection;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.secondary))
            .style(self.theme.base());
        if let Some(title) = self.title {
            block = block.title(Line::styled(title, self.theme.muted_text()));
        }

        let label_width = self.label_width();
        let items: Vec<ListItem<'_>> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if state.is_disabled(index) {
                    self.theme.disabled()
                } else {
                    self.theme.text()
                };
                let mut spans = vec![Span::styled(
                    format!("{:<label_width$}", item.label),
                    style,
                )];
                if let Some(shortcut) = item.shortcut {
                    spans.push(Span::styled(format!("  {shortcut}"), self.theme.muted_text()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.highlight())
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);
        StatefulWidget::render(list, area, buf, state.list_state_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::selection::Message, presentation::widgets::buffer_lines};
    use pretty_assertions::assert_eq;

    fn menu() -> DropdownMenu<'static> {
        DropdownMenu::new(vec![
            MenuItem::new("Copy").shortcut("^C"),
            MenuItem::new("Paste"),
            MenuItem::new("Delete"),
        ])
    }

    #[test]
    fn test_size() {
        let menu = menu();
        assert_eq!(menu.width(), 6 + 4 + 2 + 2);
        assert_eq!(menu.height(), 5);
    }

    #[test]
    fn test_render_highlight() {
        let menu = menu();
        let area = Rect::new(0, 0, menu.width(), menu.height());
        let mut buffer = Buffer::empty(area);
        let mut selection = Selection::new(3).with_disabled(&[1]);
        selection.update(Message::NextHighlighted);

        menu.render(area, &mut buffer, &mut selection);
        assert_eq!(
            buffer_lines(&buffer),
            vec![
                "╭────────────╮",
                "│  Copy    ^C│",
                "│  Paste     │",
                "│▶ Delete    │",
                "╰────────────╯",
            ]
        );
        assert!(buffer[(3, 2)].modifier.contains(Modifier::DIM));
    }
}
