use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::layout::anchored_rect;
use crate::presentation::theme::Theme;

/// A one-line hint attached to an anchor rect. Render it into the area that
/// bounds the popup, usually the whole frame.
#[derive(Debug, Clone)]
pub struct Tooltip<'a> {
    text: &'a str,
    anchor: Rect,
    theme: Theme,
}

impl<'a> Tooltip<'a> {
    pub fn new(text: &'a str, anchor: Rect) -> Self {
        Self {
            text,
            anchor,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn popup_rect(&self, bounds: Rect) -> Rect {
        let width = u16::try_from(self.text.width() + 4).unwrap_or(u16::MAX);
        anchored_rect(self.anchor, width, 3, bounds)
    }
}

impl Widget for Tooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let popup = self.popup_rect(area);
        Clear.render(popup, buf);
        Paragraph::new(self.text)
            .style(Style::default().fg(self.theme.background).bg(self.theme.accent))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_below_anchor() {
        let area = Rect::new(0, 0, 12, 5);
        let mut buffer = Buffer::empty(area);
        Tooltip::new("hint", Rect::new(1, 0, 4, 1)).render(area, &mut buffer);
        assert_eq!(
            buffer_lines(&buffer),
            vec![
                "            ",
                " ╭──────╮   ",
                " │ hint │   ",
                " ╰──────╯   ",
                "            ",
            ]
        );
    }
}
