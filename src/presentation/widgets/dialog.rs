use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

use super::{button::Button, layout::centered_rect};
use crate::presentation::theme::{ButtonVariant, Glow, Size, Theme};

pub const DEFAULT_WIDTH: u16 = 48;

/// A modal panel centered over whatever area it is rendered into.
///
/// The area behind the panel is left untouched; only the panel is cleared.
#[derive(Debug, Clone)]
pub struct Dialog<'a> {
    title: &'a str,
    body: Text<'a>,
    actions: Vec<(&'a str, ButtonVariant)>,
    focused: Option<usize>,
    width: u16,
    glow: Glow,
    theme: Theme,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, body: impl Into<Text<'a>>) -> Self {
        Self {
            title,
            body: body.into(),
            actions: Vec::new(),
            focused: None,
            width: DEFAULT_WIDTH,
            glow: Glow::Soft,
            theme: Theme::default(),
        }
    }

    pub fn action(mut self, label: &'a str, variant: ButtonVariant) -> Self {
        self.actions.push((label, variant));
        self
    }

    /// Index into the actions of the button with keyboard focus.
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn glow(mut self, glow: Glow) -> Self {
        self.glow = glow;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn body_height(&self) -> u16 {
        let inner = usize::from(self.width.saturating_sub(2).max(1));
        let rows: usize = self
            .body
            .lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(inner))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Border, body, one blank row, one button row.
    pub fn height(&self) -> u16 {
        let buttons = if self.actions.is_empty() { 0 } else { 2 };
        self.body_height().saturating_add(2 + buttons)
    }

    /// The rect the panel occupies when rendered into `area`.
    pub fn panel_rect(&self, area: Rect) -> Rect {
        centered_rect(area, self.width, self.height())
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let panel = self.panel_rect(area);
        Clear.render(panel, buf);

        let block = Block::bordered()
            .border_type(self.glow.border_type(BorderType::Plain))
            .border_style(self.glow.apply(Style::default().fg(self.theme.primary)))
            .title(Line::styled(format!(" {} ", self.title), self.theme.title()))
            .style(self.theme.base());
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [body, _, buttons] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(if self.actions.is_empty() { 0 } else { 1 }),
            Constraint::Length(if self.actions.is_empty() { 0 } else { 1 }),
        ])
        .areas(inner);
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let actions: Vec<Button<'_>> = self
            .actions
            .iter()
            .enumerate()
            .map(|(index, &(label, variant))| {
                Button::new(label)
                    .variant(variant)
                    .size(Size::Sm)
                    .focused(self.focused == Some(index))
                    .theme(self.theme)
            })
            .collect();
        let areas = Layout::horizontal(actions.iter().map(|button| Constraint::Length(button.width())))
            .flex(layout::Flex::End)
            .spacing(1)
            .split(buttons);
        for (button, rect) in actions.into_iter().zip(areas.iter()) {
            button.render(*rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;
    use pretty_assertions::assert_eq;

    fn dialog() -> Dialog<'static> {
        Dialog::new("Purge", "Wipe the cache?")
            .action("Cancel", ButtonVariant::Outline)
            .action("Wipe", ButtonVariant::Destructive)
            .width(24)
    }

    #[test]
    fn test_height() {
        assert_eq!(dialog().height(), 5);
        assert_eq!(Dialog::new("t", "a\nb").height(), 4);
    }

    #[test]
    fn test_render_centered() {
        let area = Rect::new(0, 0, 30, 7);
        let mut buffer = Buffer::filled(area, ratatui::buffer::Cell::new("."));
        dialog().render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0], "..............................");
        assert_eq!(lines[1], "...╭ Purge ───────────────╮...");
        assert_eq!(lines[2], "...│Wipe the cache?       │...");
        assert_eq!(lines[4], "...│        Cancel   Wipe │...");
        assert_eq!(lines[6], "..............................");
    }

    #[test]
    fn test_focused_action_is_reversed() {
        let area = Rect::new(0, 0, 30, 7);
        let mut buffer = Buffer::empty(area);
        dialog().focused(Some(1)).render(area, &mut buffer);
        assert!(buffer[(22, 4)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(13, 4)].modifier.contains(Modifier::REVERSED));
    }
}
