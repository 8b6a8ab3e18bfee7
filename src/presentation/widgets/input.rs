use ratatui::{prelude::*, widgets::Block};
use tui_textarea::TextArea;

use crate::presentation::theme::{Glow, Theme};

/// A single-line text field drawn from a [`TextArea`] owned by the caller.
pub struct Input<'a> {
    textarea: &'a TextArea<'static>,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
    glow: Glow,
    theme: Theme,
}

impl<'a> Input<'a> {
    pub fn new(textarea: &'a TextArea<'static>) -> Self {
        Self {
            textarea,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            glow: Glow::default(),
            theme: Theme::default(),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.disabled {
            self.theme.disabled()
        } else if self.focused {
            self.glow.apply(self.theme.focus_ring())
        } else {
            self.theme.border()
        };
        let mut block = Block::bordered()
            .border_type(self.glow.border_type(ratatui::widgets::BorderType::Rounded))
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(Line::styled(title, self.theme.title()));
        }

        let mut textarea = self.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(if self.disabled {
            self.theme.disabled()
        } else {
            self.theme.text()
        });
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(if self.focused && !self.disabled {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            self.theme.text()
        });
        if let Some(placeholder) = self.placeholder {
            textarea.set_placeholder_text(placeholder);
            textarea.set_placeholder_style(self.theme.muted_text());
        }
        textarea.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let textarea = TextArea::from(["neo"]);
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        Input::new(&textarea).title("id").render(area, &mut buffer);

        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0], "╭id──────╮");
        assert!(lines[1].starts_with("│neo"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let textarea = TextArea::default();
        let area = Rect::new(0, 0, 16, 3);
        let mut buffer = Buffer::empty(area);
        Input::new(&textarea)
            .placeholder("handle")
            .render(area, &mut buffer);
        assert!(buffer_lines(&buffer)[1].contains("handle"));
    }

    #[test]
    fn test_focused_border_uses_focus_ring() {
        let theme = Theme::default();
        let textarea = TextArea::default();
        let area = Rect::new(0, 0, 8, 3);
        let mut buffer = Buffer::empty(area);
        Input::new(&textarea).focused(true).render(area, &mut buffer);
        assert_eq!(buffer[(0, 0)].fg, theme.accent);
    }
}
