use ratatui::prelude::*;

use crate::{
    model::toggle::Toggle,
    presentation::theme::{Size, Theme},
};

/// A pressable button that stays pressed while its toggle is checked.
#[derive(Debug, Clone)]
pub struct ToggleButton<'a> {
    toggle: &'a Toggle,
    label: &'a str,
    size: Size,
    focused: bool,
    theme: Theme,
}

impl<'a> ToggleButton<'a> {
    pub fn new(toggle: &'a Toggle, label: &'a str) -> Self {
        Self {
            toggle,
            label,
            size: Size::Sm,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
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

impl Widget for ToggleButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let spec = self.size.spec();
        let mut style = if self.toggle.is_disabled() {
            self.theme.disabled()
        } else if self.toggle.is_checked() {
            Style::default()
                .fg(self.theme.background)
                .bg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.accent)
        };
        if spec.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let padding = " ".repeat(usize::from(spec.padding_x));
        Line::styled(format!("{padding}{}{padding}", self.label), style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::toggle::Message, presentation::widgets::buffer_lines};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pressed_state_fills_background() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 6, 1);
        let mut toggle = Toggle::default();

        let mut buffer = Buffer::empty(area);
        ToggleButton::new(&toggle, "B").render(area, &mut buffer);
        assert_eq!(buffer_lines(&buffer), vec![" B    ".to_owned()]);
        assert_eq!(buffer[(1, 0)].bg, Color::Reset);

        toggle.update(Message::Toggled);
        let mut buffer = Buffer::empty(area);
        ToggleButton::new(&toggle, "B").render(area, &mut buffer);
        assert_eq!(buffer[(1, 0)].bg, theme.accent);
    }
}
