use ratatui::prelude::*;

use crate::{
    model::toggle::{CheckState, Toggle},
    presentation::theme::Theme,
};

#[derive(Debug, Clone)]
pub struct Checkbox<'a> {
    toggle: &'a Toggle,
    label: &'a str,
    focused: bool,
    theme: Theme,
}

impl<'a> Checkbox<'a> {
    pub fn new(toggle: &'a Toggle, label: &'a str) -> Self {
        Self {
            toggle,
            label,
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

pub(super) fn check_mark(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (box_style, label_style) = if self.toggle.is_disabled() {
            (self.theme.disabled(), self.theme.disabled())
        } else if self.focused {
            (self.theme.focus_ring(), self.theme.text().add_modifier(Modifier::BOLD))
        } else if self.toggle.state() == CheckState::Unchecked {
            (self.theme.border(), self.theme.text())
        } else {
            (Style::default().fg(self.theme.primary), self.theme.text())
        };
        Line::from(vec![
            Span::styled(check_mark(self.toggle.state()), box_style),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ])
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::toggle::Message, presentation::widgets::buffer_lines};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(toggle: &Toggle) -> Buffer {
        let area = Rect::new(0, 0, 12, 1);
        let mut buffer = Buffer::empty(area);
        Checkbox::new(toggle, "arm").render(area, &mut buffer);
        buffer
    }

    #[rstest]
    #[case(None, "[ ] arm     ")]
    #[case(Some(Message::Toggled), "[x] arm     ")]
    #[case(Some(Message::IndeterminateSet), "[-] arm     ")]
    fn test_render_states(#[case] message: Option<Message>, #[case] expected: &str) {
        let mut toggle = Toggle::default();
        if let Some(message) = message {
            toggle.update(message);
        }
        assert_eq!(buffer_lines(&render(&toggle)), vec![expected.to_owned()]);
    }

    #[test]
    fn test_disabled_is_dimmed() {
        let theme = Theme::default();
        let toggle = Toggle::new(true).disabled(true);
        let buffer = render(&toggle);
        assert_eq!(buffer[(1, 0)].fg, theme.muted);
    }
}
