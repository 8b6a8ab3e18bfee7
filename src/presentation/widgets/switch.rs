use ratatui::prelude::*;

use crate::{model::toggle::Toggle, presentation::theme::Theme};

const ON: &str = "[==o]";
const OFF: &str = "[o--]";

/// An on/off slider. Indeterminate shows as off.
#[derive(Debug, Clone)]
pub struct Switch<'a> {
    toggle: &'a Toggle,
    label: &'a str,
    focused: bool,
    theme: Theme,
}

impl<'a> Switch<'a> {
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

impl Widget for Switch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let on = self.toggle.is_checked();
        let track = if self.toggle.is_disabled() {
            self.theme.disabled()
        } else if on {
            Style::default()
                .fg(self.theme.success)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.muted_text()
        };
        let track = if self.focused {
            track.add_modifier(Modifier::REVERSED)
        } else {
            track
        };
        Line::from(vec![
            Span::styled(if on { ON } else { OFF }, track),
            Span::raw(" "),
            Span::styled(self.label, self.theme.text()),
        ])
        .render(area, buf);
    }
}
