use ratatui::{prelude::*, widgets::Paragraph};

use super::{badge::Badge, card::Card};
use crate::{
    model::stopwatch::Stopwatch,
    presentation::theme::{BadgeVariant, CardVariant, Glow, Theme},
};

pub struct StopwatchView<'a> {
    stopwatch: &'a Stopwatch,
    theme: Theme,
}

impl<'a> StopwatchView<'a> {
    pub fn new(stopwatch: &'a Stopwatch) -> Self {
        Self {
            stopwatch,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn status(&self) -> Badge<'static> {
        let (label, variant) = match (self.stopwatch.is_running(), self.stopwatch.is_fast_forward()) {
            (true, true) => ("FAST-FORWARD", BadgeVariant::Warning),
            (true, false) => ("RUNNING", BadgeVariant::Success),
            (false, _) if self.stopwatch.elapsed().is_zero() => ("READY", BadgeVariant::Outline),
            (false, _) => ("PAUSED", BadgeVariant::Secondary),
        };
        Badge::new(label).variant(variant).theme(self.theme)
    }
}

impl Widget for StopwatchView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let card = Card::new()
            .title("chrono")
            .variant(CardVariant::Glow)
            .glow(if self.stopwatch.is_running() {
                Glow::Intense
            } else {
                Glow::None
            })
            .theme(self.theme);
        let block = card.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let time_style = Style::default()
            .fg(if self.stopwatch.is_running() {
                self.theme.primary
            } else {
                self.theme.foreground
            })
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled(self.stopwatch.formatted(), time_style),
            Line::from(self.status().into_span()),
        ];
        let [content] = Layout::vertical([Constraint::Length(2)])
            .flex(layout::Flex::Center)
            .areas(inner);
        Paragraph::new(lines).centered().render(content, buf);
    }
}
