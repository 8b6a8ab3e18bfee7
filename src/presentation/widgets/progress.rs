use ratatui::{prelude::*, widgets::Gauge};

use crate::{
    model::progress::Progress,
    presentation::theme::{Animation, Theme, Tone},
};

#[derive(Debug, Clone)]
pub struct ProgressBar<'a> {
    progress: Progress,
    label: Option<&'a str>,
    tone: Tone,
    animation: Animation,
    theme: Theme,
    frame: u64,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: Progress) -> Self {
        Self {
            progress,
            label: None,
            tone: Tone::default(),
            animation: Animation::default(),
            theme: Theme::default(),
            frame: 0,
        }
    }

    /// Replaces the percentage label.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bar = self
            .animation
            .apply(self.tone.style(&self.theme).bg(self.theme.border), self.frame);
        let label = match self.label {
            Some(label) => label.to_owned(),
            None => format!("{}%", self.progress.percent()),
        };
        Gauge::default()
            .ratio(self.progress.ratio())
            .label(Span::styled(label, self.theme.text().add_modifier(Modifier::BOLD)))
            .gauge_style(bar)
            .use_unicode(true)
            .render(area, buf);
    }
}
