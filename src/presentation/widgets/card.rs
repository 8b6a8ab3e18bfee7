use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::presentation::theme::{CardVariant, Glow, Theme};

/// A titled, bordered panel with optional body text and footer.
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Option<Line<'a>>,
    description: Option<Line<'a>>,
    body: Text<'a>,
    footer: Option<Line<'a>>,
    variant: CardVariant,
    glow: Glow,
    theme: Theme,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<Line<'a>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
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

    /// The bordered frame alone, so callers can lay out custom content inside.
    pub fn block(&self) -> Block<'a> {
        let mut block = Block::bordered()
            .border_type(self.glow.border_type(self.variant.border_type()))
            .border_style(self.glow.apply(self.variant.border_style(&self.theme)))
            .style(self.variant.body_style(&self.theme));
        if let Some(title) = &self.title {
            let mut spans = vec![Span::raw(self.variant.title_prefix())];
            spans.extend(title.spans.iter().cloned());
            block = block.title(Line::from(spans).style(self.theme.title()));
        }
        if let Some(footer) = &self.footer {
            block = block.title_bottom(footer.clone().style(self.theme.muted_text()).right_aligned());
        }
        block
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let body_area = match self.description {
            Some(description) => {
                let [head, rest] =
                    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
                description.style(self.theme.muted_text()).render(head, buf);
                rest
            }
            None => inner,
        };
        Paragraph::new(self.body)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);
    }
}
