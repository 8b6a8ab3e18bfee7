use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::{BadgeVariant, Theme};

/// A one-line status pill.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge<'a> {
    label: &'a str,
    variant: BadgeVariant,
    theme: Theme,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: BadgeVariant::default(),
            theme: Theme::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.label.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    /// The badge as a span, for inline use inside other lines.
    pub fn into_span(self) -> Span<'a> {
        let (open, close) = self.variant.delimiters();
        Span::styled(
            format!("{open}{}{close}", self.label),
            self.variant.style(&self.theme),
        )
    }
}

impl Widget for Badge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Line::from(self.into_span()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filled_badge() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 8, 1);
        let mut buffer = Buffer::empty(area);
        Badge::new("LIVE")
            .variant(BadgeVariant::Success)
            .theme(theme)
            .render(area, &mut buffer);

        assert_eq!(buffer_lines(&buffer), vec![" LIVE   ".to_owned()]);
        assert_eq!(buffer[(1, 0)].bg, theme.success);
        assert_eq!(buffer[(6, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_outline_badge_uses_brackets() {
        let span = Badge::new("beta").variant(BadgeVariant::Outline).into_span();
        assert_eq!(span.content, "[beta]");
        assert_eq!(span.style.bg, None);
    }

    #[test]
    fn test_width() {
        assert_eq!(Badge::new("v1.0").width(), 6);
    }
}
