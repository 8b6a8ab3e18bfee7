use ratatui::{prelude::*, symbols::line};

use crate::presentation::theme::Theme;

/// A thin rule, optionally with a centered label.
#[derive(Debug, Clone)]
pub struct Separator<'a> {
    label: Option<&'a str>,
    direction: Direction,
    theme: Theme,
}

impl<'a> Separator<'a> {
    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    fn new(direction: Direction) -> Self {
        Self {
            label: None,
            direction,
            theme: Theme::default(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for Separator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }
        let style = self.theme.border();
        match self.direction {
            Direction::Vertical => {
                for y in area.top()..area.bottom() {
                    buf[(area.x, y)].set_symbol(line::VERTICAL).set_style(style);
                }
            }
            Direction::Horizontal => {
                for x in area.left()..area.right() {
                    buf[(x, area.y)].set_symbol(line::HORIZONTAL).set_style(style);
                }
                if let Some(label) = self.label {
                    let row = Rect::new(area.x, area.y, area.width, 1);
                    Line::from(format!(" {label} "))
                        .style(self.theme.muted_text())
                        .centered()
                        .render(row, buf);
                }
            }
        }
    }
}
