use ratatui::prelude::*;

use crate::presentation::theme::Theme;

const OPEN_MARK: &str = "▾ ";
const CLOSED_MARK: &str = "▸ ";

#[derive(Debug, Clone)]
pub struct AccordionItem<'a> {
    title: &'a str,
    body: Text<'a>,
    open: bool,
}

impl<'a> AccordionItem<'a> {
    pub fn new(title: &'a str, body: impl Into<Text<'a>>) -> Self {
        Self {
            title,
            body: body.into(),
            open: false,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    fn height(&self) -> u16 {
        let body = if self.open {
            u16::try_from(self.body.lines.len()).unwrap_or(u16::MAX)
        } else {
            0
        };
        body.saturating_add(1)
    }
}

/// A stack of collapsible sections. Headers always show; bodies only while open.
#[derive(Debug, Clone)]
pub struct Accordion<'a> {
    items: Vec<AccordionItem<'a>>,
    focused: Option<usize>,
    theme: Theme,
}

impl<'a> Accordion<'a> {
    pub fn new(items: Vec<AccordionItem<'a>>) -> Self {
        Self {
            items,
            focused: None,
            theme: Theme::default(),
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn height(&self) -> u16 {
        self.items
            .iter()
            .fold(0, |total: u16, item| total.saturating_add(item.height()))
    }
}

impl Widget for Accordion<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut y = area.y;
        for (index, item) in self.items.into_iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let header_style = if self.focused == Some(index) {
                self.theme.highlight()
            } else if item.open {
                self.theme.title()
            } else {
                self.theme.text()
            };
            let mark = if item.open { OPEN_MARK } else { CLOSED_MARK };
            Line::styled(format!("{mark}{}", item.title), header_style)
                .render(Rect::new(area.x, y, area.width, 1), buf);
            y += 1;

            if !item.open {
                continue;
            }
            for line in item.body.lines {
                if y >= area.bottom() {
                    return;
                }
                let row = Rect::new(area.x + 2, y, area.width.saturating_sub(2), 1);
                line.patch_style(self.theme.muted_text()).render(row, buf);
                y += 1;
            }
        }
    }
}
