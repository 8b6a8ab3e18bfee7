use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::{Animation, ButtonVariant, Glow, Size, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: Size,
    glow: Glow,
    animation: Animation,
    focused: bool,
    disabled: bool,
    theme: Theme,
    frame: u64,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: Size::default(),
            glow: Glow::default(),
            animation: Animation::default(),
            focused: false,
            disabled: false,
            theme: Theme::default(),
            frame: 0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn glow(mut self, glow: Glow) -> Self {
        self.glow = glow;
        self
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
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

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn bordered(&self) -> bool {
        self.size.spec().bordered && self.variant.has_border()
    }

    /// Columns needed to show the whole label.
    pub fn width(&self) -> u16 {
        let spec = self.size.spec();
        let label = u16::try_from(self.label.width()).unwrap_or(u16::MAX);
        let borders = if self.bordered() { 2 } else { 0 };
        label
            .saturating_add(spec.padding_x * 2)
            .saturating_add(borders)
    }

    pub fn height(&self) -> u16 {
        if self.bordered() {
            self.size.spec().height
        } else {
            1
        }
    }

    fn label_style(&self) -> Style {
        if self.disabled {
            return self.theme.disabled();
        }
        let mut style = self.variant.style(&self.theme);
        if self.size.spec().bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.focused && !self.bordered() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        self.animation.apply(style, self.frame)
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            return self.theme.disabled();
        }
        let style = if self.focused {
            self.theme.focus_ring()
        } else {
            self.variant.border_style(&self.theme)
        };
        self.glow.apply(style)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let padding = " ".repeat(usize::from(self.size.spec().padding_x));
        let label = Line::from(format!("{padding}{}{padding}", self.label))
            .style(self.label_style())
            .centered();

        if !self.bordered() {
            Paragraph::new(label).render(area, buf);
            return;
        }

        let block = Block::bordered()
            .border_type(self.glow.border_type(self.variant.border_type()))
            .border_style(self.border_style())
            .style(self.label_style());
        let inner = block.inner(area);
        block.render(area, buf);
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(layout::Flex::Center)
            .areas(inner);
        Paragraph::new(label).render(row, buf);
    }
}
