use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    model::terminal::{LineKind, OutputLine, Terminal},
    presentation::theme::{Animation, Theme},
};

const CURSOR: &str = "█";

/// Scrollback, the line being typed, and the prompt. The newest rows stick to
/// the bottom; older rows scroll off the top.
pub struct TerminalView<'a> {
    terminal: &'a Terminal,
    title: Option<&'a str>,
    focused: bool,
    theme: Theme,
    frame: u64,
}

impl<'a> TerminalView<'a> {
    pub fn new(terminal: &'a Terminal) -> Self {
        Self {
            terminal,
            title: None,
            focused: true,
            theme: Theme::default(),
            frame: 0,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
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

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn output_line(&self, line: &OutputLine) -> Line<'a> {
        match line.kind {
            LineKind::Command => Line::from(vec![
                Span::styled(
                    self.terminal.prompt().to_owned(),
                    Style::default().fg(self.theme.primary),
                ),
                Span::styled(line.text.clone(), self.theme.text()),
            ]),
            LineKind::Output => Line::styled(line.text.clone(), Style::default().fg(self.theme.success)),
            LineKind::System => Line::styled(line.text.clone(), self.theme.muted_text()),
        }
    }

    fn cursor(&self) -> Span<'a> {
        let style = Style::default().fg(self.theme.success);
        let style = if self.focused {
            Animation::Pulse.apply(style, self.frame)
        } else {
            style.add_modifier(Modifier::DIM)
        };
        Span::styled(CURSOR, style)
    }

    fn rows(&self) -> Vec<Line<'a>> {
        let mut rows: Vec<Line<'a>> = self
            .terminal
            .lines()
            .iter()
            .map(|line| self.output_line(line))
            .collect();
        if let Some(partial) = self.terminal.partial_line() {
            let mut line = self.output_line(&partial);
            line.spans.push(self.cursor());
            rows.push(line);
        }
        if !self.terminal.is_animating() {
            rows.push(Line::from(vec![
                Span::styled(
                    self.terminal.prompt().to_owned(),
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.terminal.input(), self.theme.text()),
                self.cursor(),
            ]));
        }
        rows
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(if self.focused {
                Style::default().fg(self.theme.success)
            } else {
                self.theme.border()
            })
            .style(self.theme.base());
        if let Some(title) = self.title {
            block = block.title(Line::styled(format!(">_ {title}"), self.theme.title()));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.rows();
        let skip = rows.len().saturating_sub(usize::from(inner.height));
        Paragraph::new(rows.into_iter().skip(skip).collect::<Vec<_>>()).render(inner, buf);
    }
}
