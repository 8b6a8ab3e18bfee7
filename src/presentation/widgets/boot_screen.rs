use ratatui::{prelude::*, widgets::Paragraph};

use super::progress::ProgressBar;
use crate::{
    model::{boot_sequence::BootSequence, progress::Progress},
    presentation::theme::{Animation, Theme, Tone},
};

/// Status tags recognised at the start of a boot line.
const TAGS: [&str; 3] = ["[ OK ]", "[WARN]", "[FAIL]"];

/// The boot log with a progress bar pinned to the bottom row.
pub struct BootScreen<'a> {
    sequence: &'a BootSequence,
    theme: Theme,
    frame: u64,
}

impl<'a> BootScreen<'a> {
    pub fn new(sequence: &'a BootSequence) -> Self {
        Self {
            sequence,
            theme: Theme::default(),
            frame: 0,
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn tag_color(&self, tag: &str) -> Color {
        match tag {
            "[WARN]" => self.theme.warning,
            "[FAIL]" => self.theme.destructive,
            _ => self.theme.success,
        }
    }

    fn styled_line(&self, text: String) -> Line<'static> {
        for tag in TAGS {
            if let Some(rest) = text.strip_prefix(tag) {
                return Line::from(vec![
                    Span::styled(
                        tag,
                        Style::default()
                            .fg(self.tag_color(tag))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(rest.to_owned(), self.theme.text()),
                ]);
            }
        }
        // Partially typed tags and untagged lines.
        let style = if text.starts_with(">>") {
            self.theme.title()
        } else {
            self.theme.text()
        };
        Line::styled(text, style)
    }
}

impl Widget for BootScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, self.theme.base());
        let [log, _, bar] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let mut lines: Vec<Line<'_>> = self
            .sequence
            .visible_lines()
            .into_iter()
            .map(|text| self.styled_line(text))
            .collect();
        if !self.sequence.is_complete() {
            let cursor = Span::styled(
                "_",
                Animation::Blink.apply(Style::default().fg(self.theme.success), self.frame),
            );
            match lines.last_mut() {
                Some(line) => line.spans.push(cursor),
                None => lines.push(Line::from(cursor)),
            }
        }
        let skip = lines.len().saturating_sub(usize::from(log.height));
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()).render(log, buf);

        let tone = if self.sequence.is_complete() {
            Tone::Success
        } else {
            Tone::Default
        };
        ProgressBar::new(Progress::with_max(self.sequence.progress(), 1.0))
            .tone(tone)
            .theme(self.theme)
            .render(bar, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{
        model::boot_sequence::{BootMessage, Message},
        presentation::widgets::buffer_lines,
    };
    use pretty_assertions::assert_eq;

    fn sequence() -> BootSequence {
        BootSequence::new(vec![
            BootMessage::new("[ OK ] core", Duration::ZERO),
            BootMessage::new("[WARN] ice", Duration::from_millis(100)),
        ])
        .with_typing_speed(Duration::ZERO)
        .with_grace_period(Duration::from_millis(100))
    }

    fn render(sequence: &BootSequence) -> Buffer {
        let area = Rect::new(0, 0, 16, 5);
        let mut buffer = Buffer::empty(area);
        BootScreen::new(sequence).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_render_first_message() {
        let theme = Theme::default();
        let start = Instant::now();
        let mut sequence = sequence();
        sequence.update(Message::Started { now: Some(start) });
        sequence.update(Message::Ticked { now: Some(start) });

        let buffer = render(&sequence);
        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0], "[ OK ] core_    ");
        assert_eq!(lines[1], "                ");
        assert!(lines[4].contains("0%"));
        assert_eq!(buffer[(2, 0)].fg, theme.success);
    }

    #[test]
    fn test_render_complete() {
        let theme = Theme::default();
        let mut sequence = sequence();
        sequence.update(Message::Skipped);

        let buffer = render(&sequence);
        let lines = buffer_lines(&buffer);
        assert_eq!(lines[0], "[ OK ] core     ");
        assert_eq!(lines[1], "[WARN] ice      ");
        assert!(lines[4].contains("100%"));
        assert_eq!(buffer[(1, 1)].fg, theme.warning);
    }
}
