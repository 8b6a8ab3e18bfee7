//! Interactive terminal emulation: line buffer, history recall and typed output.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use super::history::{CommandHistory, Recall};

pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(20);
pub const MAX_OUTPUT_LINES: usize = 500;
pub const CLEAR_COMMAND: &str = "clear";

/// Caller-supplied command dispatcher. Returned lines are typed into the output.
pub type CommandHandler = Box<dyn FnMut(&str) -> Vec<String> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A submitted command, rendered after the prompt.
    Command,
    /// Handler output (or the echo).
    Output,
    /// Banners and notices.
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    KeyEventReceived { event: KeyEvent },
    Submitted,
    PreviousRecalled,
    NextRecalled,
    Ticked { now: Option<Instant> },
    OutputCleared,
    SystemLinesQueued { lines: Vec<String> },
}

#[derive(Debug, Clone)]
struct Typing {
    line: OutputLine,
    started_at: Instant,
    revealed: usize,
}

pub struct Terminal {
    prompt: String,
    textarea: TextArea<'static>,
    history: CommandHistory,
    lines: Vec<OutputLine>,
    pending: VecDeque<OutputLine>,
    typing: Option<Typing>,
    typing_speed: Duration,
    handler: Option<CommandHandler>,
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("prompt", &self.prompt)
            .field("input", &self.input())
            .field("history", &self.history)
            .field("lines", &self.lines.len())
            .field("pending", &self.pending.len())
            .field("typing_speed", &self.typing_speed)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl Terminal {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            textarea: TextArea::default(),
            history: CommandHistory::new(),
            lines: Vec::new(),
            pending: VecDeque::new(),
            typing: None,
            typing_speed: DEFAULT_TYPING_SPEED,
            handler: None,
        }
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) -> Vec<String> + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Zero disables the typing animation.
    pub fn with_typing_speed(mut self, typing_speed: Duration) -> Self {
        self.typing_speed = typing_speed;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = CommandHistory::with_capacity_limit(limit);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input(&self) -> String {
        self.textarea.lines().concat()
    }

    /// Fully revealed output lines, oldest first.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// The line currently being typed, truncated to what is revealed so far.
    pub fn partial_line(&self) -> Option<OutputLine> {
        self.typing.as_ref().map(|typing| {
            OutputLine::new(
                typing.line.kind,
                typing
                    .line
                    .text
                    .chars()
                    .take(typing.revealed)
                    .collect::<String>(),
            )
        })
    }

    pub fn is_animating(&self) -> bool {
        self.typing.is_some() || !self.pending.is_empty()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::KeyEventReceived { event } => self.handle_key_event(event),
            Message::Submitted => self.submit(),
            Message::PreviousRecalled => {
                if let Some(entry) = self.history.previous().map(str::to_owned) {
                    self.set_input(&entry);
                }
            }
            Message::NextRecalled => match self.history.next() {
                Recall::Entry(entry) => self.set_input(&entry),
                Recall::Cleared => self.set_input(""),
                Recall::Unchanged => {}
            },
            Message::Ticked { now } => self.advance(now.unwrap_or_else(Instant::now)),
            Message::OutputCleared => {
                self.lines.clear();
                self.pending.clear();
                self.typing = None;
            }
            Message::SystemLinesQueued { lines } => {
                for line in lines {
                    self.queue(OutputLine::new(LineKind::System, line));
                }
            }
        }
    }

    fn handle_key_event(&mut self, event: KeyEvent) {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char('m' | 'j') if ctrl => self.submit(),
            KeyCode::Char('l') if ctrl => self.update(Message::OutputCleared),
            KeyCode::Up => self.update(Message::PreviousRecalled),
            KeyCode::Down => self.update(Message::NextRecalled),
            _ => {
                self.textarea.input(event);
            }
        }
    }

    fn submit(&mut self) {
        let raw = self.input();
        let command = raw.trim();
        if command.is_empty() {
            self.set_input("");
            self.history.reset_cursor();
            return;
        }
        let command = command.to_owned();
        self.set_input("");
        self.history.push(command.clone());
        log::debug!("Terminal command submitted: {command}");

        if command == CLEAR_COMMAND {
            self.update(Message::OutputCleared);
            return;
        }

        self.push_line(OutputLine::new(LineKind::Command, command.clone()));
        let output = match self.handler.as_mut() {
            Some(handler) => handler(&command),
            None => vec![command],
        };
        for line in output {
            self.queue(OutputLine::new(LineKind::Output, line));
        }
    }

    fn set_input(&mut self, text: &str) {
        // Recreate rather than select-and-delete so undo history goes too.
        self.textarea = TextArea::default();
        if !text.is_empty() {
            self.textarea.insert_str(text);
            self.textarea.move_cursor(CursorMove::End);
        }
    }

    fn queue(&mut self, line: OutputLine) {
        if self.typing_speed.is_zero() && !self.is_animating() {
            self.push_line(line);
        } else {
            self.pending.push_back(line);
        }
    }

    fn push_line(&mut self, line: OutputLine) {
        self.lines.push(line);
        let overflow = self.lines.len().saturating_sub(MAX_OUTPUT_LINES);
        self.lines.drain(..overflow);
    }

    fn advance(&mut self, now: Instant) {
        let mut started_at = now;
        loop {
            let mut typing = match self.typing.take() {
                Some(typing) => typing,
                None => match self.pending.pop_front() {
                    Some(line) => Typing {
                        line,
                        started_at,
                        revealed: 0,
                    },
                    None => return,
                },
            };

            let total = typing.line.text.chars().count();
            let elapsed = now.saturating_duration_since(typing.started_at);
            typing.revealed = if self.typing_speed.is_zero() {
                total
            } else {
                let typed = elapsed.as_nanos() / self.typing_speed.as_nanos();
                usize::try_from(typed).unwrap_or(usize::MAX).min(total)
            };

            if typing.revealed < total {
                self.typing = Some(typing);
                return;
            }

            let chars = u32::try_from(total).unwrap_or(u32::MAX);
            started_at = typing.started_at + self.typing_speed.saturating_mul(chars);
            self.push_line(typing.line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(terminal: &mut Terminal, text: &str) {
        for c in text.chars() {
            terminal.update(Message::KeyEventReceived {
                event: key(KeyCode::Char(c)),
            });
        }
    }

    fn instant_terminal() -> Terminal {
        Terminal::new("> ").with_typing_speed(Duration::ZERO)
    }

    #[test]
    fn test_typing_fills_input() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "ls -la");
        assert_eq!(terminal.input(), "ls -la");
    }

    #[test]
    fn test_submit_echoes_without_handler() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "whoami");
        terminal.update(Message::KeyEventReceived {
            event: key(KeyCode::Enter),
        });

        assert_eq!(terminal.input(), "");
        assert_eq!(terminal.history().entries(), &["whoami".to_owned()]);
        assert_eq!(
            terminal.lines(),
            &[
                OutputLine::new(LineKind::Command, "whoami"),
                OutputLine::new(LineKind::Output, "whoami"),
            ]
        );
    }

    #[test]
    fn test_submit_dispatches_to_handler() {
        let mut terminal = instant_terminal().with_handler(|cmd| vec![format!("ran {cmd}")]);
        type_text(&mut terminal, "  scan  ");
        terminal.update(Message::Submitted);

        assert_eq!(terminal.history().newest(), Some("scan"));
        assert_eq!(
            terminal.lines().last(),
            Some(&OutputLine::new(LineKind::Output, "ran scan"))
        );
    }

    #[test]
    fn test_whitespace_submit_is_ignored() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "   ");
        terminal.update(Message::Submitted);

        assert!(terminal.history().is_empty());
        assert!(terminal.lines().is_empty());
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn test_previous_then_next_round_trip() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "whoami");
        terminal.update(Message::Submitted);

        terminal.update(Message::KeyEventReceived {
            event: key(KeyCode::Up),
        });
        assert_eq!(terminal.input(), "whoami");

        terminal.update(Message::KeyEventReceived {
            event: key(KeyCode::Down),
        });
        assert_eq!(terminal.input(), "");
    }

    #[test]
    fn test_next_without_browsing_keeps_draft() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "ls");
        terminal.update(Message::Submitted);
        type_text(&mut terminal, "draft");

        terminal.update(Message::NextRecalled);
        assert_eq!(terminal.input(), "draft");
    }

    #[test]
    fn test_clear_command_wipes_output() {
        let mut terminal = instant_terminal();
        type_text(&mut terminal, "echo");
        terminal.update(Message::Submitted);
        assert!(!terminal.lines().is_empty());

        type_text(&mut terminal, "clear");
        terminal.update(Message::Submitted);
        assert!(terminal.lines().is_empty());
        assert_eq!(terminal.history().newest(), Some("clear"));
    }

    #[test]
    fn test_typing_animation_reveals_over_time() {
        let mut terminal = Terminal::new("> ")
            .with_typing_speed(Duration::from_millis(10))
            .with_handler(|_| vec!["abcd".to_owned(), "ef".to_owned()]);
        type_text(&mut terminal, "go");
        terminal.update(Message::Submitted);
        assert!(terminal.is_animating());

        let start = Instant::now();
        terminal.update(Message::Ticked { now: Some(start) });
        assert_eq!(
            terminal.partial_line(),
            Some(OutputLine::new(LineKind::Output, ""))
        );

        terminal.update(Message::Ticked {
            now: Some(start + Duration::from_millis(25)),
        });
        assert_eq!(
            terminal.partial_line(),
            Some(OutputLine::new(LineKind::Output, "ab"))
        );

        // "abcd" finishes at 40ms, "ef" starts there and finishes at 60ms.
        terminal.update(Message::Ticked {
            now: Some(start + Duration::from_millis(50)),
        });
        assert_eq!(
            terminal.lines().last(),
            Some(&OutputLine::new(LineKind::Output, "abcd"))
        );
        assert_eq!(
            terminal.partial_line(),
            Some(OutputLine::new(LineKind::Output, "e"))
        );

        terminal.update(Message::Ticked {
            now: Some(start + Duration::from_millis(60)),
        });
        assert!(!terminal.is_animating());
        assert_eq!(terminal.lines().len(), 3);
    }

    #[test]
    fn test_system_lines_are_queued() {
        let mut terminal = instant_terminal();
        terminal.update(Message::SystemLinesQueued {
            lines: vec!["NEON OS v2.0".to_owned()],
        });
        assert_eq!(
            terminal.lines(),
            &[OutputLine::new(LineKind::System, "NEON OS v2.0")]
        );
    }

    #[test]
    fn test_output_is_capped() {
        let mut terminal = instant_terminal();
        terminal.update(Message::SystemLinesQueued {
            lines: (0..MAX_OUTPUT_LINES + 5).map(|i| i.to_string()).collect(),
        });
        assert_eq!(terminal.lines().len(), MAX_OUTPUT_LINES);
        assert_eq!(terminal.lines()[0].text, "5");
    }
}
