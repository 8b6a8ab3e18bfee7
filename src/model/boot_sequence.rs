//! Scripted reveal of timed boot messages.
//!
//! A fixed timeline: each message appears at its delay (optionally typed out
//! one character at a time) and the completion callback fires once, a grace
//! period after the last message's delay.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;

pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(15);
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(800);

pub type CompletionCallback = Box<dyn FnOnce() + Send>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BootMessage {
    pub text: String,
    #[serde(rename = "delay_ms", deserialize_with = "deserialize_millis")]
    pub delay: Duration,
}

impl BootMessage {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Started { now: Option<Instant> },
    Ticked { now: Option<Instant> },
    Skipped,
}

pub struct BootSequence {
    messages: Vec<BootMessage>,
    typing_speed: Duration,
    grace_period: Duration,
    started_at: Option<Instant>,
    elapsed: Duration,
    completed: bool,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for BootSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootSequence")
            .field("messages", &self.messages.len())
            .field("typing_speed", &self.typing_speed)
            .field("grace_period", &self.grace_period)
            .field("elapsed", &self.elapsed)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl BootSequence {
    /// Messages are revealed in the given order; delays are measured from start.
    pub fn new(messages: Vec<BootMessage>) -> Self {
        Self {
            messages,
            typing_speed: DEFAULT_TYPING_SPEED,
            grace_period: DEFAULT_GRACE_PERIOD,
            started_at: None,
            elapsed: Duration::ZERO,
            completed: false,
            on_complete: None,
        }
    }

    /// Zero reveals each message whole.
    pub fn with_typing_speed(mut self, typing_speed: Duration) -> Self {
        self.typing_speed = typing_speed;
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn messages(&self) -> &[BootMessage] {
        &self.messages
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Point on the timeline where completion fires.
    pub fn total_duration(&self) -> Duration {
        self.last_delay() + self.grace_period
    }

    /// Fraction of the timeline that has played, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.completed {
            return 1.0;
        }
        let total = self.total_duration().as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total).clamp(0.0, 1.0)
    }

    /// Messages that have appeared so far, each cut to its revealed prefix.
    pub fn visible_lines(&self) -> Vec<String> {
        if !self.has_begun() {
            return Vec::new();
        }
        self.messages
            .iter()
            .filter(|message| self.completed || message.delay <= self.elapsed)
            .map(|message| {
                let shown = self.revealed_chars(message);
                message.text.chars().take(shown).collect()
            })
            .collect()
    }

    /// True once every message is fully on screen.
    pub fn all_revealed(&self) -> bool {
        self.messages
            .iter()
            .all(|message| self.revealed_chars(message) >= message.text.chars().count())
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Started { now } => {
                if self.started_at.is_none() {
                    self.started_at = Some(now.unwrap_or_else(Instant::now));
                    log::debug!("Boot sequence started with {} messages", self.messages.len());
                }
            }
            Message::Ticked { now } => {
                let Some(started_at) = self.started_at else {
                    return;
                };
                if self.completed {
                    return;
                }
                let now = now.unwrap_or_else(Instant::now);
                self.elapsed = now.saturating_duration_since(started_at);
                if self.elapsed >= self.total_duration() {
                    self.complete();
                }
            }
            Message::Skipped => {
                self.elapsed = self.elapsed.max(self.total_duration());
                self.complete();
            }
        }
    }

    fn last_delay(&self) -> Duration {
        self.messages
            .iter()
            .map(|message| message.delay)
            .max()
            .unwrap_or_default()
    }

    /// Nothing is on screen until the timeline starts or is skipped.
    fn has_begun(&self) -> bool {
        self.started_at.is_some() || self.completed
    }

    fn revealed_chars(&self, message: &BootMessage) -> usize {
        let total = message.text.chars().count();
        if !self.has_begun() {
            return 0;
        }
        if self.completed || self.typing_speed.is_zero() {
            return if self.completed || message.delay <= self.elapsed {
                total
            } else {
                0
            };
        }
        let Some(since) = self.elapsed.checked_sub(message.delay) else {
            return 0;
        };
        let typed = since.as_nanos() / self.typing_speed.as_nanos();
        usize::try_from(typed).unwrap_or(usize::MAX).min(total)
    }

    fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        log::debug!("Boot sequence complete after {:?}", self.elapsed);
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }
}
