//! Elapsed-time counter with pause and fast-forward.

use std::fmt;
use std::time::Duration;

/// How often a running stopwatch expects `Ticked`.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Elapsed time added per tick.
pub const NORMAL_STEP: Duration = Duration::from_millis(10);
/// Elapsed time added per tick while fast-forward is held.
pub const FAST_FORWARD_STEP: Duration = Duration::from_millis(100);

pub type TickCallback = Box<dyn FnMut(Duration) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Started,
    Paused,
    Toggled,
    Reset,
    FastForwardPressed,
    FastForwardReleased,
    FastForwardToggled,
    Ticked,
}

#[derive(Default)]
pub struct Stopwatch {
    elapsed: Duration,
    running: bool,
    fast_forward: bool,
    on_tick: Option<TickCallback>,
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("elapsed", &self.elapsed)
            .field("running", &self.running)
            .field("fast_forward", &self.fast_forward)
            .finish_non_exhaustive()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new elapsed value after every applied tick.
    pub fn on_tick<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Duration) + Send + 'static,
    {
        self.on_tick = Some(Box::new(callback));
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_fast_forward(&self) -> bool {
        self.fast_forward
    }

    /// Increment the next tick will apply.
    pub fn step(&self) -> Duration {
        if self.fast_forward {
            FAST_FORWARD_STEP
        } else {
            NORMAL_STEP
        }
    }

    /// `MM:SS.hh`
    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Started => self.running = true,
            Message::Paused => self.running = false,
            Message::Toggled => self.running = !self.running,
            Message::Reset => {
                self.elapsed = Duration::ZERO;
                self.running = false;
                self.fast_forward = false;
            }
            Message::FastForwardPressed => self.fast_forward = true,
            Message::FastForwardReleased => self.fast_forward = false,
            Message::FastForwardToggled => self.fast_forward = !self.fast_forward,
            Message::Ticked => {
                if !self.running {
                    return;
                }
                self.elapsed = self.elapsed.saturating_add(self.step());
                if let Some(callback) = self.on_tick.as_mut() {
                    callback(self.elapsed);
                }
            }
        }
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let total_centis = elapsed.as_millis() / 10;
    let minutes = total_centis / 6000;
    let seconds = (total_centis / 100) % 60;
    let hundredths = total_centis % 100;
    format!("{minutes:02}:{seconds:02}.{hundredths:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    fn tick(stopwatch: &mut Stopwatch, times: usize) {
        for _ in 0..times {
            stopwatch.update(Message::Ticked);
        }
    }

    #[test]
    fn test_new_stopwatch_is_idle() {
        let stopwatch = Stopwatch::new();
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        assert!(!stopwatch.is_running());
        assert!(!stopwatch.is_fast_forward());
        assert_eq!(stopwatch.formatted(), "00:00.00");
    }

    #[test]
    fn test_ticks_advance_only_while_running() {
        let mut stopwatch = Stopwatch::new();
        tick(&mut stopwatch, 3);
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);

        stopwatch.update(Message::Started);
        tick(&mut stopwatch, 3);
        assert_eq!(stopwatch.elapsed(), Duration::from_millis(30));

        stopwatch.update(Message::Paused);
        tick(&mut stopwatch, 5);
        assert_eq!(stopwatch.elapsed(), Duration::from_millis(30));
    }

    #[test]
    fn test_elapsed_is_monotonic_while_running() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.update(Message::Started);
        let mut last = stopwatch.elapsed();
        for i in 0..50 {
            if i % 7 == 0 {
                stopwatch.update(Message::FastForwardToggled);
            }
            stopwatch.update(Message::Ticked);
            assert!(stopwatch.elapsed() >= last);
            last = stopwatch.elapsed();
        }
    }

    #[test]
    fn test_fast_forward_changes_step_not_frequency() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.update(Message::Started);
        stopwatch.update(Message::FastForwardPressed);
        tick(&mut stopwatch, 2);
        assert_eq!(stopwatch.elapsed(), FAST_FORWARD_STEP * 2);

        stopwatch.update(Message::FastForwardReleased);
        tick(&mut stopwatch, 1);
        assert_eq!(stopwatch.elapsed(), FAST_FORWARD_STEP * 2 + NORMAL_STEP);
        assert!(FAST_FORWARD_STEP > NORMAL_STEP);
    }

    #[test]
    fn test_reset_zeroes_and_stops() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.update(Message::Toggled);
        stopwatch.update(Message::FastForwardPressed);
        tick(&mut stopwatch, 4);

        stopwatch.update(Message::Reset);
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        assert!(!stopwatch.is_running());
        assert!(!stopwatch.is_fast_forward());
    }

    #[test]
    fn test_on_tick_receives_new_elapsed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut stopwatch = Stopwatch::new().on_tick(move |elapsed| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(elapsed);
            }
        });
        stopwatch.update(Message::Started);
        tick(&mut stopwatch, 2);
        stopwatch.update(Message::Paused);
        tick(&mut stopwatch, 2);

        let seen = seen.lock().expect("lock");
        assert_eq!(
            *seen,
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
    }

    #[rstest]
    #[case(0, "00:00.00")]
    #[case(10, "00:00.01")]
    #[case(1_230, "00:01.23")]
    #[case(61_500, "01:01.50")]
    #[case(3_599_990, "59:59.99")]
    #[case(6_000_000, "100:00.00")]
    fn test_format_elapsed(#[case] millis: u64, #[case] expected: &str) {
        assert_eq!(format_elapsed(Duration::from_millis(millis)), expected);
    }
}
