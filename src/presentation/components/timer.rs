use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use super::{Component, Frame};
use crate::{
    action::Action,
    infrastructure::{config::Config, ticker::Ticker},
    model::{
        progress::Progress,
        stopwatch::{Message, Stopwatch, TICK_INTERVAL},
    },
    presentation::{
        theme::{Theme, Tone},
        widgets::{layout::centered_rect, ProgressBar, StopwatchView},
    },
};

/// Elapsed time between "mark" notices in the status line.
const MARK_INTERVAL: Duration = Duration::from_secs(10);

pub struct TimerPage {
    command_tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    stopwatch: Stopwatch,
    ticker: Option<Ticker>,
}

impl Default for TimerPage {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPage {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            theme: Theme::default(),
            stopwatch: Stopwatch::new(),
            ticker: None,
        }
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Keeps exactly one ticker alive while the stopwatch runs.
    fn sync_ticker(&mut self) {
        if !self.stopwatch.is_running() {
            self.ticker = None;
        } else if self.ticker.is_none() {
            if let Some(tx) = &self.command_tx {
                self.ticker = Some(Ticker::spawn(TICK_INTERVAL, tx.clone(), Action::StopwatchTick));
            }
        }
    }
}

/// Sends a notice each time elapsed time crosses a multiple of `MARK_INTERVAL`.
fn mark_notifier(tx: UnboundedSender<Action>) -> impl FnMut(Duration) + Send + 'static {
    let mut last_mark = 0;
    move |elapsed| {
        let mark = elapsed.as_millis() / MARK_INTERVAL.as_millis();
        if mark > last_mark {
            last_mark = mark;
            let seconds = mark * MARK_INTERVAL.as_millis() / 1000;
            if tx.send(Action::SystemMessage(format!("T+{seconds}s"))).is_err() {
                log::debug!("Stopwatch mark dropped, receiver closed");
            }
        } else if mark < last_mark {
            last_mark = mark;
        }
    }
}

impl Component for TimerPage {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.stopwatch = Stopwatch::new().on_tick(mark_notifier(tx.clone()));
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.theme = Theme::from_styles(&config.styles);
        Ok(())
    }

    fn activate(&mut self) -> Result<()> {
        self.sync_ticker();
        Ok(())
    }

    fn deactivate(&mut self) {
        self.ticker = None;
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let message = match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Message::Toggled,
            KeyCode::Char('r') => Message::Reset,
            KeyCode::Char('f') => Message::FastForwardToggled,
            _ => return Ok(None),
        };
        self.stopwatch.update(message);
        self.sync_ticker();
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::StopwatchTick {
            self.stopwatch.update(Message::Ticked);
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [_, watch, _, seconds, _, hint] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        f.render_widget(
            StopwatchView::new(&self.stopwatch).theme(self.theme),
            centered_rect(watch, 32, 6),
        );

        let within_minute = self.stopwatch.elapsed().as_secs_f64() % 60.0;
        let label = format!("{within_minute:.0}s / 60s");
        let tone = if self.stopwatch.is_fast_forward() {
            Tone::Warning
        } else {
            Tone::Default
        };
        f.render_widget(
            ProgressBar::new(Progress::with_max(within_minute, 60.0))
                .label(&label)
                .tone(tone)
                .theme(self.theme),
            centered_rect(seconds, 32, 1),
        );
        f.render_widget(
            Line::styled(
                "Space start/pause  f fast-forward  r reset",
                self.theme.muted_text(),
            )
            .centered(),
            hint,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_follows_running_state() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = TimerPage::new();
        page.register_action_handler(tx).expect("registered");

        page.handle_key_event(key(' ')).expect("handled");
        assert!(page.is_ticking());
        for _ in 0..5 {
            let action = rx.recv().await.expect("tick");
            page.update(action).expect("updated");
        }
        assert_eq!(page.stopwatch().elapsed(), Duration::from_millis(50));

        page.handle_key_event(key(' ')).expect("handled");
        assert!(!page.is_ticking());

        page.handle_key_event(key('r')).expect("handled");
        assert_eq!(page.stopwatch().elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deactivate_drops_ticker() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut page = TimerPage::new();
        page.register_action_handler(tx).expect("registered");
        page.handle_key_event(key(' ')).expect("handled");
        page.deactivate();
        assert!(!page.is_ticking());

        page.activate().expect("activated");
        assert!(page.is_ticking());
    }

    #[test]
    fn test_mark_notifier_fires_once_per_mark() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut notify = mark_notifier(tx);
        notify(Duration::from_millis(9_990));
        notify(Duration::from_millis(10_000));
        notify(Duration::from_millis(10_100));
        notify(Duration::from_millis(20_000));

        assert_eq!(rx.try_recv().ok(), Some(Action::SystemMessage("T+10s".to_owned())));
        assert_eq!(rx.try_recv().ok(), Some(Action::SystemMessage("T+20s".to_owned())));
        assert!(rx.try_recv().is_err());
    }
}
