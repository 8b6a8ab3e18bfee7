use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use super::{now, Component, Frame};
use crate::{
    action::Action,
    infrastructure::{config::Config, ticker::Ticker},
    model::boot_sequence::{BootSequence, Message},
    presentation::{
        theme::Theme,
        widgets::{layout::centered_rect, BootScreen},
    },
};

pub const BOOT_TICK: Duration = Duration::from_millis(16);
const SCREEN_WIDTH: u16 = 64;
const SCREEN_HEIGHT: u16 = 12;

/// Plays the scripted boot log, then hands over with [`Action::BootFinished`].
pub struct BootPage {
    command_tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    frame: u64,
    sequence: BootSequence,
    ticker: Option<Ticker>,
}

impl Default for BootPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BootPage {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            theme: Theme::default(),
            frame: 0,
            sequence: BootSequence::new(Vec::new()),
            ticker: None,
        }
    }

    pub fn sequence(&self) -> &BootSequence {
        &self.sequence
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    fn stop_when_complete(&mut self) {
        if self.sequence.is_complete() {
            self.ticker = None;
        }
    }
}

impl Component for BootPage {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.theme = Theme::from_styles(&config.styles);
        let mut sequence = BootSequence::new(config.boot.messages.clone())
            .with_typing_speed(config.boot.typing_speed())
            .with_grace_period(config.boot.grace_period());
        if let Some(tx) = self.command_tx.clone() {
            sequence = sequence.on_complete(move || {
                if let Err(e) = tx.send(Action::BootFinished) {
                    log::warn!("Failed to report boot completion: {e}");
                }
            });
        }
        self.sequence = sequence;
        Ok(())
    }

    fn activate(&mut self) -> Result<()> {
        self.sequence.update(Message::Started { now: Some(now()) });
        if !self.sequence.is_complete() && self.ticker.is_none() {
            if let Some(tx) = &self.command_tx {
                self.ticker = Some(Ticker::spawn(BOOT_TICK, tx.clone(), Action::BootTick));
            }
        }
        Ok(())
    }

    fn deactivate(&mut self) {
        self.ticker = None;
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.sequence.update(Message::Skipped);
            self.stop_when_complete();
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::BootTick => {
                self.sequence.update(Message::Ticked { now: Some(now()) });
                self.stop_when_complete();
            }
            Action::Render => self.frame = self.frame.wrapping_add(1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [screen, hint] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        f.render_widget(
            BootScreen::new(&self.sequence)
                .theme(self.theme)
                .frame(self.frame),
            centered_rect(screen, SCREEN_WIDTH, SCREEN_HEIGHT),
        );
        f.render_widget(
            Line::styled("press Enter to skip", self.theme.muted_text()).centered(),
            hint,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::boot_sequence::BootMessage;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn config() -> Config {
        let mut config = Config::default();
        config.boot.typing_speed_ms = 0;
        config.boot.grace_period_ms = 50;
        config.boot.messages = vec![
            BootMessage::new("[ OK ] one", Duration::ZERO),
            BootMessage::new("[ OK ] two", Duration::from_millis(30)),
        ];
        config
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_ticks_until_finished() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = BootPage::new();
        page.register_action_handler(tx).expect("registered");
        page.register_config_handler(&config()).expect("configured");
        page.activate().expect("activated");
        assert!(page.is_ticking());

        let mut finished = 0;
        while let Some(action) = rx.recv().await {
            match action {
                Action::BootTick => {
                    page.update(action).expect("updated");
                }
                Action::BootFinished => {
                    finished += 1;
                    break;
                }
                _ => {}
            }
        }
        assert_eq!(finished, 1);
        assert!(page.sequence().is_complete());
        assert!(!page.is_ticking());
        assert_eq!(page.sequence().visible_lines().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_skips() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = BootPage::new();
        page.register_action_handler(tx).expect("registered");
        page.register_config_handler(&config()).expect("configured");
        page.activate().expect("activated");

        page.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .expect("handled");
        assert!(page.sequence().is_complete());
        assert!(!page.is_ticking());
        assert_eq!(rx.try_recv().ok(), Some(Action::BootFinished));

        page.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .expect("handled");
        assert!(rx.try_recv().is_err());
    }
}
