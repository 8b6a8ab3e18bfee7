//! Showcase pages
//!
//! Each page is a [`Component`]: it owns its models (and any tickers), reacts
//! to keys and actions, and draws itself with the themed widgets.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    infrastructure::{config::Config, tui::Frame},
};

pub mod boot;
pub mod controls;
pub mod overlays;
pub mod terminal;
pub mod timer;

pub use boot::BootPage;
pub use controls::ControlsPage;
pub use overlays::OverlaysPage;
pub use terminal::TerminalPage;
pub use timer::TimerPage;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Boot,
    Controls,
    Overlays,
    Terminal,
    Timer,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Boot => "Boot",
            Self::Controls => "Controls",
            Self::Overlays => "Overlays",
            Self::Terminal => "Terminal",
            Self::Timer => "Timer",
        }
    }
}

/// Wall clock that follows tokio's timer, so paused test runtimes control it.
pub(crate) fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

pub trait Component: Send {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Called when the page becomes visible.
    fn activate(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the page is hidden. Tickers should be dropped here.
    fn deactivate(&mut self) {}

    /// While true, only control-modified global keybindings apply.
    fn captures_input(&self) -> bool {
        false
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_page_names() {
        assert_eq!("terminal".parse::<Page>().ok(), Some(Page::Terminal));
        assert_eq!("Timer".parse::<Page>().ok(), Some(Page::Timer));
        assert!("settings".parse::<Page>().is_err());
        assert_eq!(Page::iter().count(), 5);
        assert_eq!(Page::Overlays.to_string(), "overlays");
    }
}
