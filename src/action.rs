use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Help,
    NextPage,
    PreviousPage,
    Key(KeyEvent),
    BootTick,
    BootFinished,
    StopwatchTick,
    TerminalTick,
    SystemMessage(String),
}

impl Action {
    /// Actions emitted by widget tickers; too chatty to log.
    pub fn is_periodic(&self) -> bool {
        matches!(
            self,
            Action::Tick
                | Action::Render
                | Action::BootTick
                | Action::StopwatchTick
                | Action::TerminalTick
        )
    }
}
