use std::time::Duration;

use chrono::Local;
use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use super::{now, Component, Frame};
use crate::{
    action::Action,
    infrastructure::{config::Config, ticker::Ticker},
    model::terminal::{Message, Terminal},
    presentation::{theme::Theme, widgets::TerminalView},
    utils,
};

/// Slowest redraw cadence while output is being typed.
const MIN_TICK: Duration = Duration::from_millis(10);

const COMMANDS: [(&str, &str); 7] = [
    ("help", "list commands"),
    ("whoami", "print the current user"),
    ("date", "print the local time"),
    ("echo", "print its arguments"),
    ("status", "show uplink status"),
    ("version", "print the build version"),
    ("clear", "clear the screen"),
];

/// Built-in command set for the showcase shell.
pub fn run_command(command: &str) -> Vec<String> {
    let (name, args) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, args)| (name, args.trim()));
    match name {
        "help" => COMMANDS
            .iter()
            .map(|(name, about)| format!("{name:<8} {about}"))
            .collect(),
        "whoami" => vec!["netrunner".to_owned()],
        "date" => vec![Local::now().format("%a %b %e %H:%M:%S %Y").to_string()],
        "echo" => vec![args.to_owned()],
        "status" => vec![
            "uplink    [ONLINE]".to_owned(),
            "ice       [ACTIVE]".to_owned(),
            "trace     [NONE]".to_owned(),
        ],
        "version" => utils::version().lines().map(str::to_owned).collect(),
        _ => vec![format!("command not found: {name}")],
    }
}

/// An interactive shell. The page keeps a ticker alive only while output is
/// still being typed.
pub struct TerminalPage {
    command_tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    frame: u64,
    terminal: Terminal,
    tick: Duration,
    ticker: Option<Ticker>,
    active: bool,
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPage {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            theme: Theme::default(),
            frame: 0,
            terminal: Terminal::default().with_handler(run_command),
            tick: MIN_TICK,
            ticker: None,
            active: false,
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    fn sync_ticker(&mut self) {
        if !self.active || !self.terminal.is_animating() {
            self.ticker = None;
        } else if self.ticker.is_none() {
            if let Some(tx) = &self.command_tx {
                self.ticker = Some(Ticker::spawn(self.tick, tx.clone(), Action::TerminalTick));
            }
        }
    }
}

impl Component for TerminalPage {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.theme = Theme::from_styles(&config.styles);
        let settings = &config.terminal;
        let mut terminal = Terminal::new(settings.prompt.clone())
            .with_handler(run_command)
            .with_typing_speed(settings.typing_speed());
        if let Some(limit) = settings.history_limit {
            terminal = terminal.with_history_limit(limit);
        }
        let mut banner = vec![format!(
            "Last login: {}",
            Local::now().format("%a %b %e %H:%M:%S")
        )];
        banner.extend(settings.welcome.iter().cloned());
        terminal.update(Message::SystemLinesQueued { lines: banner });

        self.terminal = terminal;
        self.tick = settings.typing_speed().max(MIN_TICK);
        Ok(())
    }

    fn activate(&mut self) -> Result<()> {
        self.active = true;
        self.terminal.update(Message::Ticked { now: Some(now()) });
        self.sync_ticker();
        Ok(())
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.ticker = None;
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.terminal.update(Message::KeyEventReceived { event: key });
        self.terminal.update(Message::Ticked { now: Some(now()) });
        self.sync_ticker();
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TerminalTick => {
                self.terminal.update(Message::Ticked { now: Some(now()) });
                self.sync_ticker();
            }
            Action::Render => self.frame = self.frame.wrapping_add(1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(
            TerminalView::new(&self.terminal)
                .title("neon-shell")
                .theme(self.theme)
                .frame(self.frame),
            area,
        );
        Ok(())
    }
}
