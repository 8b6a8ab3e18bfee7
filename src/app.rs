use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use strum::IntoEnumIterator;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    action::Action,
    infrastructure::{
        config::Config,
        tui::{Event, Frame, TuiLike},
    },
    model::{
        disclosure::{self, Disclosure},
        selection::{self, Selection},
    },
    presentation::{
        components::{
            BootPage, Component, ControlsPage, OverlaysPage, Page, TerminalPage, TimerPage,
        },
        theme::Theme,
        widgets::{Dialog, TabBar},
    },
};

const HELP_WIDTH: u16 = 44;

enum Incoming {
    Event(Option<Event>),
    Action(Option<Action>),
}

pub struct App {
    config: Config,
    theme: Theme,
    pages: Vec<(Page, Box<dyn Component>)>,
    page_titles: Vec<&'static str>,
    tabs: Selection,
    help: Disclosure,
    status: Option<String>,
    should_quit: bool,
    should_suspend: bool,
    last_tick_key_events: Vec<KeyEvent>,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: Config, start: Page) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let mut pages: Vec<(Page, Box<dyn Component>)> = Page::iter()
            .map(|page| {
                let component: Box<dyn Component> = match page {
                    Page::Boot => Box::new(BootPage::new()),
                    Page::Controls => Box::new(ControlsPage::new()),
                    Page::Overlays => Box::new(OverlaysPage::new()),
                    Page::Terminal => Box::new(TerminalPage::new()),
                    Page::Timer => Box::new(TimerPage::new()),
                };
                (page, component)
            })
            .collect();
        for (_, component) in pages.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }
        for (_, component) in pages.iter_mut() {
            component.register_config_handler(&config)?;
        }

        let start_index = pages.iter().position(|(page, _)| *page == start).unwrap_or(0);
        Ok(Self {
            theme: Theme::from_styles(&config.styles),
            config,
            page_titles: pages.iter().map(|(page, _)| page.title()).collect(),
            tabs: Selection::new(pages.len())
                .follows_highlight(true)
                .with_selected(start_index),
            pages,
            help: Disclosure::default(),
            status: None,
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            action_tx,
            action_rx,
        })
    }

    pub fn page(&self) -> Page {
        self.current_index()
            .and_then(|index| self.pages.get(index))
            .map(|(page, _)| *page)
            .unwrap_or_default()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_help_open(&self) -> bool {
        self.help.is_open()
    }

    fn current_index(&self) -> Option<usize> {
        self.tabs.selected()
    }

    fn current(&mut self) -> Option<&mut Box<dyn Component>> {
        let index = self.current_index()?;
        self.pages.get_mut(index).map(|(_, component)| component)
    }

    pub async fn run(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        tui.enter()?;
        if let Some(component) = self.current() {
            component.activate()?;
        }

        loop {
            let incoming = tokio::select! {
                event = tui.next() => Incoming::Event(event),
                action = self.action_rx.recv() => Incoming::Action(action),
            };
            match incoming {
                Incoming::Event(Some(event)) => self.handle_event(event)?,
                Incoming::Event(None) => self.should_quit = true,
                Incoming::Action(Some(action)) => self.dispatch(action, tui)?,
                Incoming::Action(None) => {}
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.dispatch(action, tui)?;
            }

            if self.should_suspend {
                tui.suspend()?;
                self.action_tx.send(Action::Resume)?;
                tui.resume()?;
            } else if self.should_quit {
                break;
            }
        }

        for (_, component) in self.pages.iter_mut() {
            component.deactivate();
        }
        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit => self.action_tx.send(Action::Quit)?,
            Event::Tick => self.action_tx.send(Action::Tick)?,
            Event::Render => self.action_tx.send(Action::Render)?,
            Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Error => self
                .action_tx
                .send(Action::Error("Terminal input error".to_owned()))?,
            Event::Init
            | Event::Closed
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Mouse(_) => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if self.help.is_open() && key.code == KeyCode::Esc {
            self.help.update(disclosure::Message::Closed);
            return Ok(());
        }

        let captures_input = self
            .current()
            .is_some_and(|component| component.captures_input());
        // While a page takes text, plain keys belong to it.
        let bindings_apply = !captures_input || key.modifiers.contains(KeyModifiers::CONTROL);
        if bindings_apply {
            if let Some(action) = self.config.keybindings.get([key].as_slice()).cloned() {
                log::info!("Got action: {action:?}");
                self.last_tick_key_events.clear();
                self.action_tx.send(action)?;
                return Ok(());
            }
            self.last_tick_key_events.push(key);
            if let Some(action) = self
                .config
                .keybindings
                .get(&self.last_tick_key_events)
                .cloned()
            {
                log::info!("Got action: {action:?}");
                self.last_tick_key_events.clear();
                self.action_tx.send(action)?;
                return Ok(());
            }
        }

        if self.help.is_open() {
            return Ok(());
        }
        self.action_tx.send(Action::Key(key))?;
        Ok(())
    }

    fn switch_page(&mut self, message: selection::Message) -> Result<()> {
        let before = self.current_index();
        self.tabs.update(message);
        if self.current_index() == before {
            return Ok(());
        }
        if let Some((_, component)) = before.and_then(|index| self.pages.get_mut(index)) {
            component.deactivate();
        }
        if let Some(component) = self.current() {
            component.activate()?;
        }
        log::debug!("Switched to page {}", self.page());
        Ok(())
    }

    fn dispatch(&mut self, action: Action, tui: &mut dyn TuiLike) -> Result<()> {
        if !action.is_periodic() {
            log::debug!("{action:?}");
        }
        match &action {
            Action::Tick => self.last_tick_key_events.clear(),
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Resize(w, h) => {
                tui.resize(Rect::new(0, 0, *w, *h))?;
                self.render(tui)?;
            }
            Action::Render => self.render(tui)?,
            Action::Error(message) => {
                log::error!("{message}");
                self.status = Some(format!("error: {message}"));
            }
            Action::Help => {
                self.help.update(disclosure::Message::Toggled);
            }
            Action::NextPage => self.switch_page(selection::Message::NextHighlighted)?,
            Action::PreviousPage => self.switch_page(selection::Message::PreviousHighlighted)?,
            Action::BootFinished if self.page() == Page::Boot => {
                let index = self
                    .pages
                    .iter()
                    .position(|(page, _)| *page == Page::Controls)
                    .unwrap_or(0);
                self.switch_page(selection::Message::Selected { index })?;
            }
            Action::SystemMessage(message) => self.status = Some(message.clone()),
            Action::Key(key) => {
                let key = *key;
                let follow_up = match self.current() {
                    Some(component) => component.handle_key_event(key)?,
                    None => None,
                };
                if let Some(action) = follow_up {
                    self.action_tx.send(action)?;
                }
                return Ok(());
            }
            _ => {}
        }

        for (_, component) in self.pages.iter_mut() {
            if let Some(action) = component.update(action.clone())? {
                self.action_tx.send(action)?;
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        let mut draw_error = None;
        tui.draw(&mut |f: &mut Frame<'_>| {
            if let Err(e) = self.draw(f) {
                draw_error = Some(e);
            }
        })?;
        if let Some(e) = draw_error {
            self.action_tx
                .send(Action::Error(format!("Failed to draw: {e:?}")))?;
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame<'_>) -> Result<()> {
        let area = f.area();
        f.buffer_mut().set_style(area, self.theme.base());
        let [tabs, main, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(
            TabBar::new(&self.tabs, &self.page_titles).theme(self.theme),
            tabs,
        );
        if let Some(index) = self.current_index() {
            if let Some((_, component)) = self.pages.get_mut(index) {
                component.draw(f, main.inner(Margin::new(1, 0)))?;
            }
        }

        let [message, hint] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(status);
        f.render_widget(
            Line::styled(self.status.clone().unwrap_or_default(), self.theme.muted_text()),
            message,
        );
        f.render_widget(
            Line::styled("? help", self.theme.muted_text()).right_aligned(),
            hint,
        );

        if self.help.is_open() {
            let rows: Vec<Line<'_>> = self
                .config
                .keybindings
                .describe()
                .into_iter()
                .map(|(keys, action)| {
                    Line::from(vec![
                        Span::styled(format!("{keys:<16}"), Style::default().fg(self.theme.primary)),
                        Span::styled(action, self.theme.text()),
                    ])
                })
                .collect();
            f.render_widget(
                Dialog::new("Keys", rows).width(HELP_WIDTH).theme(self.theme),
                area,
            );
        }
        Ok(())
    }
}
