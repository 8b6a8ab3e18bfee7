use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Flex, prelude::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Component, Frame};
use crate::{
    action::Action,
    infrastructure::config::Config,
    model::{
        disclosure::{self, Disclosure},
        focus::{self, FocusOutcome, FocusScope},
        selection::{self, Selection},
    },
    presentation::{
        theme::{ButtonVariant, Theme},
        widgets::{
            layout::anchored_rect, Accordion, AccordionItem, Button, Dialog, DropdownMenu,
            MenuItem, Select, Separator, Tooltip,
        },
    },
};

const MENU_ITEMS: [(&str, Option<&str>); 4] = [
    ("Jack in", Some("J")),
    ("Scan network", Some("S")),
    ("Self-destruct", None),
    ("Log out", Some("Q")),
];
/// Menu rows that cannot be chosen.
const MENU_DISABLED: [usize; 1] = [2];
const CORPS: [&str; 3] = ["Arasaka", "Militech", "Kang Tao"];
const SECTIONS: [(&str, &str); 3] = [
    ("What is the Net?", "A mesh of data fortresses\nguarded by black ICE."),
    ("Is jacking in safe?", "Only with a good deck\nand a better medic."),
    ("Who runs the grid?", "Whoever holds the keys."),
];
const DIALOG_ACTIONS: [(&str, ButtonVariant); 2] = [
    ("Cancel", ButtonVariant::Outline),
    ("Purge", ButtonVariant::Destructive),
];
const SELECT_WIDTH: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Dialog,
    Menu,
    Select,
    Tooltip,
    Accordion,
}

const SLOTS: [Slot; 5] = [
    Slot::Dialog,
    Slot::Menu,
    Slot::Select,
    Slot::Tooltip,
    Slot::Accordion,
];

/// Dialog, dropdown menu, select, tooltip and accordion. Only one popup is
/// open at a time and it takes every key until it closes.
pub struct OverlaysPage {
    command_tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    focus: FocusScope,
    dialog: Disclosure,
    dialog_focus: FocusScope,
    menu: Disclosure,
    menu_selection: Selection,
    menu_anchor: Rect,
    select: Disclosure,
    corp: Selection,
    select_area: Rect,
    tooltip: Disclosure,
    tooltip_anchor: Rect,
    sections: Vec<Disclosure>,
    section_highlight: Selection,
}

impl Default for OverlaysPage {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlaysPage {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            theme: Theme::default(),
            focus: FocusScope::new(SLOTS.len()),
            dialog: Disclosure::default(),
            dialog_focus: FocusScope::trapped(DIALOG_ACTIONS.len()),
            menu: Disclosure::default(),
            menu_selection: Selection::new(MENU_ITEMS.len()).with_disabled(&MENU_DISABLED),
            menu_anchor: Rect::default(),
            select: Disclosure::default(),
            corp: Selection::new(CORPS.len()),
            select_area: Rect::default(),
            tooltip: Disclosure::default(),
            tooltip_anchor: Rect::default(),
            sections: vec![Disclosure::default(); SECTIONS.len()],
            section_highlight: Selection::new(SECTIONS.len()).wrap(false),
        }
    }

    fn slot(&self) -> Slot {
        self.focus
            .focused()
            .and_then(|index| SLOTS.get(index).copied())
            .unwrap_or(Slot::Dialog)
    }

    fn is_focused(&self, slot: Slot) -> bool {
        self.slot() == slot
    }

    fn notify(&self, message: String) -> Result<()> {
        if let Some(tx) = &self.command_tx {
            tx.send(Action::SystemMessage(message))?;
        }
        Ok(())
    }

    fn move_focus(&mut self, forward: bool) {
        let message = if forward {
            focus::Message::NextFocused
        } else {
            focus::Message::PreviousFocused
        };
        if self.focus.update(message) == FocusOutcome::Exited {
            let index = if forward { 0 } else { SLOTS.len() - 1 };
            self.focus.update(focus::Message::Focused { index });
        }
        let message = if self.is_focused(Slot::Tooltip) {
            disclosure::Message::Opened
        } else {
            disclosure::Message::Closed
        };
        self.tooltip.update(message);
    }

    /// Opening one section closes the others.
    fn toggle_section(&mut self, index: usize) {
        let Some(section) = self.sections.get_mut(index) else {
            return;
        };
        if section.update(disclosure::Message::Toggled) == Some(true) {
            for (other, section) in self.sections.iter_mut().enumerate() {
                if other != index {
                    section.update(disclosure::Message::Closed);
                }
            }
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Right => {
                self.dialog_focus.update(focus::Message::NextFocused);
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.dialog_focus.update(focus::Message::PreviousFocused);
            }
            KeyCode::Esc => {
                self.dialog.update(disclosure::Message::Closed);
            }
            KeyCode::Enter => {
                self.dialog.update(disclosure::Message::Closed);
                if self.dialog_focus.focused() == Some(1) {
                    self.notify("Cache purged".to_owned())?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Down => {
                self.menu_selection.update(selection::Message::NextHighlighted);
            }
            KeyCode::Up => {
                self.menu_selection.update(selection::Message::PreviousHighlighted);
            }
            KeyCode::Esc => {
                self.menu.update(disclosure::Message::Closed);
            }
            KeyCode::Enter => {
                self.menu_selection.update(selection::Message::Confirmed);
                self.menu.update(disclosure::Message::Closed);
                let chosen = self
                    .menu_selection
                    .selected()
                    .and_then(|index| MENU_ITEMS.get(index));
                if let Some((label, _)) = chosen {
                    self.notify(format!("Menu: {label}"))?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => {
                self.corp.update(selection::Message::NextHighlighted);
            }
            KeyCode::Up => {
                self.corp.update(selection::Message::PreviousHighlighted);
            }
            KeyCode::Enter => {
                self.corp.update(selection::Message::Confirmed);
                self.select.update(disclosure::Message::Closed);
            }
            KeyCode::Esc => {
                self.select.update(disclosure::Message::Closed);
            }
            _ => {}
        }
    }

    fn accordion(&self) -> Accordion<'static> {
        let items = SECTIONS
            .iter()
            .zip(self.sections.iter())
            .map(|(&(title, body), section)| AccordionItem::new(title, body).open(section.is_open()))
            .collect();
        let focused = if self.is_focused(Slot::Accordion) {
            self.section_highlight.highlighted()
        } else {
            None
        };
        Accordion::new(items).focused(focused).theme(self.theme)
    }
}

impl Component for OverlaysPage {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.theme = Theme::from_styles(&config.styles);
        Ok(())
    }

    fn deactivate(&mut self) {
        self.dialog.update(disclosure::Message::Closed);
        self.menu.update(disclosure::Message::Closed);
        self.select.update(disclosure::Message::Closed);
    }

    fn captures_input(&self) -> bool {
        self.dialog.is_open() || self.menu.is_open() || self.select.is_open()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.dialog.is_open() {
            self.handle_dialog_key(key)?;
            return Ok(None);
        }
        if self.menu.is_open() {
            self.handle_menu_key(key)?;
            return Ok(None);
        }
        if self.select.is_open() {
            self.handle_select_key(key);
            return Ok(None);
        }

        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match (self.slot(), key.code) {
            (_, KeyCode::Tab) => self.move_focus(true),
            (_, KeyCode::BackTab) => self.move_focus(false),
            (Slot::Dialog, _) if activate => {
                self.dialog_focus = FocusScope::trapped(DIALOG_ACTIONS.len());
                self.dialog.update(disclosure::Message::Opened);
            }
            (Slot::Menu, _) if activate => {
                self.menu.update(disclosure::Message::Opened);
            }
            (Slot::Select, _) if activate => {
                self.select.update(disclosure::Message::Opened);
            }
            (Slot::Accordion, KeyCode::Down) => {
                self.section_highlight.update(selection::Message::NextHighlighted);
            }
            (Slot::Accordion, KeyCode::Up) => {
                self.section_highlight.update(selection::Message::PreviousHighlighted);
            }
            (Slot::Accordion, _) if activate => {
                if let Some(index) = self.section_highlight.highlighted() {
                    self.toggle_section(index);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [triggers, _, separator, accordion] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let dialog_button = Button::new("Purge cache")
            .variant(ButtonVariant::Destructive)
            .focused(self.is_focused(Slot::Dialog))
            .theme(self.theme);
        let menu_button = Button::new("Actions ▾")
            .variant(ButtonVariant::Secondary)
            .focused(self.is_focused(Slot::Menu))
            .theme(self.theme);
        let tooltip_button = Button::new("Hover me")
            .variant(ButtonVariant::Outline)
            .focused(self.is_focused(Slot::Tooltip))
            .theme(self.theme);
        let [dialog_area, menu_area, select_area, tooltip_area] = Layout::horizontal([
            Constraint::Length(dialog_button.width()),
            Constraint::Length(menu_button.width()),
            Constraint::Length(SELECT_WIDTH),
            Constraint::Length(tooltip_button.width()),
        ])
        .flex(Flex::Start)
        .spacing(2)
        .areas(triggers);
        f.render_widget(dialog_button, dialog_area);
        f.render_widget(menu_button, menu_area);
        f.render_widget(tooltip_button, tooltip_area);
        self.menu_anchor = menu_area;
        self.select_area = select_area;
        self.tooltip_anchor = tooltip_area;

        f.render_widget(
            Separator::horizontal().label("faq").theme(self.theme),
            separator,
        );
        f.render_widget(self.accordion(), accordion);

        // Popups last so they sit on top.
        let select = Select::new(&CORPS)
            .placeholder("Pick a corp")
            .open(self.select.is_open())
            .focused(self.is_focused(Slot::Select))
            .theme(self.theme);
        f.render_stateful_widget(select, self.select_area, &mut self.corp);

        if self.menu.is_open() {
            let items = MENU_ITEMS
                .iter()
                .map(|&(label, shortcut)| match shortcut {
                    Some(shortcut) => MenuItem::new(label).shortcut(shortcut),
                    None => MenuItem::new(label),
                })
                .collect();
            let menu = DropdownMenu::new(items).title("actions").theme(self.theme);
            let popup = anchored_rect(self.menu_anchor, menu.width(), menu.height(), area);
            f.render_stateful_widget(menu, popup, &mut self.menu_selection);
        }
        if self.tooltip.is_open() {
            f.render_widget(
                Tooltip::new("Focus shows this hint", self.tooltip_anchor).theme(self.theme),
                area,
            );
        }
        if self.dialog.is_open() {
            let dialog = DIALOG_ACTIONS.iter().fold(
                Dialog::new("Purge cache", "Every cached shard will be wiped. Continue?"),
                |dialog, &(label, variant)| dialog.action(label, variant),
            );
            f.render_widget(
                dialog
                    .focused(self.dialog_focus.focused())
                    .theme(self.theme),
                area,
            );
        }
        Ok(())
    }
}
