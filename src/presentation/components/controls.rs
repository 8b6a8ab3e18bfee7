use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Flex, prelude::*};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::{Component, Frame};
use crate::{
    action::Action,
    infrastructure::config::Config,
    model::{
        focus::{self, FocusOutcome, FocusScope},
        progress::Progress,
        selection::{self, Selection},
        toggle::{self, Toggle},
    },
    presentation::{
        theme::{Animation, BadgeVariant, ButtonVariant, CardVariant, Glow, Size, Theme, Tone},
        widgets::{Badge, Button, Card, Checkbox, Input, ProgressBar, RadioGroup, Switch, ToggleButton},
    },
};

const SIZES: [&str; 3] = ["sm", "default", "lg"];
const PROGRESS_STEP: f64 = 10.0;

/// Focus slots, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Buttons,
    Disabled,
    Pulse,
    Glow,
    Size,
    Callsign,
    Progress,
}

const SLOTS: [Slot; 7] = [
    Slot::Buttons,
    Slot::Disabled,
    Slot::Pulse,
    Slot::Glow,
    Slot::Size,
    Slot::Callsign,
    Slot::Progress,
];

/// Buttons, badges, toggles, a radio group, a text field, a progress bar and
/// cards. The toggles restyle the button row.
pub struct ControlsPage {
    command_tx: Option<UnboundedSender<Action>>,
    theme: Theme,
    frame: u64,
    focus: FocusScope,
    buttons: Selection,
    disabled: Toggle,
    pulse: Toggle,
    glow: Toggle,
    size: Selection,
    callsign: TextArea<'static>,
    progress: Progress,
}

impl Default for ControlsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlsPage {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            theme: Theme::default(),
            frame: 0,
            focus: FocusScope::new(SLOTS.len()),
            buttons: Selection::new(ButtonVariant::iter().count()),
            disabled: Toggle::default(),
            pulse: Toggle::default(),
            glow: Toggle::default(),
            size: Selection::new(SIZES.len())
                .follows_highlight(true)
                .with_selected(1),
            callsign: TextArea::default(),
            progress: Progress::new(40.0),
        }
    }

    fn slot(&self) -> Slot {
        self.focus
            .focused()
            .and_then(|index| SLOTS.get(index).copied())
            .unwrap_or(Slot::Buttons)
    }

    fn is_focused(&self, slot: Slot) -> bool {
        self.slot() == slot
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
    }

    fn button_size(&self) -> Size {
        match self.size.selected() {
            Some(0) => Size::Sm,
            Some(2) => Size::Lg,
            _ => Size::Default,
        }
    }

    fn notify(&self, message: String) -> Result<()> {
        if let Some(tx) = &self.command_tx {
            tx.send(Action::SystemMessage(message))?;
        }
        Ok(())
    }

    fn press_button(&self) -> Result<()> {
        if self.disabled.is_checked() {
            return Ok(());
        }
        let variant = self
            .buttons
            .highlighted()
            .and_then(|index| ButtonVariant::iter().nth(index))
            .unwrap_or_default();
        self.notify(format!("[{variant}] button pressed"))
    }

    fn toggle_for(&mut self, slot: Slot) -> Option<&mut Toggle> {
        match slot {
            Slot::Disabled => Some(&mut self.disabled),
            Slot::Pulse => Some(&mut self.pulse),
            Slot::Glow => Some(&mut self.glow),
            _ => None,
        }
    }

    fn draw_buttons(&self, f: &mut Frame<'_>, area: Rect) {
        let size = self.button_size();
        let buttons: Vec<Button<'_>> = ButtonVariant::iter()
            .enumerate()
            .map(|(index, variant)| {
                Button::new(variant.into())
                    .variant(variant)
                    .size(size)
                    .glow(if self.glow.is_checked() {
                        Glow::Intense
                    } else {
                        Glow::None
                    })
                    .animation(if self.pulse.is_checked() {
                        Animation::Pulse
                    } else {
                        Animation::None
                    })
                    .disabled(self.disabled.is_checked())
                    .focused(
                        self.is_focused(Slot::Buttons) && self.buttons.highlighted() == Some(index),
                    )
                    .theme(self.theme)
                    .frame(self.frame)
            })
            .collect();
        let rects = Layout::horizontal(buttons.iter().map(|b| Constraint::Length(b.width())))
            .flex(Flex::Start)
            .spacing(1)
            .split(area);
        for (button, rect) in buttons.into_iter().zip(rects.iter()) {
            let height = button.height();
            f.render_widget(button, Rect { height, ..*rect });
        }
    }

    fn draw_badges(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::new();
        for variant in BadgeVariant::iter() {
            spans.push(
                Badge::new(variant.into())
                    .variant(variant)
                    .theme(self.theme)
                    .into_span(),
            );
            spans.push(Span::raw(" "));
        }
        f.render_widget(Line::from(spans), area);
    }

    fn draw_cards(&self, f: &mut Frame<'_>, area: Rect) {
        let rects = Layout::horizontal([Constraint::Fill(1); 4]).spacing(1).split(area);
        for (variant, rect) in CardVariant::iter().zip(rects.iter()) {
            let card = Card::new()
                .title(<&'static str>::from(variant))
                .body(match variant {
                    CardVariant::Terminal => "uptime 42d",
                    CardVariant::Glow => "signal strong",
                    CardVariant::Elevated => "above the grid",
                    CardVariant::Default => "plain panel",
                })
                .variant(variant)
                .theme(self.theme);
            f.render_widget(card, *rect);
        }
    }
}

impl Component for ControlsPage {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: &Config) -> Result<()> {
        self.theme = Theme::from_styles(&config.styles);
        Ok(())
    }

    fn captures_input(&self) -> bool {
        self.is_focused(Slot::Callsign)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                return Ok(None);
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                return Ok(None);
            }
            _ => {}
        }

        let slot = self.slot();
        match (slot, key.code) {
            (Slot::Buttons, KeyCode::Right) => {
                self.buttons.update(selection::Message::NextHighlighted);
            }
            (Slot::Buttons, KeyCode::Left) => {
                self.buttons.update(selection::Message::PreviousHighlighted);
            }
            (Slot::Buttons, KeyCode::Enter | KeyCode::Char(' ')) => self.press_button()?,
            (Slot::Disabled | Slot::Pulse | Slot::Glow, KeyCode::Enter | KeyCode::Char(' ')) => {
                if let Some(toggle) = self.toggle_for(slot) {
                    toggle.update(toggle::Message::Toggled);
                }
            }
            (Slot::Size, KeyCode::Down) => {
                self.size.update(selection::Message::NextHighlighted);
            }
            (Slot::Size, KeyCode::Up) => {
                self.size.update(selection::Message::PreviousHighlighted);
            }
            (Slot::Callsign, KeyCode::Enter) => {
                let callsign = self.callsign.lines().concat();
                let callsign = callsign.trim();
                if !callsign.is_empty() {
                    self.notify(format!("Callsign set to {callsign}"))?;
                }
            }
            (Slot::Callsign, KeyCode::Esc) => self.move_focus(true),
            (Slot::Callsign, _) => {
                self.callsign.input(key);
            }
            (Slot::Progress, KeyCode::Right) => {
                self.progress.set(self.progress.value() + PROGRESS_STEP);
            }
            (Slot::Progress, KeyCode::Left) => {
                self.progress.set(self.progress.value() - PROGRESS_STEP);
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Render {
            self.frame = self.frame.wrapping_add(1);
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [buttons, badges, _, body, cards] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(4),
        ])
        .areas(area);
        self.draw_buttons(f, buttons);
        self.draw_badges(f, badges);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .spacing(2)
                .areas(body);
        let [disabled, pulse, glow, _, size] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(left);
        f.render_widget(
            Checkbox::new(&self.disabled, "disable buttons")
                .focused(self.is_focused(Slot::Disabled))
                .theme(self.theme),
            disabled,
        );
        f.render_widget(
            Switch::new(&self.pulse, "pulse")
                .focused(self.is_focused(Slot::Pulse))
                .theme(self.theme),
            pulse,
        );
        f.render_widget(
            ToggleButton::new(&self.glow, "glow")
                .focused(self.is_focused(Slot::Glow))
                .theme(self.theme),
            glow,
        );
        f.render_widget(
            RadioGroup::new(&self.size, &SIZES)
                .focused(self.is_focused(Slot::Size))
                .theme(self.theme),
            size,
        );

        let [callsign, _, progress] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(right);
        f.render_widget(
            Input::new(&self.callsign)
                .title("callsign")
                .placeholder("type a handle, Enter to set")
                .focused(self.is_focused(Slot::Callsign))
                .theme(self.theme),
            callsign,
        );
        let tone = if self.progress.is_complete() {
            Tone::Success
        } else if self.is_focused(Slot::Progress) {
            Tone::Warning
        } else {
            Tone::Default
        };
        f.render_widget(
            ProgressBar::new(self.progress).tone(tone).theme(self.theme),
            progress,
        );

        self.draw_cards(f, cards);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focus_slot(page: &mut ControlsPage, slot: Slot) {
        while page.slot() != slot {
            page.handle_key_event(key(KeyCode::Tab)).expect("handled");
        }
    }

    #[test]
    fn test_tab_cycles_through_all_slots() {
        let mut page = ControlsPage::new();
        assert_eq!(page.slot(), Slot::Buttons);
        for _ in 0..SLOTS.len() {
            page.handle_key_event(key(KeyCode::Tab)).expect("handled");
        }
        assert_eq!(page.slot(), Slot::Buttons);
        page.handle_key_event(key(KeyCode::BackTab)).expect("handled");
        assert_eq!(page.slot(), Slot::Progress);
    }

    #[test]
    fn test_button_press_reports_variant() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = ControlsPage::new();
        page.register_action_handler(tx).expect("registered");

        page.handle_key_event(key(KeyCode::Right)).expect("handled");
        page.handle_key_event(key(KeyCode::Enter)).expect("handled");
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::SystemMessage("[primary] button pressed".to_owned()))
        );
    }

    #[test]
    fn test_disabled_buttons_do_not_press() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = ControlsPage::new();
        page.register_action_handler(tx).expect("registered");

        focus_slot(&mut page, Slot::Disabled);
        page.handle_key_event(key(KeyCode::Char(' '))).expect("handled");
        assert!(page.disabled.is_checked());

        focus_slot(&mut page, Slot::Buttons);
        page.handle_key_event(key(KeyCode::Enter)).expect("handled");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_size_radio_changes_button_size() {
        let mut page = ControlsPage::new();
        assert_eq!(page.button_size(), Size::Default);
        focus_slot(&mut page, Slot::Size);
        page.handle_key_event(key(KeyCode::Down)).expect("handled");
        assert_eq!(page.button_size(), Size::Lg);
        page.handle_key_event(key(KeyCode::Down)).expect("handled");
        assert_eq!(page.button_size(), Size::Sm);
    }

    #[test]
    fn test_callsign_captures_input() {
        let mut page = ControlsPage::new();
        focus_slot(&mut page, Slot::Callsign);
        assert!(page.captures_input());
        for c in "neo".chars() {
            page.handle_key_event(key(KeyCode::Char(c))).expect("handled");
        }
        assert_eq!(page.callsign.lines().concat(), "neo");

        page.handle_key_event(key(KeyCode::Esc)).expect("handled");
        assert!(!page.captures_input());
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut page = ControlsPage::new();
        focus_slot(&mut page, Slot::Progress);
        for _ in 0..20 {
            page.handle_key_event(key(KeyCode::Right)).expect("handled");
        }
        assert_eq!(page.progress.percent(), 100);
        for _ in 0..20 {
            page.handle_key_event(key(KeyCode::Left)).expect("handled");
        }
        assert_eq!(page.progress.percent(), 0);
    }
}
