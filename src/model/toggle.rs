//! Checked state for checkboxes, switches and toggle buttons.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Checked state shared by checkbox, switch and toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Mixed state; only a checkbox shows it. Toggling resolves to checked.
    Indeterminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggled,
    CheckedChanged { checked: bool },
    IndeterminateSet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    state: CheckState,
    disabled: bool,
}

impl Toggle {
    pub fn new(checked: bool) -> Self {
        Self {
            state: if checked {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            },
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state == CheckState::Checked
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the new checked value when it changed.
    pub fn update(&mut self, message: Message) -> Option<bool> {
        if self.disabled {
            return None;
        }
        let before = self.state;
        self.state = match message {
            Message::Toggled => match self.state {
                CheckState::Checked => CheckState::Unchecked,
                CheckState::Unchecked | CheckState::Indeterminate => CheckState::Checked,
            },
            Message::CheckedChanged { checked: true } => CheckState::Checked,
            Message::CheckedChanged { checked: false } => CheckState::Unchecked,
            Message::IndeterminateSet => CheckState::Indeterminate,
        };
        (before != self.state).then(|| self.is_checked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_flips_state() {
        let mut toggle = Toggle::default();
        assert_eq!(toggle.update(Message::Toggled), Some(true));
        assert!(toggle.is_checked());
        assert_eq!(toggle.update(Message::Toggled), Some(false));
        assert_eq!(toggle.state(), CheckState::Unchecked);
    }

    #[test]
    fn test_indeterminate_resolves_to_checked() {
        let mut toggle = Toggle::new(false);
        toggle.update(Message::IndeterminateSet);
        assert_eq!(toggle.state(), CheckState::Indeterminate);
        assert!(!toggle.is_checked());
        assert_eq!(toggle.update(Message::Toggled), Some(true));
    }

    #[test]
    fn test_disabled_ignores_messages() {
        let mut toggle = Toggle::new(true).disabled(true);
        assert_eq!(toggle.update(Message::Toggled), None);
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_setting_same_value_reports_no_change() {
        let mut toggle = Toggle::new(true);
        assert_eq!(toggle.update(Message::CheckedChanged { checked: true }), None);
    }

    #[test]
    fn test_check_state_parses_from_name() {
        assert_eq!(
            "indeterminate".parse::<CheckState>().ok(),
            Some(CheckState::Indeterminate)
        );
        assert_eq!(CheckState::Checked.to_string(), "checked");
    }
}
