//! Open/closed state for popups and collapsible sections.

/// Open/closed state for dialogs, accordion items, tooltips and popovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Opened,
    Closed,
    Toggled,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the new open state when it changed.
    pub fn update(&mut self, message: Message) -> Option<bool> {
        let before = self.open;
        self.open = match message {
            Message::Opened => true,
            Message::Closed => false,
            Message::Toggled => !self.open,
        };
        (before != self.open).then_some(self.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_toggle() {
        let mut disclosure = Disclosure::default();
        assert!(!disclosure.is_open());
        assert_eq!(disclosure.update(Message::Opened), Some(true));
        assert_eq!(disclosure.update(Message::Opened), None);
        assert_eq!(disclosure.update(Message::Toggled), Some(false));
        assert_eq!(disclosure.update(Message::Closed), None);
    }
}
