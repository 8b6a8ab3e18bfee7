//! Focus cycling across the slots of a page or a trapped dialog.

/// Where focus went after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    Moved(usize),
    /// Moved past the first or last slot of an untrapped scope.
    Exited,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextFocused,
    PreviousFocused,
    Focused { index: usize },
}

/// Tab-order focus over `len` slots.
///
/// A trapped scope (an open dialog) wraps around and never reports
/// [`FocusOutcome::Exited`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusScope {
    len: usize,
    focused: usize,
    trapped: bool,
}

impl FocusScope {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: 0,
            trapped: false,
        }
    }

    pub fn trapped(len: usize) -> Self {
        Self {
            trapped: true,
            ..Self::new(len)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    pub fn focused(&self) -> Option<usize> {
        (self.len > 0).then_some(self.focused)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused() == Some(index)
    }

    pub fn update(&mut self, message: Message) -> FocusOutcome {
        if self.len == 0 {
            return FocusOutcome::Unchanged;
        }
        let last = self.len - 1;
        let target = match message {
            Message::NextFocused if self.focused < last => self.focused + 1,
            Message::NextFocused if self.trapped => 0,
            Message::PreviousFocused if self.focused > 0 => self.focused - 1,
            Message::PreviousFocused if self.trapped => last,
            Message::NextFocused | Message::PreviousFocused => return FocusOutcome::Exited,
            Message::Focused { index } if index <= last => index,
            Message::Focused { .. } => return FocusOutcome::Unchanged,
        };
        if target == self.focused {
            return FocusOutcome::Unchanged;
        }
        self.focused = target;
        FocusOutcome::Moved(target)
    }
}
