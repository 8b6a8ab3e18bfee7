//! Shell command history with newest-first browsing.

/// Result of moving toward newer history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// A newer entry is now selected.
    Entry(String),
    /// Moved past the newest entry; browsing has stopped.
    Cleared,
    /// Not browsing, nothing to do.
    Unchanged,
}

/// Shell-like command history.
///
/// `cursor` is the offset from the newest entry while browsing, `None`
/// otherwise. It always satisfies `cursor < entries.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn newest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        if let Some(limit) = self.limit {
            let overflow = self.entries.len().saturating_sub(limit);
            self.entries.drain(..overflow);
        }
        self.cursor = None;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step toward older entries, stopping at the oldest one.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let offset = self.cursor.map_or(0, |c| (c + 1).min(oldest));
        self.cursor = Some(offset);
        self.entry_at(offset)
    }

    /// Step toward newer entries; stepping past the newest stops browsing.
    pub fn next(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(offset) => {
                self.cursor = Some(offset - 1);
                self.entry_at(offset - 1)
                    .map(|entry| Recall::Entry(entry.to_owned()))
                    .unwrap_or(Recall::Cleared)
            }
        }
    }

    fn entry_at(&self, offset: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(offset + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
