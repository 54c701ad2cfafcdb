//! Command History
//!
//! Submitted lines, most recent first, with a browsing cursor. The cursor
//! is `None` while the user is not browsing (the classic `-1`).

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Step towards older entries, clamping at the oldest one.
    ///
    /// Returns the line to place in the input, or `None` when there is no
    /// history at all.
    pub fn recall_older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.cursor = Some(next);
        self.get(next)
    }

    /// Step towards newer entries.
    ///
    /// Leaving the newest entry stops browsing and yields the empty line.
    /// Returns `None` (nothing to do) when not browsing or history is empty.
    pub fn recall_newer(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let current = self.cursor?;
        match current.checked_sub(1) {
            Some(prev) => {
                self.cursor = Some(prev);
                self.get(prev)
            }
            None => {
                self.cursor = None;
                Some("")
            }
        }
    }
}
