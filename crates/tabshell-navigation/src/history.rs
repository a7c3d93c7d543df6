//! Per-tab navigation history

use serde::Serialize;

/// Visited URLs of one tab, oldest first, with a cursor.
///
/// Never empty; the cursor always points at an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabHistory {
    entries: Vec<String>,
    index: usize,
}

impl TabHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Record a new navigation. Entries ahead of the cursor are dropped
    /// first, then the cursor moves to the appended URL.
    pub fn push(&mut self, url: impl Into<String>) {
        if self.index + 1 < self.entries.len() {
            let pruned = self.entries.len() - self.index - 1;
            self.entries.truncate(self.index + 1);
            tracing::debug!(pruned, "Pruned forward history");
        }

        self.entries.push(url.into());
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry, returning the new current URL.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one entry, returning the new current URL.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index < self.entries.len() - 1
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

}
