//! Tab Manager
//!
//! Owns the ordered tab strip. Display order is insertion order and the
//! strip is never empty.

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabManager {
    /// Tabs in display order
    tabs: Vec<Tab>,
    /// Always refers to an entry of `tabs`
    active_tab_id: u64,
    /// Next id to hand out
    next_tab_id: u64,
}

impl TabManager {
    /// A strip holding one blank tab with id 1
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::blank(1)],
            active_tab_id: 1,
            next_tab_id: 2,
        }
    }

    /// Append a tab seeded with `start_url` and make it active
    pub fn add_tab(&mut self, start_url: &str) -> &Tab {
        let id = self.next_tab_id;
        self.next_tab_id += 1;

        self.tabs.push(Tab::seeded(id, start_url));
        self.active_tab_id = id;

        tracing::info!(tab_id = %id, url = %start_url, "Created new tab");

        &self.tabs[self.tabs.len() - 1]
    }

    /// Close a tab.
    ///
    /// Closing the active tab activates the last remaining tab in display
    /// order, not a neighbour. Closing the only tab opens a replacement
    /// seeded with `start_url`.
    pub fn close_tab(&mut self, tab_id: u64, start_url: &str) -> Result<()> {
        let index = self
            .position(tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        self.tabs.remove(index);

        tracing::info!(tab_id = %tab_id, "Closed tab");

        match self.tabs.last().map(|t| t.id) {
            None => {
                self.add_tab(start_url);
            }
            Some(last_id) if self.active_tab_id == tab_id => {
                self.active_tab_id = last_id;
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// Make an existing tab active. History and content are untouched.
    pub fn switch_tab(&mut self, tab_id: u64) -> Result<()> {
        if self.position(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id));
        }
        self.active_tab_id = tab_id;
        Ok(())
    }

    pub fn get_tab(&self, tab_id: u64) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))
    }

    pub fn get_tab_mut(&mut self, tab_id: u64) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.get_tab(self.active_tab_id).ok()
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active_tab_id;
        self.get_tab_mut(id).ok()
    }

    pub fn active_tab_id(&self) -> u64 {
        self.active_tab_id
    }

    pub fn next_tab_id(&self) -> u64 {
        self.next_tab_id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn position(&self, tab_id: u64) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
