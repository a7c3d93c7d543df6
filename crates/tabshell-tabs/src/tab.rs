//! Tab data structure

use serde::Serialize;

use tabshell_navigation::{title_for_url, TabHistory, BLANK_URL};

use crate::error::TabError;
use crate::state::LoadState;
use crate::Result;

pub const NEW_TAB_TITLE: &str = "New Tab";

#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    /// Unique identifier, never reused
    pub id: u64,
    /// Display label
    pub title: String,
    /// Raw address bar text
    pub url: String,
    /// Normalized URL handed to the embedded frame
    pub content_url: String,
    /// Visited URLs and the back/forward cursor
    pub history: TabHistory,
    /// Current state in the reload state machine
    pub load_state: LoadState,
}

impl Tab {
    /// A fresh tab showing the blank page
    pub fn blank(id: u64) -> Self {
        Self::seeded(id, BLANK_URL)
    }

    /// A fresh tab whose first history entry is `start_url`
    pub fn seeded(id: u64, start_url: &str) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            url: String::new(),
            content_url: start_url.to_string(),
            history: TabHistory::new(start_url),
            load_state: LoadState::Loaded,
        }
    }

    /// Attempt to transition to a new load state
    pub fn transition_to(&mut self, new_state: LoadState) -> Result<()> {
        if !self.load_state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.load_state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.load_state,
            to = %new_state,
            "Tab load state transition"
        );

        self.load_state = new_state;
        Ok(())
    }

    /// Load `resolved` as a new history entry. The title and address bar
    /// keep the text as the user typed it.
    pub fn navigate(&mut self, raw_input: &str, resolved: String) {
        self.history.push(resolved.clone());
        self.url = raw_input.to_string();
        self.content_url = resolved;
        self.title = title_for_url(raw_input);
        self.load_state = LoadState::Loaded;
    }

    /// Move the history cursor back one entry. Returns false at the start.
    pub fn go_back(&mut self) -> bool {
        match self.history.back().map(str::to_string) {
            Some(url) => {
                self.show_history_entry(url);
                true
            }
            None => false,
        }
    }

    /// Move the history cursor forward one entry. Returns false at the end.
    pub fn go_forward(&mut self) -> bool {
        match self.history.forward().map(str::to_string) {
            Some(url) => {
                self.show_history_entry(url);
                true
            }
            None => false,
        }
    }

    fn show_history_entry(&mut self, url: String) {
        self.title = title_for_url(&url);
        self.content_url = url.clone();
        self.url = url;
        self.load_state = LoadState::Loaded;
    }

    /// Detach the frame: swap in the blank page and return what was showing.
    pub fn begin_reload(&mut self) -> Result<String> {
        self.transition_to(LoadState::Reloading)?;
        Ok(std::mem::replace(&mut self.content_url, BLANK_URL.to_string()))
    }

    /// Put the detached content back. Fails if the tab left `Reloading`
    /// in the meantime (e.g. it navigated elsewhere).
    pub fn finish_reload(&mut self, previous: String) -> Result<()> {
        if !self.load_state.is_reloading() {
            return Err(TabError::InvalidTransition {
                from: self.load_state.to_string(),
                to: LoadState::Loaded.to_string(),
            });
        }
        self.transition_to(LoadState::Loaded)?;
        self.content_url = previous;
        Ok(())
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tab() {
        let tab = Tab::blank(1);
        assert_eq!(tab.title, NEW_TAB_TITLE);
        assert_eq!(tab.url, "");
        assert_eq!(tab.content_url, BLANK_URL);
        assert_eq!(tab.history.entries(), [BLANK_URL]);
        assert_eq!(tab.history_index(), 0);
        assert_eq!(tab.load_state, LoadState::Loaded);
    }

    #[test]
    fn test_seeded_tab() {
        let tab = Tab::seeded(4, "https://google.com");
        assert_eq!(tab.content_url, "https://google.com");
        assert_eq!(tab.history.entries(), ["https://google.com"]);
        assert_eq!(tab.title, NEW_TAB_TITLE);
    }

    #[test]
    fn test_navigate_uses_raw_input_for_title() {
        let mut tab = Tab::blank(1);
        tab.navigate("www.openai.com", "https://www.openai.com".to_string());

        assert_eq!(tab.url, "www.openai.com");
        assert_eq!(tab.title, "openai.com");
        assert_eq!(tab.content_url, "https://www.openai.com");
        assert_eq!(tab.history_index(), 1);
        assert!(tab.can_go_back());
    }

    #[test]
    fn test_back_and_forward_update_display() {
        let mut tab = Tab::blank(1);
        tab.navigate("a.com", "https://a.com".to_string());
        tab.navigate("b.com", "https://b.com".to_string());

        assert!(tab.go_back());
        assert_eq!(tab.content_url, "https://a.com");
        assert_eq!(tab.url, "https://a.com");
        assert_eq!(tab.title, "a.com");

        assert!(tab.go_forward());
        assert_eq!(tab.content_url, "https://b.com");
        assert!(!tab.go_forward());
    }

    #[test]
    fn test_reload_cycle() {
        let mut tab = Tab::blank(1);
        tab.navigate("a.com", "https://a.com".to_string());

        let previous = tab.begin_reload().unwrap();
        assert_eq!(previous, "https://a.com");
        assert_eq!(tab.content_url, BLANK_URL);
        assert!(tab.begin_reload().is_err());

        tab.finish_reload(previous).unwrap();
        assert_eq!(tab.content_url, "https://a.com");
        assert_eq!(tab.content_url, tab.history.current());
    }

    #[test]
    fn test_finish_reload_after_navigation_rejected() {
        let mut tab = Tab::blank(1);
        let previous = tab.begin_reload().unwrap();
        tab.navigate("b.com", "https://b.com".to_string());

        assert!(tab.finish_reload(previous).is_err());
        assert_eq!(tab.content_url, "https://b.com");
    }
}
