//! Browser session aggregate

use serde::Serialize;

use tabshell_navigation::{InputResolver, KeyPress, SearchEngine, Shortcut};
use tabshell_tabs::{Tab, TabError, TabManager};

use crate::bookmarks::{Bookmark, Bookmarks, STARRED_ICON};
use crate::preferences::Preferences;
use crate::Result;

/// Proof that a reload started on a tab; hand it back to finish the reload.
#[derive(Debug)]
pub struct ReloadTicket {
    tab_id: u64,
    previous_content_url: String,
}

impl ReloadTicket {
    pub fn tab_id(&self) -> u64 {
        self.tab_id
    }
}

/// Read-only copy of the whole session for rendering
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: u64,
    pub next_tab_id: u64,
    pub active_tab_url: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub homepage: String,
    pub search_engine: SearchEngine,
    pub search_engines: Vec<SearchEngine>,
    pub bookmarks: Vec<Bookmark>,
}

/// Tabs, bookmarks and preferences of one browser window.
///
/// Plain data with synchronous commands; `SessionManager` provides the
/// shared, lock-guarded handle.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    tabs: TabManager,
    bookmarks: Bookmarks,
    preferences: Preferences,
}

impl BrowserSession {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            tabs: TabManager::new(),
            bookmarks: Bookmarks::starter_set(),
            preferences,
        }
    }

    // === Queries ===

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.active_tab()
    }

    pub fn active_tab_id(&self) -> u64 {
        self.tabs.active_tab_id()
    }

    pub fn active_tab_url(&self) -> &str {
        self.active_tab().map(|t| t.url.as_str()).unwrap_or("")
    }

    pub fn can_go_back(&self) -> bool {
        self.active_tab().is_some_and(Tab::can_go_back)
    }

    pub fn can_go_forward(&self) -> bool {
        self.active_tab().is_some_and(Tab::can_go_forward)
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.tabs()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.as_slice()
    }

    pub fn homepage(&self) -> &str {
        &self.preferences.homepage
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.preferences.search_engine
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tabs: self.tabs.tabs().to_vec(),
            active_tab_id: self.tabs.active_tab_id(),
            next_tab_id: self.tabs.next_tab_id(),
            active_tab_url: self.active_tab_url().to_string(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            homepage: self.preferences.homepage.clone(),
            search_engine: self.preferences.search_engine,
            search_engines: SearchEngine::ALL.to_vec(),
            bookmarks: self.bookmarks.as_slice().to_vec(),
        }
    }

    // === Tab commands ===

    /// Open a homepage tab and make it active. Returns its id.
    pub fn add_tab(&mut self) -> u64 {
        let homepage = self.preferences.homepage.clone();
        self.tabs.add_tab(&homepage).id
    }

    pub fn close_tab(&mut self, tab_id: u64) -> Result<()> {
        let homepage = self.preferences.homepage.clone();
        Ok(self.tabs.close_tab(tab_id, &homepage)?)
    }

    pub fn switch_tab(&mut self, tab_id: u64) -> Result<()> {
        Ok(self.tabs.switch_tab(tab_id)?)
    }

    // === Navigation commands ===

    /// Resolve address bar text and load it in the active tab
    pub fn navigate(&mut self, raw_input: &str) -> Result<()> {
        let resolved = InputResolver::with_search_engine(self.preferences.search_engine)
            .resolve(raw_input)?
            .into_url();

        let tab = self.active_tab_mut()?;
        tab.navigate(raw_input, resolved);

        tracing::debug!(tab_id = %tab.id, url = %tab.content_url, "Navigated");

        Ok(())
    }

    pub fn go_home(&mut self) -> Result<()> {
        let homepage = self.preferences.homepage.clone();
        self.navigate(&homepage)
    }

    /// Returns false when already at the oldest entry
    pub fn go_back(&mut self) -> Result<bool> {
        Ok(self.active_tab_mut()?.go_back())
    }

    /// Returns false when already at the newest entry
    pub fn go_forward(&mut self) -> Result<bool> {
        Ok(self.active_tab_mut()?.go_forward())
    }

    /// First half of a refresh: blank the active tab's frame
    pub fn begin_reload(&mut self) -> Result<ReloadTicket> {
        let tab = self.active_tab_mut()?;
        let previous_content_url = tab.begin_reload()?;
        Ok(ReloadTicket {
            tab_id: tab.id,
            previous_content_url,
        })
    }

    /// Second half of a refresh. The tab may have been closed or navigated
    /// since the ticket was issued; both are reported as errors.
    pub fn finish_reload(&mut self, ticket: ReloadTicket) -> Result<()> {
        let tab = self.tabs.get_tab_mut(ticket.tab_id)?;
        tab.finish_reload(ticket.previous_content_url)?;
        Ok(())
    }

    /// Dispatch a keyboard shortcut. Returns the shortcut that was applied.
    pub fn handle_key_down(&mut self, press: &KeyPress) -> Option<Shortcut> {
        let shortcut = Shortcut::parse(press)?;
        match shortcut {
            Shortcut::NewTab => {
                self.add_tab();
            }
            Shortcut::CloseTab => {
                let active_id = self.active_tab()?.id;
                self.close_tab(active_id).ok()?;
            }
        }
        Some(shortcut)
    }

    // === Bookmark commands ===

    /// Star the active tab's page
    pub fn add_bookmark(&mut self) -> Result<()> {
        let tab = self
            .active_tab()
            .ok_or(TabError::NotFound(self.tabs.active_tab_id()))?;
        let bookmark = Bookmark::new(tab.title.clone(), tab.url.clone(), STARRED_ICON);
        self.bookmarks.add(bookmark)
    }

    pub fn remove_bookmark(&mut self, url: &str) -> usize {
        self.bookmarks.remove(url)
    }

    pub fn edit_bookmark(&mut self, old_url: &str, new_title: String, new_url: String) -> Result<()> {
        self.bookmarks.edit(old_url, new_title, new_url)
    }

    // === Preferences (in memory; persisted by the manager) ===

    pub fn set_homepage(&mut self, homepage: String) {
        self.preferences.homepage = homepage;
    }

    pub fn set_search_engine(&mut self, search_engine: SearchEngine) {
        self.preferences.search_engine = search_engine;
    }

    fn active_tab_mut(&mut self) -> Result<&mut Tab> {
        let id = self.tabs.active_tab_id();
        Ok(self.tabs.get_tab_mut(id)?)
    }
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use tabshell_navigation::{NavigationError, BLANK_URL};

    fn assert_invariants(session: &BrowserSession) {
        assert!(!session.tabs().is_empty());
        assert_eq!(
            session
                .tabs()
                .iter()
                .filter(|t| t.id == session.active_tab_id())
                .count(),
            1
        );
        for tab in session.tabs() {
            assert!(!tab.history.entries().is_empty());
            assert!(tab.history_index() < tab.history.entries().len());
            if !tab.load_state.is_reloading() {
                assert_eq!(tab.content_url, tab.history.current());
            }
        }
    }

    #[test]
    fn test_initial_session() {
        let session = BrowserSession::default();
        let tab = session.active_tab().unwrap();

        assert_eq!(tab.id, 1);
        assert_eq!(tab.title, "New Tab");
        assert_eq!(tab.content_url, BLANK_URL);
        assert_eq!(session.active_tab_url(), "");
        assert!(!session.can_go_back());
        assert!(!session.can_go_forward());
        assert_eq!(session.bookmarks().len(), 4);
        assert_invariants(&session);
    }

    #[test]
    fn test_search_classification() {
        let mut session = BrowserSession::default();

        session.navigate("openai").unwrap();
        assert_eq!(
            session.active_tab().unwrap().content_url,
            "https://www.google.com/search?q=openai"
        );

        session.navigate("openai.com").unwrap();
        assert_eq!(session.active_tab().unwrap().content_url, "https://openai.com");
        assert_eq!(session.active_tab().unwrap().title, "openai.com");

        session.navigate("https://openai.com").unwrap();
        assert_eq!(session.active_tab().unwrap().content_url, "https://openai.com");
        assert_invariants(&session);
    }

    #[test]
    fn test_navigate_uses_selected_engine() {
        let mut session = BrowserSession::default();
        session.set_search_engine(SearchEngine::DuckDuckGo);
        session.navigate("rust book").unwrap();

        let tab = session.active_tab().unwrap();
        assert_eq!(tab.content_url, "https://duckduckgo.com/?q=rust+book");
        assert_eq!(tab.url, "rust book");
        assert_eq!(tab.title, "rust book");
    }

    #[test]
    fn test_empty_navigation_is_rejected_without_change() {
        let mut session = BrowserSession::default();
        assert!(matches!(
            session.navigate(""),
            Err(SessionError::Navigation(NavigationError::EmptyInput))
        ));
        assert_eq!(session.active_tab().unwrap().history.entries().len(), 1);
    }

    #[test]
    fn test_forward_history_pruning() {
        let mut session = BrowserSession::default();
        session.navigate("https://a.com").unwrap();
        session.navigate("https://b.com").unwrap();
        session.navigate("https://c.com").unwrap();
        session.go_back().unwrap();
        session.go_back().unwrap();
        session.go_forward().unwrap(); // at B

        session.navigate("https://d.com").unwrap();

        let tab = session.active_tab().unwrap();
        assert_eq!(
            tab.history.entries(),
            [BLANK_URL, "https://a.com", "https://b.com", "https://d.com"]
        );
        assert_eq!(tab.history_index(), 3);
        assert!(!session.can_go_forward());
        assert_invariants(&session);
    }

    #[test]
    fn test_back_forward_round_trip() {
        let mut session = BrowserSession::default();
        // Start from a tab whose history is exactly [A]
        session.set_homepage("https://a.com".to_string());
        session.add_tab();
        session.navigate("https://b.com").unwrap();
        session.navigate("https://c.com").unwrap();

        assert!(session.go_back().unwrap());
        assert!(session.go_back().unwrap());
        assert_eq!(session.active_tab().unwrap().history_index(), 0);
        assert_eq!(session.active_tab().unwrap().content_url, "https://a.com");

        assert!(!session.go_back().unwrap());
        assert_eq!(session.active_tab().unwrap().history_index(), 0);

        assert!(session.go_forward().unwrap());
        assert!(session.go_forward().unwrap());
        assert_eq!(session.active_tab().unwrap().history_index(), 2);
        assert_eq!(session.active_tab().unwrap().content_url, "https://c.com");
        assert!(!session.go_forward().unwrap());
    }

    #[test]
    fn test_go_home_navigates_to_homepage() {
        let mut session = BrowserSession::default();
        session.go_home().unwrap();

        let tab = session.active_tab().unwrap();
        assert_eq!(tab.content_url, "https://google.com");
        assert_eq!(tab.title, "google.com");
        assert!(session.can_go_back());
    }

    #[test]
    fn test_add_tab_seeded_with_homepage() {
        let mut session = BrowserSession::default();
        session.set_homepage("https://rust-lang.org".to_string());
        let id = session.add_tab();

        assert_eq!(session.active_tab_id(), id);
        let tab = session.active_tab().unwrap();
        assert_eq!(tab.content_url, "https://rust-lang.org");
        assert_eq!(tab.history.entries(), ["https://rust-lang.org"]);
        assert_invariants(&session);
    }

    #[test]
    fn test_close_last_tab_keeps_one() {
        let mut session = BrowserSession::default();
        session.close_tab(1).unwrap();

        assert_eq!(session.tabs().len(), 1);
        assert_eq!(session.active_tab_id(), 2);
        assert_invariants(&session);
    }

    #[test]
    fn test_close_active_activates_last_in_strip() {
        let mut session = BrowserSession::default();
        session.add_tab(); // 2
        session.add_tab(); // 3
        session.switch_tab(1).unwrap();

        session.close_tab(1).unwrap();
        assert_eq!(session.active_tab_id(), 3);
    }

    #[test]
    fn test_switch_to_missing_tab_rejected() {
        let mut session = BrowserSession::default();
        assert!(session.switch_tab(42).is_err());
        assert_eq!(session.active_tab_id(), 1);
        assert_invariants(&session);
    }

    #[test]
    fn test_reload_ticket_cycle() {
        let mut session = BrowserSession::default();
        session.navigate("example.com").unwrap();

        let ticket = session.begin_reload().unwrap();
        assert_eq!(session.active_tab().unwrap().content_url, BLANK_URL);
        assert_invariants(&session);

        session.finish_reload(ticket).unwrap();
        let tab = session.active_tab().unwrap();
        assert_eq!(tab.content_url, "https://example.com");
        assert_eq!(tab.history.entries().len(), 2);
        assert_invariants(&session);
    }

    #[test]
    fn test_reload_ticket_for_closed_tab() {
        let mut session = BrowserSession::default();
        session.add_tab();
        let ticket = session.begin_reload().unwrap();
        session.close_tab(ticket.tab_id()).unwrap();

        assert!(matches!(
            session.finish_reload(ticket),
            Err(SessionError::Tab(TabError::NotFound(2)))
        ));
        assert_invariants(&session);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut session = BrowserSession::default();

        assert_eq!(
            session.handle_key_down(&KeyPress::new("t", true, false)),
            Some(Shortcut::NewTab)
        );
        assert_eq!(session.tabs().len(), 2);
        assert_eq!(session.active_tab_id(), 2);

        assert_eq!(
            session.handle_key_down(&KeyPress::new("w", false, true)),
            Some(Shortcut::CloseTab)
        );
        assert_eq!(session.tabs().len(), 1);
        assert_eq!(session.active_tab_id(), 1);

        assert_eq!(session.handle_key_down(&KeyPress::new("w", false, false)), None);
        assert_eq!(session.tabs().len(), 1);
    }

    #[test]
    fn test_bookmark_current_page_once() {
        let mut session = BrowserSession::default();
        session.navigate("https://www.rust-lang.org").unwrap();

        session.add_bookmark().unwrap();
        assert!(session.add_bookmark().is_err());

        let matching: Vec<_> = session
            .bookmarks()
            .iter()
            .filter(|b| b.url == "https://www.rust-lang.org")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "rust-lang.org");
        assert_eq!(matching[0].icon, STARRED_ICON);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = BrowserSession::default();
        session.navigate("openai.com").unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["active_tab_id"], 1);
        assert_eq!(json["can_go_back"], true);
        assert_eq!(json["search_engine"], "Google");
        assert_eq!(json["search_engines"].as_array().unwrap().len(), 3);
        assert_eq!(json["tabs"][0]["load_state"], "loaded");
        assert_eq!(json["bookmarks"].as_array().unwrap().len(), 4);
    }
}
