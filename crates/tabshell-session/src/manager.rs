//! Session Manager
//!
//! Shared handle over one `BrowserSession`. Commands coming from the
//! presentation layer never fail visibly: a missing id, empty input or a
//! history move past either end is logged and ignored. Only preference
//! persistence reports errors.

use parking_lot::RwLock;
use std::sync::Arc;

use tabshell_navigation::{KeyPress, SearchEngine, Shortcut};
use tabshell_storage::Database;
use tabshell_tabs::Tab;

use crate::bookmarks::Bookmark;
use crate::error::SessionError;
use crate::preferences::Preferences;
use crate::session::{BrowserSession, ReloadTicket, SessionSnapshot};
use crate::Result;

pub struct SessionManager {
    /// Session state; every command holds the write lock for one step
    state: Arc<RwLock<BrowserSession>>,
    /// Database for persisted preferences
    db: Database,
}

impl SessionManager {
    /// Build a session from stored preferences, using `defaults` for
    /// anything not stored yet
    pub fn load(db: Database, defaults: Preferences) -> Result<Self> {
        let preferences = Preferences::load(&db, defaults)?;

        tracing::info!(
            homepage = %preferences.homepage,
            search_engine = %preferences.search_engine,
            "Initialized browser session"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(BrowserSession::new(preferences))),
            db,
        })
    }

    // === Queries ===

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().snapshot()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.state.read().tabs().to_vec()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.state.read().active_tab().cloned()
    }

    pub fn active_tab_url(&self) -> String {
        self.state.read().active_tab_url().to_string()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.read().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.read().can_go_forward()
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.state.read().bookmarks().to_vec()
    }

    pub fn homepage(&self) -> String {
        self.state.read().homepage().to_string()
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.state.read().search_engine()
    }

    pub fn search_engines(&self) -> Vec<SearchEngine> {
        SearchEngine::ALL.to_vec()
    }

    // === Tab commands ===

    pub fn add_tab(&self) -> u64 {
        self.state.write().add_tab()
    }

    pub fn close_tab(&self, tab_id: u64) {
        let result = self.state.write().close_tab(tab_id);
        absorb("close_tab", result);
    }

    pub fn switch_tab(&self, tab_id: u64) {
        let result = self.state.write().switch_tab(tab_id);
        absorb("switch_tab", result);
    }

    pub fn handle_key_down(&self, press: &KeyPress) -> Option<Shortcut> {
        let applied = self.state.write().handle_key_down(press);
        if let Some(shortcut) = applied {
            tracing::debug!(shortcut = %shortcut.binding(), "Applied keyboard shortcut");
        }
        applied
    }

    // === Navigation commands ===

    pub fn navigate(&self, raw_input: &str) {
        let result = self.state.write().navigate(raw_input);
        absorb("navigate", result);
    }

    pub fn navigate_to_bookmark(&self, url: &str) {
        self.navigate(url);
    }

    pub fn go_home(&self) {
        let result = self.state.write().go_home();
        absorb("go_home", result);
    }

    pub fn go_back(&self) {
        let result = self.state.write().go_back();
        if let Some(false) = absorb("go_back", result) {
            tracing::debug!("go_back ignored at oldest history entry");
        }
    }

    pub fn go_forward(&self) {
        let result = self.state.write().go_forward();
        if let Some(false) = absorb("go_forward", result) {
            tracing::debug!("go_forward ignored at newest history entry");
        }
    }

    /// Blank the active tab's frame. The frame stays detached until the
    /// ticket is handed to `finish_refresh`.
    pub fn begin_refresh(&self) -> Option<ReloadTicket> {
        let result = self.state.write().begin_reload();
        absorb("refresh", result)
    }

    /// Restore the frame of a reload begun with `begin_refresh`, unless the
    /// tab was closed or navigated in between.
    pub fn finish_refresh(&self, ticket: ReloadTicket) {
        let result = self.state.write().finish_reload(ticket);
        absorb("refresh", result);
    }

    /// Force the embedded frame to reload identical content: detach it,
    /// yield once so observers see the blank frame, then reattach.
    pub async fn refresh(&self) {
        let Some(ticket) = self.begin_refresh() else {
            return;
        };
        tokio::task::yield_now().await;
        self.finish_refresh(ticket);
    }

    // === Bookmark commands ===

    pub fn add_bookmark(&self) {
        let result = self.state.write().add_bookmark();
        absorb("add_bookmark", result);
    }

    pub fn remove_bookmark(&self, url: &str) {
        let removed = self.state.write().remove_bookmark(url);
        if removed == 0 {
            tracing::debug!(url = %url, "remove_bookmark ignored: no such bookmark");
        }
    }

    pub fn edit_bookmark(&self, old_url: &str, new_title: String, new_url: String) {
        let result = self
            .state
            .write()
            .edit_bookmark(old_url, new_title, new_url);
        absorb("edit_bookmark", result);
    }

    // === Preferences ===

    pub fn set_homepage(&self, homepage: String) -> Result<()> {
        Preferences::save_homepage(&self.db, &homepage)?;
        self.state.write().set_homepage(homepage);
        Ok(())
    }

    pub fn set_search_engine(&self, value: &str) -> Result<()> {
        let search_engine: SearchEngine = value
            .parse()
            .map_err(|_| SessionError::UnknownSearchEngine(value.to_string()))?;

        Preferences::save_search_engine(&self.db, search_engine)?;
        self.state.write().set_search_engine(search_engine);
        Ok(())
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            db: self.db.clone(),
        }
    }
}

/// Swallow a command failure into a logged no-op
fn absorb<T>(command: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(command = %command, error = %e, "Command ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{HOMEPAGE_KEY, SEARCH_ENGINE_KEY};
    use tabshell_navigation::BLANK_URL;

    fn manager() -> SessionManager {
        SessionManager::load(Database::open_in_memory().unwrap(), Preferences::default())
            .unwrap()
    }

    #[test]
    fn test_missing_ids_are_no_ops() {
        let manager = manager();
        manager.close_tab(99);
        manager.switch_tab(99);
        manager.navigate("");
        manager.go_back();
        manager.go_forward();
        manager.remove_bookmark("https://nowhere.test");
        manager.edit_bookmark(
            "https://nowhere.test",
            "x".to_string(),
            "https://x.test".to_string(),
        );

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.tabs.len(), 1);
        assert_eq!(snapshot.active_tab_id, 1);
        assert_eq!(snapshot.bookmarks.len(), 4);
        assert_eq!(snapshot.tabs[0].history.entries().len(), 1);
    }

    #[test]
    fn test_preferences_persist_across_instances() {
        let db = Database::open_in_memory().unwrap();
        let first = SessionManager::load(db.clone(), Preferences::default()).unwrap();
        first.set_homepage("https://rust-lang.org".to_string()).unwrap();
        first.set_search_engine("Bing").unwrap();

        assert_eq!(
            db.get_setting(HOMEPAGE_KEY).unwrap().as_deref(),
            Some("https://rust-lang.org")
        );
        assert_eq!(db.get_setting(SEARCH_ENGINE_KEY).unwrap().as_deref(), Some("Bing"));

        let second = SessionManager::load(db, Preferences::default()).unwrap();
        assert_eq!(second.homepage(), "https://rust-lang.org");
        assert_eq!(second.search_engine(), SearchEngine::Bing);
    }

    #[test]
    fn test_unknown_search_engine_rejected() {
        let manager = manager();
        let result = manager.set_search_engine("AltaVista");
        assert!(matches!(result, Err(SessionError::UnknownSearchEngine(_))));
        assert_eq!(manager.search_engine(), SearchEngine::Google);
    }

    #[test]
    fn test_independent_instances() {
        let a = manager();
        let b = manager();
        a.add_tab();
        a.navigate("openai.com");

        assert_eq!(a.tabs().len(), 2);
        assert_eq!(b.tabs().len(), 1);
        assert_eq!(b.active_tab().unwrap().content_url, BLANK_URL);
    }

    #[test]
    fn test_clones_share_state() {
        let manager = manager();
        let handle = manager.clone();
        handle.navigate("openai.com");
        assert_eq!(manager.active_tab_url(), "openai.com");
        assert!(manager.can_go_back());
    }

    #[test]
    fn test_navigate_to_bookmark() {
        let manager = manager();
        let docs = manager.bookmarks()[3].url.clone();
        manager.navigate_to_bookmark(&docs);

        let tab = manager.active_tab().unwrap();
        assert_eq!(tab.content_url, docs);
        assert_eq!(tab.title, "reflex.dev");
    }

    #[test]
    fn test_begin_finish_refresh() {
        let manager = manager();
        manager.navigate("example.com");

        let ticket = manager.begin_refresh().unwrap();
        assert_eq!(manager.active_tab().unwrap().content_url, BLANK_URL);
        // A second refresh while detached is ignored
        assert!(manager.begin_refresh().is_none());

        manager.finish_refresh(ticket);
        assert_eq!(
            manager.active_tab().unwrap().content_url,
            "https://example.com"
        );
    }

    #[test]
    fn test_navigation_during_refresh_wins() {
        let manager = manager();
        manager.navigate("example.com");

        let ticket = manager.begin_refresh().unwrap();
        manager.navigate("rust-lang.org");
        manager.finish_refresh(ticket);

        let tab = manager.active_tab().unwrap();
        assert_eq!(tab.content_url, "https://rust-lang.org");
        assert_eq!(tab.content_url, tab.history.current());
    }

    #[tokio::test]
    async fn test_refresh_restores_content_and_history() {
        let manager = manager();
        manager.navigate("example.com");
        let before = manager.active_tab().unwrap();

        manager.refresh().await;

        let after = manager.active_tab().unwrap();
        assert_eq!(after.content_url, before.content_url);
        assert_eq!(after.history, before.history);
        assert!(!after.load_state.is_reloading());
    }

    #[test]
    fn test_add_bookmark_twice_keeps_one() {
        let manager = manager();
        manager.navigate("https://crates.io");
        manager.add_bookmark();
        manager.add_bookmark();

        let count = manager
            .bookmarks()
            .iter()
            .filter(|b| b.url == "https://crates.io")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_add_bookmark_on_blank_tab_once() {
        let manager = manager();
        manager.add_bookmark();

        let bookmarks = manager.bookmarks();
        assert_eq!(bookmarks.len(), 5);
        assert_eq!(bookmarks[4].title, "New Tab");
        assert_eq!(bookmarks[4].url, "");

        manager.add_bookmark();
        assert_eq!(manager.bookmarks().len(), 5);
    }

    #[test]
    fn test_edit_bookmark_onto_existing_url() {
        let manager = manager();
        manager.edit_bookmark(
            "https://github.com",
            "Search".to_string(),
            "https://google.com".to_string(),
        );

        let bookmarks = manager.bookmarks();
        assert_eq!(bookmarks.len(), 4);
        assert_eq!(bookmarks[1].title, "Search");
        assert_eq!(bookmarks[1].url, "https://google.com");
    }
}
