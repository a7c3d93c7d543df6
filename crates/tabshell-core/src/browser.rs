//! Main browser state container

use serde::Serialize;

use tabshell_download::{Download, DownloadManager};
use tabshell_navigation::{KeyPress, SearchEngine, Shortcut};
use tabshell_session::{Bookmark, SessionManager, SessionSnapshot};
use tabshell_storage::Database;
use tabshell_tabs::Tab;

use crate::config::Config;
use crate::Result;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct BrowserState {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub downloads: Vec<Download>,
}

/// Main browser instance
///
/// Owns one session (tabs, bookmarks, preferences) and one download table.
/// Clones share state; separately constructed instances do not.
pub struct Browser {
    config: Config,
    session_manager: SessionManager,
    download_manager: DownloadManager,
}

impl Browser {
    /// Open (or create) the database at the configured path
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// A browser whose preferences live only in memory
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open_in_memory()?;
        Self::with_database(config, db)
    }

    fn with_database(config: Config, db: Database) -> Result<Self> {
        let session_manager = SessionManager::load(db, config.preferences())?;
        let download_manager = DownloadManager::new(config.simulation());

        tracing::info!(database = %config.database_path.display(), "Browser initialized");

        Ok(Self {
            config,
            session_manager,
            download_manager,
        })
    }

    pub fn state(&self) -> BrowserState {
        BrowserState {
            session: self.session_manager.snapshot(),
            downloads: self.download_manager.downloads(),
        }
    }

    // === Tab operations ===

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.session_manager.tabs()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.session_manager.active_tab()
    }

    pub fn add_tab(&self) -> u64 {
        self.session_manager.add_tab()
    }

    pub fn close_tab(&self, tab_id: u64) {
        self.session_manager.close_tab(tab_id);
    }

    pub fn switch_tab(&self, tab_id: u64) {
        self.session_manager.switch_tab(tab_id);
    }

    pub fn handle_key_down(&self, key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
        self.session_manager
            .handle_key_down(&KeyPress::new(key, ctrl, meta))
    }

    // === Navigation ===

    pub fn navigate(&self, raw_input: &str) {
        self.session_manager.navigate(raw_input);
    }

    pub fn navigate_to_bookmark(&self, url: &str) {
        self.session_manager.navigate_to_bookmark(url);
    }

    pub fn go_home(&self) {
        self.session_manager.go_home();
    }

    pub fn go_back(&self) {
        self.session_manager.go_back();
    }

    pub fn go_forward(&self) {
        self.session_manager.go_forward();
    }

    pub async fn refresh(&self) {
        self.session_manager.refresh().await;
    }

    pub fn can_go_back(&self) -> bool {
        self.session_manager.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.session_manager.can_go_forward()
    }

    // === Bookmarks ===

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.session_manager.bookmarks()
    }

    pub fn add_bookmark(&self) {
        self.session_manager.add_bookmark();
    }

    pub fn remove_bookmark(&self, url: &str) {
        self.session_manager.remove_bookmark(url);
    }

    pub fn edit_bookmark(&self, old_url: &str, new_title: String, new_url: String) {
        self.session_manager
            .edit_bookmark(old_url, new_title, new_url);
    }

    // === Settings ===

    pub fn homepage(&self) -> String {
        self.session_manager.homepage()
    }

    pub fn set_homepage(&self, homepage: String) -> Result<()> {
        Ok(self.session_manager.set_homepage(homepage)?)
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.session_manager.search_engine()
    }

    pub fn set_search_engine(&self, value: &str) -> Result<()> {
        Ok(self.session_manager.set_search_engine(value)?)
    }

    // === Downloads ===

    pub fn download_manager(&self) -> &DownloadManager {
        &self.download_manager
    }

    pub fn downloads(&self) -> Vec<Download> {
        self.download_manager.downloads()
    }

    pub fn start_download(&self) -> Download {
        self.download_manager.start_download()
    }

    pub fn pause_download(&self, id: u64) -> Result<Download> {
        Ok(self.download_manager.pause_download(id)?)
    }

    pub fn resume_download(&self, id: u64) -> Result<Download> {
        Ok(self.download_manager.resume_download(id)?)
    }

    pub fn cancel_download(&self, id: u64) -> Result<Download> {
        Ok(self.download_manager.cancel_download(id)?)
    }

    pub fn clear_completed_downloads(&self) -> usize {
        self.download_manager.clear_completed_downloads()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Browser {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session_manager: self.session_manager.clone(),
            download_manager: self.download_manager.clone(),
        }
    }
}
