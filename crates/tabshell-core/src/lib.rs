//! tabshell Core
//!
//! Composes the browser session and the download simulator behind one
//! `Browser` handle. Every instance owns its own state; there are no globals.

mod browser;
mod config;
mod error;

pub use browser::{Browser, BrowserState};
pub use config::{Config, CONFIG_ENV};
pub use error::CoreError;

// Re-export core components
pub use tabshell_download::{
    Download, DownloadError, DownloadManager, DownloadStatus, SimulationConfig,
};
pub use tabshell_navigation::{
    InputResolution, InputResolver, KeyPress, NavigationError, SearchEngine, Shortcut,
};
pub use tabshell_session::{
    Bookmark, Preferences, SessionError, SessionManager, SessionSnapshot,
};
pub use tabshell_storage::{Database, StorageError};
pub use tabshell_tabs::{LoadState, Tab, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Output goes to stderr so stdout stays free for
/// command results.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
