//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabshell_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] tabshell_tabs::TabError),

    #[error("Session error: {0}")]
    Session(#[from] tabshell_session::SessionError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] tabshell_navigation::NavigationError),

    #[error("Download error: {0}")]
    Download(#[from] tabshell_download::DownloadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
