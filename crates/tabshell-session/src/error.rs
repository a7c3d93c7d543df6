//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabshell_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] tabshell_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] tabshell_navigation::NavigationError),

    #[error("Unknown search engine: {0}")]
    UnknownSearchEngine(String),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("Bookmark URL already exists: {0}")]
    DuplicateBookmark(String),
}
