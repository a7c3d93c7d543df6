//! tabshell Storage Layer
//!
//! SQLite-backed key-value settings. Only user preferences are persisted;
//! tabs, bookmarks and downloads live in memory for the lifetime of a browser.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
