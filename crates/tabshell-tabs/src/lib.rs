//! tabshell Tab Management
//!
//! The tab strip: an ordered, never-empty collection of tabs, each with its
//! own history cursor, plus the active-tab pointer and the id counter.

mod error;
mod manager;
mod state;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use state::LoadState;
pub use tab::{Tab, NEW_TAB_TITLE};

pub type Result<T> = std::result::Result<T, TabError>;
