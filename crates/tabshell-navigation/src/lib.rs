//! tabshell Navigation
//!
//! - Address bar input resolution:
//!   1. Bare words or text with spaces → search with the selected engine
//!   2. Domain-like text without a scheme → `https://` prefixed
//!   3. `http://` / `https://` URLs → unchanged
//! - Per-tab back/forward history with forward pruning
//! - Keyboard shortcuts for the tab strip

mod error;
mod history;
mod input;
mod shortcut;

pub use error::NavigationError;
pub use history::TabHistory;
pub use input::{title_for_url, InputResolution, InputResolver, SearchEngine, BLANK_URL};
pub use shortcut::{KeyPress, Shortcut};

pub type Result<T> = std::result::Result<T, NavigationError>;
