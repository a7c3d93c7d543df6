//! tabshell Session Management
//!
//! - A session owns the tab strip, the bookmark list and the user preferences
//! - Every command is one read-decide-write step under the session lock
//! - Derived values (active tab, back/forward availability) are computed on read
//! - Only the homepage and search engine survive a restart

mod bookmarks;
mod error;
mod manager;
mod preferences;
mod session;

pub use bookmarks::{Bookmark, Bookmarks, STARRED_ICON};
pub use error::SessionError;
pub use manager::SessionManager;
pub use preferences::{Preferences, DEFAULT_HOMEPAGE, HOMEPAGE_KEY, SEARCH_ENGINE_KEY};
pub use session::{BrowserSession, ReloadTicket, SessionSnapshot};

pub type Result<T> = std::result::Result<T, SessionError>;
