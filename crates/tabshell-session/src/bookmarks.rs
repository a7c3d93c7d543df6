use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::Result;

/// Icon given to pages starred from the address bar
pub const STARRED_ICON: &str = "file-text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    /// Symbolic icon name, only meaningful to the presentation layer
    pub icon: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered bookmark list, unique by URL
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Bookmarks {
    items: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bookmark bar a new session starts with
    pub fn starter_set() -> Self {
        Self {
            items: vec![
                Bookmark::new("Reflex", "https://reflex.dev", "box"),
                Bookmark::new("GitHub", "https://github.com", "github"),
                Bookmark::new("Google", "https://google.com", "search"),
                Bookmark::new(
                    "Docs",
                    "https://reflex.dev/docs/getting-started/introduction/",
                    "book-open",
                ),
            ],
        }
    }

    /// Append unless the URL is already bookmarked
    pub fn add(&mut self, bookmark: Bookmark) -> Result<()> {
        if self.contains(&bookmark.url) {
            return Err(SessionError::DuplicateBookmark(bookmark.url));
        }
        self.items.push(bookmark);
        Ok(())
    }

    /// Drop every bookmark with this URL. Returns how many were removed.
    pub fn remove(&mut self, url: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|b| b.url != url);
        before - self.items.len()
    }

    /// Replace title and URL of the first bookmark at `old_url`. The new
    /// URL is taken as given, even if empty or already bookmarked.
    pub fn edit(&mut self, old_url: &str, title: String, url: String) -> Result<()> {
        let idx = self
            .items
            .iter()
            .position(|b| b.url == old_url)
            .ok_or_else(|| SessionError::BookmarkNotFound(old_url.to_string()))?;

        self.items[idx].title = title;
        self.items[idx].url = url;
        Ok(())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.items.iter().any(|b| b.url == url)
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
