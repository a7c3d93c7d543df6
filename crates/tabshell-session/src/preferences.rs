//! Persisted user preferences

use serde::{Deserialize, Serialize};

use tabshell_navigation::SearchEngine;
use tabshell_storage::Database;

use crate::Result;

pub const HOMEPAGE_KEY: &str = "browser_homepage";
pub const SEARCH_ENGINE_KEY: &str = "browser_search_engine";
pub const DEFAULT_HOMEPAGE: &str = "https://google.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub homepage: String,
    pub search_engine: SearchEngine,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: SearchEngine::Google,
        }
    }
}

impl Preferences {
    /// Read stored values, falling back to `defaults` for anything missing
    /// or unreadable. Nothing is written.
    pub fn load(db: &Database, defaults: Preferences) -> Result<Self> {
        let homepage = db.get_setting(HOMEPAGE_KEY)?.unwrap_or(defaults.homepage);

        let search_engine = match db.get_setting(SEARCH_ENGINE_KEY)? {
            Some(stored) => stored.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %stored, "Ignoring unknown stored search engine");
                defaults.search_engine
            }),
            None => defaults.search_engine,
        };

        Ok(Self {
            homepage,
            search_engine,
        })
    }

    pub fn save_homepage(db: &Database, homepage: &str) -> Result<()> {
        db.set_setting(HOMEPAGE_KEY, homepage)?;
        Ok(())
    }

    pub fn save_search_engine(db: &Database, search_engine: SearchEngine) -> Result<()> {
        db.set_setting(SEARCH_ENGINE_KEY, search_engine.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let db = Database::open_in_memory().unwrap();
        let prefs = Preferences::load(&db, Preferences::default()).unwrap();
        assert_eq!(prefs, Preferences::default());
        // Loading never writes
        assert!(db.get_setting(HOMEPAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_stored_values_win() {
        let db = Database::open_in_memory().unwrap();
        Preferences::save_homepage(&db, "https://rust-lang.org").unwrap();
        Preferences::save_search_engine(&db, SearchEngine::Bing).unwrap();

        let prefs = Preferences::load(&db, Preferences::default()).unwrap();
        assert_eq!(prefs.homepage, "https://rust-lang.org");
        assert_eq!(prefs.search_engine, SearchEngine::Bing);
    }

    #[test]
    fn test_unknown_stored_engine_falls_back() {
        let db = Database::open_in_memory().unwrap();
        db.set_setting(SEARCH_ENGINE_KEY, "AltaVista").unwrap();

        let defaults = Preferences {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: SearchEngine::DuckDuckGo,
        };
        let prefs = Preferences::load(&db, defaults).unwrap();
        assert_eq!(prefs.search_engine, SearchEngine::DuckDuckGo);
    }
}
