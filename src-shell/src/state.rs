//! Application state management
use tabshell_core::{Browser, Config, Result};

/// Owns the browser for the lifetime of the shell
pub struct AppState {
    browser: Browser,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let browser = Browser::new(config)?;
        Ok(Self { browser })
    }

    #[cfg(test)]
    pub fn in_memory(config: Config) -> Result<Self> {
        let browser = Browser::in_memory(config)?;
        Ok(Self { browser })
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        f(&self.browser)
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }
}
