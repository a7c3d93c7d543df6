//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tabshell_download::SimulationConfig;
use tabshell_navigation::SearchEngine;
use tabshell_session::{Preferences, DEFAULT_HOMEPAGE};

use crate::error::CoreError;
use crate::Result;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "TABSHELL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Homepage used until the user stores one
    pub homepage: String,
    /// Search engine used until the user stores one
    pub search_engine: SearchEngine,
    /// Delay between simulated download progress steps
    pub download_tick_ms: u64,
    /// Re-check interval of a paused download
    pub download_poll_ms: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabshell.db"),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: SearchEngine::default(),
            download_tick_ms: 50,
            download_poll_ms: 500,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("tabshell"))
            .unwrap_or_else(|| PathBuf::from(".tabshell"))
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from the file named by `TABSHELL_CONFIG`, or the defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_json_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.download_tick_ms == 0 {
            return Err(CoreError::Config(
                "download_tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.download_poll_ms == 0 {
            return Err(CoreError::Config(
                "download_poll_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Preference defaults seeded into a fresh store
    pub fn preferences(&self) -> Preferences {
        Preferences {
            homepage: self.homepage.clone(),
            search_engine: self.search_engine,
        }
    }

    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig::from_millis(self.download_tick_ms, self.download_poll_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Platform data directory lookup
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
