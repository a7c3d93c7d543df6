//! Tab load state
//!
//! ```text
//! Loaded
//!   ↓ refresh
//! Reloading   (content_url is about:blank)
//!   ↓ restore / navigate
//! Loaded
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Content URL matches the history cursor
    Loaded,
    /// Frame detached for a forced reload
    Reloading,
}

impl LoadState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: LoadState) -> bool {
        match (self, target) {
            (LoadState::Loaded, LoadState::Reloading) => true,
            (LoadState::Reloading, LoadState::Loaded) => true,
            // Navigating a loaded tab stays loaded
            (LoadState::Loaded, LoadState::Loaded) => true,
            // A second refresh would capture the blank placeholder
            (LoadState::Reloading, LoadState::Reloading) => false,
        }
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self, LoadState::Reloading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Loaded => "loaded",
            LoadState::Reloading => "reloading",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
