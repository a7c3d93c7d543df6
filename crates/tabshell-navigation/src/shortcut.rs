//! Keyboard shortcuts for the tab strip
//!
//! - Ctrl/Cmd+T: open a new tab
//! - Ctrl/Cmd+W: close the active tab

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortcut {
    NewTab,
    CloseTab,
}

/// A key-down event as reported by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }
}

impl Shortcut {
    /// Match a key press against the shortcut table.
    ///
    /// Ctrl and Cmd are interchangeable; the key must be the lowercase letter.
    pub fn parse(press: &KeyPress) -> Option<Self> {
        if !(press.ctrl || press.meta) {
            return None;
        }

        match press.key.as_str() {
            "t" => Some(Shortcut::NewTab),
            "w" => Some(Shortcut::CloseTab),
            _ => None,
        }
    }

    /// Human-readable binding for display
    pub fn binding(&self) -> &'static str {
        match self {
            Shortcut::NewTab => "Ctrl/Cmd+T",
            Shortcut::CloseTab => "Ctrl/Cmd+W",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_either_modifier() {
        assert_eq!(
            Shortcut::parse(&KeyPress::new("t", true, false)),
            Some(Shortcut::NewTab)
        );
        assert_eq!(
            Shortcut::parse(&KeyPress::new("t", false, true)),
            Some(Shortcut::NewTab)
        );
        assert_eq!(
            Shortcut::parse(&KeyPress::new("w", true, true)),
            Some(Shortcut::CloseTab)
        );
    }

    #[test]
    fn test_requires_modifier() {
        assert_eq!(Shortcut::parse(&KeyPress::new("t", false, false)), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(Shortcut::parse(&KeyPress::new("r", true, false)), None);
        assert_eq!(Shortcut::parse(&KeyPress::new("T", true, false)), None);
        assert_eq!(Shortcut::parse(&KeyPress::new("", false, true)), None);
    }
}
