//! Tab management commands
use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TabInfo {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub content_url: String,
    pub load_state: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_active: bool,
}

impl TabInfo {
    pub fn from_tab(tab: tabshell_core::Tab, active_tab_id: u64) -> Self {
        Self {
            id: tab.id,
            can_go_back: tab.can_go_back(),
            can_go_forward: tab.can_go_forward(),
            is_active: tab.id == active_tab_id,
            load_state: tab.load_state.as_str().to_string(),
            title: tab.title,
            url: tab.url,
            content_url: tab.content_url,
        }
    }
}

/// Tab strip listing returned by every tab command
#[derive(Debug, Serialize)]
pub struct TabStrip {
    pub active_tab_id: u64,
    pub tabs: Vec<TabInfo>,
}

/// Built from one session snapshot so the listing and the active id agree
pub fn tab_strip(state: &AppState) -> TabStrip {
    let snapshot = state.browser().session_manager().snapshot();
    let active_tab_id = snapshot.active_tab_id;
    TabStrip {
        active_tab_id,
        tabs: snapshot
            .tabs
            .into_iter()
            .map(|tab| TabInfo::from_tab(tab, active_tab_id))
            .collect(),
    }
}

pub fn get_tabs(state: &AppState) -> CommandResult<TabStrip> {
    CommandResult::ok(tab_strip(state))
}

pub fn create_tab(state: &AppState) -> CommandResult<TabStrip> {
    state.browser().add_tab();
    CommandResult::ok(tab_strip(state))
}

pub fn close_tab(state: &AppState, tab_id: u64) -> CommandResult<TabStrip> {
    state.browser().close_tab(tab_id);
    CommandResult::ok(tab_strip(state))
}

pub fn switch_tab(state: &AppState, tab_id: u64) -> CommandResult<TabStrip> {
    state.browser().switch_tab(tab_id);
    CommandResult::ok(tab_strip(state))
}

#[derive(Debug, Serialize)]
pub struct KeyResult {
    /// Binding that fired, if any
    pub shortcut: Option<String>,
    #[serde(flatten)]
    pub strip: TabStrip,
}

pub fn key_down(state: &AppState, key: &str, ctrl: bool, meta: bool) -> CommandResult<KeyResult> {
    let shortcut = state
        .browser()
        .handle_key_down(key, ctrl, meta)
        .map(|s| s.binding().to_string());

    CommandResult::ok(KeyResult {
        shortcut,
        strip: tab_strip(state),
    })
}
