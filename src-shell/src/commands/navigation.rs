//! Navigation and address bar commands

use serde::Serialize;

use super::tabs::TabInfo;
use super::CommandResult;
use crate::state::AppState;

/// Active tab after a navigation command
#[derive(Debug, Serialize)]
pub struct NavigationResult {
    pub tab: Option<TabInfo>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Built from one session snapshot so the tab and its flags agree
pub fn navigation_result(state: &AppState) -> NavigationResult {
    let snapshot = state.browser().session_manager().snapshot();
    let active_tab_id = snapshot.active_tab_id;
    NavigationResult {
        tab: snapshot
            .tabs
            .into_iter()
            .find(|tab| tab.id == active_tab_id)
            .map(|tab| TabInfo::from_tab(tab, active_tab_id)),
        can_go_back: snapshot.can_go_back,
        can_go_forward: snapshot.can_go_forward,
    }
}

pub fn navigate(state: &AppState, input: &str) -> CommandResult<NavigationResult> {
    state.browser().navigate(input);
    CommandResult::ok(navigation_result(state))
}

pub fn go_home(state: &AppState) -> CommandResult<NavigationResult> {
    state.browser().go_home();
    CommandResult::ok(navigation_result(state))
}

pub fn go_back(state: &AppState) -> CommandResult<NavigationResult> {
    state.browser().go_back();
    CommandResult::ok(navigation_result(state))
}

pub fn go_forward(state: &AppState) -> CommandResult<NavigationResult> {
    state.browser().go_forward();
    CommandResult::ok(navigation_result(state))
}

pub async fn refresh(state: &AppState) -> CommandResult<NavigationResult> {
    state.browser().refresh().await;
    CommandResult::ok(navigation_result(state))
}
