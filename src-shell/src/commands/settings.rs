//! Settings commands

use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;
use tabshell_core::SearchEngine;

#[derive(Debug, Serialize)]
pub struct SettingsInfo {
    pub homepage: String,
    pub search_engine: SearchEngine,
    pub search_engines: Vec<SearchEngine>,
}

pub fn get_settings(state: &AppState) -> CommandResult<SettingsInfo> {
    let manager = state.browser().session_manager();
    CommandResult::ok(SettingsInfo {
        homepage: manager.homepage(),
        search_engine: manager.search_engine(),
        search_engines: manager.search_engines(),
    })
}

pub fn set_homepage(state: &AppState, homepage: String) -> CommandResult<SettingsInfo> {
    match state.with_browser(|browser| browser.set_homepage(homepage)) {
        Ok(()) => get_settings(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn set_search_engine(state: &AppState, engine: &str) -> CommandResult<SettingsInfo> {
    match state.with_browser(|browser| browser.set_search_engine(engine)) {
        Ok(()) => get_settings(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
