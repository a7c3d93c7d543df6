//! Bookmark commands

use super::navigation;
use super::CommandResult;
use crate::state::AppState;
use tabshell_core::Bookmark;

pub fn get_bookmarks(state: &AppState) -> CommandResult<Vec<Bookmark>> {
    CommandResult::ok(state.browser().bookmarks())
}

pub fn add_bookmark(state: &AppState) -> CommandResult<Vec<Bookmark>> {
    state.browser().add_bookmark();
    get_bookmarks(state)
}

pub fn remove_bookmark(state: &AppState, url: &str) -> CommandResult<Vec<Bookmark>> {
    state.browser().remove_bookmark(url);
    get_bookmarks(state)
}

pub fn update_bookmark(
    state: &AppState,
    old_url: &str,
    title: String,
    url: String,
) -> CommandResult<Vec<Bookmark>> {
    state.browser().edit_bookmark(old_url, title, url);
    get_bookmarks(state)
}

pub fn open_bookmark(state: &AppState, url: &str) -> CommandResult<navigation::NavigationResult> {
    state.browser().navigate_to_bookmark(url);
    CommandResult::ok(navigation::navigation_result(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabshell_core::Config;

    #[test]
    fn test_bookmark_commands() {
        let state = AppState::in_memory(Config::default()).unwrap();
        assert_eq!(get_bookmarks(&state).data.unwrap().len(), 4);

        state.browser().navigate("https://crates.io");
        assert_eq!(add_bookmark(&state).data.unwrap().len(), 5);
        assert_eq!(add_bookmark(&state).data.unwrap().len(), 5);

        let edited = update_bookmark(
            &state,
            "https://crates.io",
            "Crates".to_string(),
            "https://crates.io/crates/tokio".to_string(),
        )
        .data
        .unwrap();
        assert_eq!(edited[4].title, "Crates");

        let remaining = remove_bookmark(&state, "https://crates.io/crates/tokio")
            .data
            .unwrap();
        assert_eq!(remaining.len(), 4);
    }

    #[test]
    fn test_open_bookmark() {
        let state = AppState::in_memory(Config::default()).unwrap();
        let result = open_bookmark(&state, "https://github.com").data.unwrap();
        let tab = result.tab.unwrap();
        assert_eq!(tab.content_url, "https://github.com");
        assert_eq!(tab.title, "github.com");
    }
}
