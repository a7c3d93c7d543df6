//! Shell commands
//!
//! Each stdin line is parsed into an `Intent`, dispatched to the browser and
//! answered with a `CommandResult` envelope.

pub mod bookmarks;
pub mod downloads;
pub mod navigation;
pub mod settings;
pub mod tabs;

use serde::Serialize;
use thiserror::Error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    /// Erase the payload type so every command fits one output envelope
    pub fn into_json(self) -> CommandResult<serde_json::Value> {
        match self.data.map(serde_json::to_value).transpose() {
            Ok(data) => CommandResult {
                success: self.success,
                data,
                error: self.error,
            },
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Tabs,
    NewTab,
    CloseTab(u64),
    SwitchTab(u64),
    Key { key: String, ctrl: bool, meta: bool },
    Navigate(String),
    Home,
    Back,
    Forward,
    Refresh,
    Bookmarks,
    AddBookmark,
    RemoveBookmark(String),
    EditBookmark {
        old_url: String,
        url: String,
        title: String,
    },
    OpenBookmark(String),
    Settings,
    SetHomepage(String),
    SetSearchEngine(String),
    Downloads,
    StartDownload,
    PauseDownload(u64),
    ResumeDownload(u64),
    CancelDownload(u64),
    ClearDownloads,
    State,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntentError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Intent, IntentError> {
    let line = line.trim();
    let (head, rest) = split_word(line);

    match head {
        "" => Err(IntentError::Empty),
        "tab" => parse_tab(rest),
        "tabs" => Ok(Intent::Tabs),
        // The rest of the line is address bar text; it may be empty
        "go" => Ok(Intent::Navigate(rest.to_string())),
        "home" => Ok(Intent::Home),
        "back" => Ok(Intent::Back),
        "forward" => Ok(Intent::Forward),
        "refresh" | "reload" => Ok(Intent::Refresh),
        "key" => parse_key(rest),
        "bookmark" => parse_bookmark(rest),
        "bookmarks" => Ok(Intent::Bookmarks),
        "set" => parse_set(rest),
        "settings" => Ok(Intent::Settings),
        "download" => parse_download(rest),
        "downloads" => Ok(Intent::Downloads),
        "state" => Ok(Intent::State),
        "quit" | "exit" => Ok(Intent::Quit),
        other => Err(IntentError::Unknown(other.to_string())),
    }
}

fn parse_tab(rest: &str) -> Result<Intent, IntentError> {
    let (action, rest) = split_word(rest);
    match action {
        "" | "list" => Ok(Intent::Tabs),
        "new" => Ok(Intent::NewTab),
        "close" => Ok(Intent::CloseTab(parse_id(rest, "tab id")?)),
        "switch" => Ok(Intent::SwitchTab(parse_id(rest, "tab id")?)),
        other => Err(IntentError::Unknown(format!("tab {}", other))),
    }
}

fn parse_key(rest: &str) -> Result<Intent, IntentError> {
    let mut words = rest.split_whitespace();
    let key = words.next().ok_or(IntentError::MissingArgument("key"))?;

    let mut ctrl = false;
    let mut meta = false;
    for modifier in words {
        match modifier {
            "ctrl" => ctrl = true,
            "meta" | "cmd" => meta = true,
            other => return Err(IntentError::Unknown(format!("key modifier {}", other))),
        }
    }

    Ok(Intent::Key {
        key: key.to_string(),
        ctrl,
        meta,
    })
}

fn parse_bookmark(rest: &str) -> Result<Intent, IntentError> {
    let (action, rest) = split_word(rest);
    match action {
        "" | "list" => Ok(Intent::Bookmarks),
        "add" => Ok(Intent::AddBookmark),
        "remove" => Ok(Intent::RemoveBookmark(required(rest, "url")?)),
        "open" => Ok(Intent::OpenBookmark(required(rest, "url")?)),
        "edit" => {
            let (old_url, rest) = split_word(rest);
            let (url, title) = split_word(rest);
            Ok(Intent::EditBookmark {
                old_url: required(old_url, "old url")?,
                url: required(url, "new url")?,
                title: required(title, "title")?,
            })
        }
        other => Err(IntentError::Unknown(format!("bookmark {}", other))),
    }
}

fn parse_set(rest: &str) -> Result<Intent, IntentError> {
    let (key, value) = split_word(rest);
    match key {
        "homepage" => Ok(Intent::SetHomepage(required(value, "homepage")?)),
        "engine" | "search_engine" => Ok(Intent::SetSearchEngine(required(value, "search engine")?)),
        "" => Err(IntentError::MissingArgument("setting")),
        other => Err(IntentError::Unknown(format!("set {}", other))),
    }
}

fn parse_download(rest: &str) -> Result<Intent, IntentError> {
    let (action, rest) = split_word(rest);
    match action {
        "" | "list" => Ok(Intent::Downloads),
        "start" => Ok(Intent::StartDownload),
        "pause" => Ok(Intent::PauseDownload(parse_id(rest, "download id")?)),
        "resume" => Ok(Intent::ResumeDownload(parse_id(rest, "download id")?)),
        "cancel" => Ok(Intent::CancelDownload(parse_id(rest, "download id")?)),
        "clear" => Ok(Intent::ClearDownloads),
        other => Err(IntentError::Unknown(format!("download {}", other))),
    }
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim()),
        None => (s, ""),
    }
}

fn required(value: &str, name: &'static str) -> Result<String, IntentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(IntentError::MissingArgument(name));
    }
    Ok(value.to_string())
}

fn parse_id(value: &str, name: &'static str) -> Result<u64, IntentError> {
    let value = required(value, name)?;
    value.parse().map_err(|_| IntentError::InvalidId(value))
}

/// Run one intent against the browser
pub async fn dispatch(state: &AppState, intent: Intent) -> CommandResult<serde_json::Value> {
    match intent {
        Intent::Tabs => tabs::get_tabs(state).into_json(),
        Intent::NewTab => tabs::create_tab(state).into_json(),
        Intent::CloseTab(id) => tabs::close_tab(state, id).into_json(),
        Intent::SwitchTab(id) => tabs::switch_tab(state, id).into_json(),
        Intent::Key { key, ctrl, meta } => tabs::key_down(state, &key, ctrl, meta).into_json(),
        Intent::Navigate(text) => navigation::navigate(state, &text).into_json(),
        Intent::Home => navigation::go_home(state).into_json(),
        Intent::Back => navigation::go_back(state).into_json(),
        Intent::Forward => navigation::go_forward(state).into_json(),
        Intent::Refresh => navigation::refresh(state).await.into_json(),
        Intent::Bookmarks => bookmarks::get_bookmarks(state).into_json(),
        Intent::AddBookmark => bookmarks::add_bookmark(state).into_json(),
        Intent::RemoveBookmark(url) => bookmarks::remove_bookmark(state, &url).into_json(),
        Intent::EditBookmark {
            old_url,
            url,
            title,
        } => bookmarks::update_bookmark(state, &old_url, title, url).into_json(),
        Intent::OpenBookmark(url) => bookmarks::open_bookmark(state, &url).into_json(),
        Intent::Settings => settings::get_settings(state).into_json(),
        Intent::SetHomepage(homepage) => settings::set_homepage(state, homepage).into_json(),
        Intent::SetSearchEngine(engine) => settings::set_search_engine(state, &engine).into_json(),
        Intent::Downloads => downloads::list_downloads(state).into_json(),
        Intent::StartDownload => downloads::start_download(state).into_json(),
        Intent::PauseDownload(id) => downloads::pause_download(state, id).into_json(),
        Intent::ResumeDownload(id) => downloads::resume_download(state, id).into_json(),
        Intent::CancelDownload(id) => downloads::cancel_download(state, id).into_json(),
        Intent::ClearDownloads => downloads::clear_completed_downloads(state).into_json(),
        Intent::State => CommandResult::ok(state.browser().state()).into_json(),
        Intent::Quit => CommandResult::ok(serde_json::Value::Null),
    }
}
