//! Input resolution for the address bar

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::Result;

/// Placeholder page shown by fresh tabs and during a reload.
pub const BLANK_URL: &str = "about:blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchEngine {
    Google,
    DuckDuckGo,
    Bing,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 3] = [
        SearchEngine::Google,
        SearchEngine::DuckDuckGo,
        SearchEngine::Bing,
    ];

    /// Query URL prefix; the encoded query is appended verbatim.
    pub fn query_prefix(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Bing => "Bing",
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::Google
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = NavigationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "duckduckgo" => Ok(SearchEngine::DuckDuckGo),
            "bing" => Ok(SearchEngine::Bing),
            _ => Err(NavigationError::UnknownSearchEngine(s.to_string())),
        }
    }
}

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Load a URL directly
    Navigate(String),
    /// Load the search engine's result page for the query
    Search(String),
}

impl InputResolution {
    /// The load-ready URL regardless of how it was produced
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputResolver {
    search_engine: SearchEngine,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_engine(search_engine: SearchEngine) -> Self {
        Self { search_engine }
    }

    pub fn set_search_engine(&mut self, search_engine: SearchEngine) {
        self.search_engine = search_engine;
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.search_engine
    }

    /// Resolve raw address bar text into a load-ready URL.
    ///
    /// The input is taken as typed: no trimming, no percent-encoding beyond
    /// turning spaces into `+` for search queries.
    pub fn resolve(&self, input: &str) -> Result<InputResolution> {
        if input.is_empty() {
            return Err(NavigationError::EmptyInput);
        }

        if Self::looks_like_query(input) {
            return Ok(InputResolution::Search(self.build_search_url(input)));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(InputResolution::Navigate(input.to_string()));
        }

        Ok(InputResolution::Navigate(format!("https://{}", input)))
    }

    /// No dot, or any space, unless the text already starts with `http`
    fn looks_like_query(input: &str) -> bool {
        (!input.contains('.') || input.contains(' ')) && !input.starts_with("http")
    }

    fn build_search_url(&self, query: &str) -> String {
        format!("{}{}", self.search_engine.query_prefix(), query.replace(' ', "+"))
    }
}

/// Display title for a URL: the host part with any scheme and a leading
/// `www.` removed. Bare words come back unchanged.
pub fn title_for_url(url: &str) -> String {
    let without_scheme = match url.split("//").nth(1) {
        Some(rest) => rest,
        None => url,
    };
    let host = without_scheme.split('/').next().unwrap_or(without_scheme);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}
