//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Navigation input is empty")]
    EmptyInput,

    #[error("Unknown search engine: {0}")]
    UnknownSearchEngine(String),
}
