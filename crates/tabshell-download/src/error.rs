//! Download error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DownloadError {
    #[error("Download not found: {0}")]
    NotFound(u64),
}
