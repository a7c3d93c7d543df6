//! tabshell Download Simulator
//!
//! - A download is a synthetic progress counter, no bytes are transferred
//! - One tokio task drives each download from 0 to 100 percent
//! - Pause freezes progress, resume continues it, cancel removes the record
//! - Drivers refer to their record by id and stop once it is gone

mod download;
mod driver;
mod error;
mod manager;
mod table;

pub use download::{Download, DownloadControl, DownloadStatus};
pub use driver::SimulationConfig;
pub use error::DownloadError;
pub use manager::DownloadManager;

pub type Result<T> = std::result::Result<T, DownloadError>;
