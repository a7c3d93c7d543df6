//! Download data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder resource every simulated download points at
pub const PLACEHOLDER_URL: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    /// Driver is advancing progress
    InProgress,
    /// Progress frozen until resumed
    Paused,
    /// Reached 100 percent (terminal)
    Completed,
}

impl DownloadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadStatus::InProgress => "in_progress",
            DownloadStatus::Paused => "paused",
            DownloadStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal sent from commands to a running driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadControl {
    Run,
    Pause,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub status: DownloadStatus,
    /// Percent complete, never decreases
    pub progress: u8,
    pub started_at: DateTime<Utc>,
}

impl Download {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("dummy_file_{}.zip", id),
            url: PLACEHOLDER_URL.to_string(),
            status: DownloadStatus::InProgress,
            progress: 0,
            started_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == DownloadStatus::Completed
    }

    pub fn is_paused(&self) -> bool {
        self.status == DownloadStatus::Paused
    }
}
