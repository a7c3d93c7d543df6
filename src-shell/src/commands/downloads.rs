//! Download commands

use serde::Serialize;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct DownloadInfo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub status: String,
    pub progress: u8,
    pub started_at: String,
}

impl From<tabshell_core::Download> for DownloadInfo {
    fn from(download: tabshell_core::Download) -> Self {
        Self {
            id: download.id,
            status: download.status.as_str().to_string(),
            progress: download.progress,
            started_at: download.started_at.to_rfc3339(),
            name: download.name,
            url: download.url,
        }
    }
}

pub fn list_downloads(state: &AppState) -> CommandResult<Vec<DownloadInfo>> {
    let downloads = state.browser().downloads();
    CommandResult::ok(downloads.into_iter().map(DownloadInfo::from).collect())
}

pub fn start_download(state: &AppState) -> CommandResult<DownloadInfo> {
    CommandResult::ok(state.browser().start_download().into())
}

pub fn pause_download(state: &AppState, download_id: u64) -> CommandResult<DownloadInfo> {
    match state.with_browser(|browser| browser.pause_download(download_id)) {
        Ok(download) => CommandResult::ok(download.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn resume_download(state: &AppState, download_id: u64) -> CommandResult<DownloadInfo> {
    match state.with_browser(|browser| browser.resume_download(download_id)) {
        Ok(download) => CommandResult::ok(download.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn cancel_download(state: &AppState, download_id: u64) -> CommandResult<DownloadInfo> {
    match state.with_browser(|browser| browser.cancel_download(download_id)) {
        Ok(download) => CommandResult::ok(download.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn clear_completed_downloads(state: &AppState) -> CommandResult<Vec<DownloadInfo>> {
    state.browser().clear_completed_downloads();
    list_downloads(state)
}
