//! Download manager

use parking_lot::Mutex;
use std::sync::Arc;

use crate::download::Download;
use crate::driver::{run_download_task, SimulationConfig};
use crate::error::DownloadError;
use crate::table::DownloadTable;
use crate::Result;

pub struct DownloadManager {
    /// Records and driver control channels
    table: Arc<Mutex<DownloadTable>>,
    config: SimulationConfig,
}

impl DownloadManager {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            table: Arc::new(Mutex::new(DownloadTable::new())),
            config,
        }
    }

    /// Create a download and spawn its driver. Must be called from within a
    /// tokio runtime.
    pub fn start_download(&self) -> Download {
        let (download, rx) = self.table.lock().insert();

        tracing::info!(
            download_id = %download.id,
            name = %download.name,
            "Started download"
        );

        let table = Arc::clone(&self.table);
        let config = self.config;
        let download_id = download.id;
        tokio::spawn(async move {
            run_download_task(Arc::clone(&table), download_id, rx, config).await;
            table.lock().release(download_id);
        });

        download
    }

    pub fn pause_download(&self, id: u64) -> Result<Download> {
        let download = self.table.lock().pause(id)?;
        tracing::info!(download_id = %id, progress = download.progress, "Paused download");
        Ok(download)
    }

    pub fn resume_download(&self, id: u64) -> Result<Download> {
        let download = self.table.lock().resume(id)?;
        tracing::info!(download_id = %id, progress = download.progress, "Resumed download");
        Ok(download)
    }

    /// Remove a download in any state; its driver stops without writing
    pub fn cancel_download(&self, id: u64) -> Result<Download> {
        let download = self.table.lock().cancel(id)?;
        tracing::info!(download_id = %id, "Cancelled download");
        Ok(download)
    }

    pub fn clear_completed_downloads(&self) -> usize {
        let removed = self.table.lock().clear_completed();
        tracing::debug!(removed, "Cleared completed downloads");
        removed
    }

    /// All downloads, most recent first
    pub fn downloads(&self) -> Vec<Download> {
        self.table.lock().snapshot()
    }

    pub fn get_download(&self, id: u64) -> Result<Download> {
        self.table
            .lock()
            .get(id)
            .cloned()
            .ok_or(DownloadError::NotFound(id))
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }
}

impl Clone for DownloadManager {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            config: self.config,
        }
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
