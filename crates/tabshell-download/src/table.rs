//! Download table
//!
//! Records plus the control sender of each running driver. Every method is
//! one locked step; callers hold the table mutex for the duration.

use std::collections::HashMap;
use tokio::sync::watch;

use crate::download::{Download, DownloadControl, DownloadStatus};
use crate::error::DownloadError;
use crate::Result;

/// What a driver tick did to its record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// Progress written
    Applied,
    /// Record is paused; nothing written
    Deferred,
    /// Record no longer exists
    Vanished,
}

#[derive(Debug)]
pub(crate) struct DownloadTable {
    /// Most recent first
    entries: Vec<Download>,
    controls: HashMap<u64, watch::Sender<DownloadControl>>,
    next_id: u64,
}

impl DownloadTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            controls: HashMap::new(),
            next_id: 1,
        }
    }

    /// Insert a fresh record at the front and open its control channel
    pub fn insert(&mut self) -> (Download, watch::Receiver<DownloadControl>) {
        let id = self.next_id;
        self.next_id += 1;

        let download = Download::new(id);
        let (tx, rx) = watch::channel(DownloadControl::Run);

        self.entries.insert(0, download.clone());
        self.controls.insert(id, tx);

        (download, rx)
    }

    pub fn get(&self, id: u64) -> Option<&Download> {
        self.entries.iter().find(|d| d.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Download> {
        self.entries.iter_mut().find(|d| d.id == id)
    }

    pub fn status_of(&self, id: u64) -> Option<DownloadStatus> {
        self.get(id).map(|d| d.status)
    }

    pub fn snapshot(&self) -> Vec<Download> {
        self.entries.clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Write tick `progress` unless the record is paused or gone
    pub fn apply_tick(&mut self, id: u64, progress: u8) -> TickOutcome {
        match self.get_mut(id) {
            None => TickOutcome::Vanished,
            Some(d) if d.is_paused() => TickOutcome::Deferred,
            Some(d) => {
                d.progress = d.progress.max(progress);
                TickOutcome::Applied
            }
        }
    }

    pub fn complete(&mut self, id: u64) -> Option<Download> {
        let download = self.get_mut(id)?;
        download.status = DownloadStatus::Completed;
        download.progress = 100;
        let download = download.clone();
        self.controls.remove(&id);
        Some(download)
    }

    /// InProgress -> Paused; other states are left alone
    pub fn pause(&mut self, id: u64) -> Result<Download> {
        let download = self.get_mut(id).ok_or(DownloadError::NotFound(id))?;
        if download.status != DownloadStatus::InProgress {
            tracing::debug!(download_id = %id, status = %download.status, "pause ignored");
            return Ok(download.clone());
        }
        download.status = DownloadStatus::Paused;
        let download = download.clone();
        self.signal(id, DownloadControl::Pause);
        Ok(download)
    }

    /// Paused -> InProgress; other states are left alone
    pub fn resume(&mut self, id: u64) -> Result<Download> {
        let download = self.get_mut(id).ok_or(DownloadError::NotFound(id))?;
        if download.status != DownloadStatus::Paused {
            tracing::debug!(download_id = %id, status = %download.status, "resume ignored");
            return Ok(download.clone());
        }
        download.status = DownloadStatus::InProgress;
        let download = download.clone();
        self.signal(id, DownloadControl::Run);
        Ok(download)
    }

    /// Remove the record in any state and stop its driver
    pub fn cancel(&mut self, id: u64) -> Result<Download> {
        let index = self
            .entries
            .iter()
            .position(|d| d.id == id)
            .ok_or(DownloadError::NotFound(id))?;
        let removed = self.entries.remove(index);

        if let Some(tx) = self.controls.remove(&id) {
            let _ = tx.send(DownloadControl::Cancel);
        }

        Ok(removed)
    }

    /// Drop every completed record. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|d| !d.is_completed());
        before - self.entries.len()
    }

    /// Forget the control sender of a driver that has exited
    pub fn release(&mut self, id: u64) {
        self.controls.remove(&id);
    }

    #[cfg(test)]
    pub fn has_driver(&self, id: u64) -> bool {
        self.controls.contains_key(&id)
    }

    fn signal(&self, id: u64, control: DownloadControl) {
        if let Some(tx) = self.controls.get(&id) {
            let _ = tx.send(control);
        }
    }
}

impl Default for DownloadTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_front_and_monotonic_ids() {
        let mut table = DownloadTable::new();
        let (first, _rx1) = table.insert();
        let (second, _rx2) = table.insert();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let ids: Vec<u64> = table.snapshot().iter().map(|d| d.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn test_tick_respects_pause_and_removal() {
        let mut table = DownloadTable::new();
        let (download, _rx) = table.insert();

        assert_eq!(table.apply_tick(download.id, 5), TickOutcome::Applied);
        table.pause(download.id).unwrap();
        assert_eq!(table.apply_tick(download.id, 6), TickOutcome::Deferred);
        assert_eq!(table.get(download.id).unwrap().progress, 5);

        table.cancel(download.id).unwrap();
        assert_eq!(table.apply_tick(download.id, 6), TickOutcome::Vanished);
    }

    #[test]
    fn test_pause_resume_only_from_valid_states() {
        let mut table = DownloadTable::new();
        let (download, _rx) = table.insert();
        let id = download.id;

        assert_eq!(table.resume(id).unwrap().status, DownloadStatus::InProgress);
        assert_eq!(table.pause(id).unwrap().status, DownloadStatus::Paused);
        assert_eq!(table.pause(id).unwrap().status, DownloadStatus::Paused);
        assert_eq!(table.resume(id).unwrap().status, DownloadStatus::InProgress);

        table.complete(id).unwrap();
        assert_eq!(table.pause(id).unwrap().status, DownloadStatus::Completed);
        assert_eq!(table.resume(id).unwrap().status, DownloadStatus::Completed);
    }

    #[test]
    fn test_control_signals() {
        let mut table = DownloadTable::new();
        let (download, rx) = table.insert();

        table.pause(download.id).unwrap();
        assert_eq!(*rx.borrow(), DownloadControl::Pause);
        table.resume(download.id).unwrap();
        assert_eq!(*rx.borrow(), DownloadControl::Run);
        table.cancel(download.id).unwrap();
        assert_eq!(*rx.borrow(), DownloadControl::Cancel);
        assert!(!table.has_driver(download.id));
    }

    #[test]
    fn test_missing_ids() {
        let mut table = DownloadTable::new();
        assert_eq!(table.pause(3), Err(DownloadError::NotFound(3)));
        assert_eq!(table.resume(3), Err(DownloadError::NotFound(3)));
        assert_eq!(table.cancel(3), Err(DownloadError::NotFound(3)));
        assert!(table.complete(3).is_none());
    }

    #[test]
    fn test_clear_completed() {
        let mut table = DownloadTable::new();
        let (a, _rx1) = table.insert();
        let (b, _rx2) = table.insert();
        table.complete(a.id);

        assert_eq!(table.clear_completed(), 1);
        assert_eq!(table.len(), 1);
        assert!(table.get(b.id).is_some());
        assert_eq!(table.clear_completed(), 0);
    }
}
