//! Simulated download driver

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::download::{DownloadControl, DownloadStatus};
use crate::table::{DownloadTable, TickOutcome};

/// Last tick; its progress value is 100 percent
const FINAL_TICK: u8 = 100;

/// Timing of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Delay before each progress step
    pub tick_interval: Duration,
    /// How often a paused driver re-checks its record without a signal
    pub poll_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl SimulationConfig {
    pub fn from_millis(tick_ms: u64, poll_ms: u64) -> Self {
        Self {
            tick_interval: Duration::from_millis(tick_ms),
            poll_interval: Duration::from_millis(poll_ms),
        }
    }
}

/// Drive one download from tick 0 to 100, then mark it completed.
///
/// The table lock is taken only for single steps and never held across an
/// await. The driver exits as soon as its record is gone or a cancel signal
/// arrives.
pub(crate) async fn run_download_task(
    table: Arc<Mutex<DownloadTable>>,
    download_id: u64,
    mut control: watch::Receiver<DownloadControl>,
    config: SimulationConfig,
) {
    let mut tick: u8 = 0;

    while tick <= FINAL_TICK {
        if !wait_while_paused(&table, download_id, &mut control, config.poll_interval).await {
            return;
        }

        tokio::time::sleep(config.tick_interval).await;

        let outcome = table.lock().apply_tick(download_id, tick);
        match outcome {
            TickOutcome::Vanished => {
                tracing::debug!(download_id = %download_id, tick, "Download vanished, driver exiting");
                return;
            }
            TickOutcome::Deferred => continue,
            TickOutcome::Applied => tick += 1,
        }
    }

    let completed = table.lock().complete(download_id);
    if completed.is_some() {
        tracing::info!(download_id = %download_id, "Completed download");
    }
}

/// Block while the record is paused. Returns false when the driver should
/// exit instead.
async fn wait_while_paused(
    table: &Mutex<DownloadTable>,
    download_id: u64,
    control: &mut watch::Receiver<DownloadControl>,
    poll_interval: Duration,
) -> bool {
    loop {
        if *control.borrow() == DownloadControl::Cancel {
            return false;
        }

        let status = table.lock().status_of(download_id);
        match status {
            None => return false,
            Some(DownloadStatus::Paused) => {}
            Some(_) => return true,
        }

        tokio::select! {
            changed = control.changed() => {
                // Sender dropped: the record was removed
                if changed.is_err() {
                    return false;
                }
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }
}
