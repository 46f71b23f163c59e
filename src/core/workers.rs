//! Background worker pool for long-running probes.
//!
//! The control loop stays single-threaded and non-blocking: anything that
//! can stall (network lookups) runs on this dedicated runtime and reports
//! back through a bounded channel that the loop drains once per tick.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::core::probes::{self, ProbeResult};
use crate::error::{Result, SysdeckError};

const CHANNEL_CAPACITY: usize = 8;

/// Results delivered back to the control loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerUpdate {
    PublicIp(ProbeResult),
}

/// Owns the worker runtime and the handoff channel
pub struct Workers {
    runtime: tokio::runtime::Runtime,
    update_tx: mpsc::Sender<WorkerUpdate>,
    update_rx: mpsc::Receiver<WorkerUpdate>,
}

impl Workers {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("probe-worker")
            .build()
            .map_err(|e| SysdeckError::worker(e.to_string()))?;

        let (update_tx, update_rx) = mpsc::channel::<WorkerUpdate>(CHANNEL_CAPACITY);

        Ok(Self {
            runtime,
            update_tx,
            update_rx,
        })
    }

    /// Kick off a public address lookup; the result arrives via `poll`.
    /// The lookup itself blocks, so it runs on the blocking pool.
    pub fn request_public_ip(&self) {
        let tx = self.update_tx.clone();
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(probes::fetch_public_ip)
                .await
                .unwrap_or(ProbeResult::Unavailable);
            send_update(tx, WorkerUpdate::PublicIp(result));
        });
    }

    /// Non-blocking drain of one pending update
    pub fn poll(&mut self) -> Option<WorkerUpdate> {
        match self.update_rx.try_recv() {
            Ok(update) => Some(update),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// A full channel drops the update instead of blocking a worker
fn send_update(tx: mpsc::Sender<WorkerUpdate>, update: WorkerUpdate) {
    if let Err(e) = tx.try_send(update) {
        log::warn!("worker update dropped: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn wait_for(workers: &mut Workers) -> Option<WorkerUpdate> {
        for _ in 0..100 {
            if let Some(update) = workers.poll() {
                return Some(update);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn test_handoff_delivers_worker_results() {
        let mut workers = Workers::new().unwrap();

        let tx = workers.update_tx.clone();
        workers.runtime.spawn(async move {
            send_update(tx, WorkerUpdate::PublicIp(ProbeResult::ready("203.0.113.7")));
        });

        assert_eq!(
            wait_for(&mut workers),
            Some(WorkerUpdate::PublicIp(ProbeResult::ready("203.0.113.7")))
        );
    }

    #[test]
    fn test_poll_is_nonblocking_when_idle() {
        let mut workers = Workers::new().unwrap();
        assert_eq!(workers.poll(), None);
    }

    #[test]
    fn test_full_channel_drops_instead_of_blocking() {
        let mut workers = Workers::new().unwrap();

        for _ in 0..CHANNEL_CAPACITY * 2 {
            send_update(
                workers.update_tx.clone(),
                WorkerUpdate::PublicIp(ProbeResult::Unavailable),
            );
        }

        let mut drained = 0;
        while workers.poll().is_some() {
            drained += 1;
        }
        assert_eq!(drained, CHANNEL_CAPACITY);
    }
}
