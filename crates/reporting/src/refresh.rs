//! Debounced refresh scheduling.
//!
//! Filter and sort changes on a live view are coalesced through a debounce
//! window before triggering a re-fetch. Scheduling new work aborts any
//! pending or in-flight task first (cancel-and-replace), so at most one
//! fetch is ever outstanding per scheduler — the invariant every view
//! relies on.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

pub struct RefreshScheduler {
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `work` to run after the debounce window, replacing any
    /// previously scheduled or running task.
    pub fn schedule<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            work.await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drop whatever is scheduled without replacing it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
