//! Single-shot debounce timer: coalesce rapid triggers into one delayed task.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{Result, RuntimeError};

/// Owns at most one pending timer. Scheduling while a timer is armed aborts
/// the old one first, so in a burst of calls only the last task ever runs.
///
/// One instance per context that needs independent debounce behavior; the
/// timer handle is the only state.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any not-yet-fired task, then arm a new single-shot timer that
    /// runs `task` after `delay_ms`. Negative delays are rejected.
    ///
    /// Once the timer fires the task is detached: superseding or cancelling
    /// afterwards only affects un-fired timers, never work already underway.
    pub fn schedule<F>(&self, delay_ms: i64, task: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if delay_ms < 0 {
            return Err(RuntimeError::InvalidDelay(delay_ms));
        }
        let delay = Duration::from_millis(delay_ms as u64);

        let mut pending = self.lock_pending();
        if let Some(prev) = pending.take() {
            prev.abort();
            debug!("debounce: superseded pending timer");
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(task);
        }));
        Ok(())
    }

    /// Cancel the outstanding timer if any. Idempotent, and a no-op when
    /// called from inside the fired task itself (aborting a finished task
    /// does nothing).
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    /// True while a scheduled timer has neither fired nor been cancelled.
    pub fn is_armed(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // A panicked timer task cannot leave the option in a bad state.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
