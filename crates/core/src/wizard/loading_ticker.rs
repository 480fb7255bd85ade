//! Cosmetic loading-message rotation.
//!
//! A spawned task advances a shared index on a fixed period while a generation
//! is in flight. The task is aborted on [`LoadingTicker::stop`] and on drop.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct LoadingTicker {
    handle: JoinHandle<()>,
    index: Arc<AtomicUsize>,
}

impl LoadingTicker {
    /// Start rotating `index` through `0..message_count` every `period`.
    ///
    /// Returns `None` outside a Tokio runtime or when there is nothing to rotate.
    pub fn try_start(
        index: Arc<AtomicUsize>,
        message_count: usize,
        period: Duration,
    ) -> Option<Self> {
        if message_count == 0 {
            return None;
        }
        let runtime = Handle::try_current().ok()?;
        index.store(0, Ordering::SeqCst);

        let shared = index.clone();
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let next = (shared.load(Ordering::SeqCst) + 1) % message_count;
                shared.store(next, Ordering::SeqCst);
            }
        });

        debug!("Loading ticker started ({:?} period)", period);
        Some(Self { handle, index })
    }

    /// Current message index.
    pub fn index(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for LoadingTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Loading ticker stopped");
    }
}

impl fmt::Debug for LoadingTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingTicker")
            .field("index", &self.index())
            .finish()
    }
}
