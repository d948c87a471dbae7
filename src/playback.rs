//! Cancellable periodic driver for animation playback.
//!
//! A dedicated worker thread sleeps on a condvar with a timeout and applies
//! one playback tick per elapsed interval, always through the editor's
//! shared state entry point. Stopping flips the cancellation flag and wakes
//! the worker; a tick that is already in flight re-checks the `playing` flag
//! under the state lock, so a stop always wins the race.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::editor::Shared;
use crate::reducer;

/// Owns at most one running playback worker.
pub(crate) struct PlaybackScheduler {
    worker: Option<Worker>,
}

struct Worker {
    token: Arc<CancelToken>,
    handle: JoinHandle<()>,
}

struct CancelToken {
    cancelled: Mutex<bool>,
    condvar: Condvar,
}

impl CancelToken {
    fn new() -> Self {
        Self {
            cancelled: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    fn cancel(&self) {
        *self.cancelled.lock() = true;
        self.condvar.notify_all();
    }

    /// Sleeps one full interval. Returns `false` once cancelled, waking
    /// early if the cancellation arrives mid-sleep.
    fn sleep(&self, interval: Duration) -> bool {
        let deadline = Instant::now() + interval;
        let mut cancelled = self.cancelled.lock();
        while !*cancelled {
            if self
                .condvar
                .wait_until(&mut cancelled, deadline)
                .timed_out()
            {
                return !*cancelled;
            }
        }
        false
    }
}

impl PlaybackScheduler {
    pub(crate) fn new() -> Self {
        Self { worker: None }
    }

    /// Spawns a worker ticking at `interval`. Any previous worker is
    /// cancelled first.
    pub(crate) fn start(&mut self, shared: Arc<Shared>, interval: Duration) {
        self.stop();

        let token = Arc::new(CancelToken::new());
        let worker_token = Arc::clone(&token);
        let spawned = thread::Builder::new()
            .name("flipbook-playback".into())
            .spawn(move || {
                while worker_token.sleep(interval) {
                    shared.apply(reducer::playback_tick);
                }
            });

        match spawned {
            Ok(handle) => self.worker = Some(Worker { token, handle }),
            Err(err) => log::error!("failed to spawn playback worker: {err}"),
        }
    }

    /// Cancels and joins the worker, if one is running. No tick can apply
    /// once this returns.
    pub(crate) fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.token.cancel();
            if worker.handle.join().is_err() {
                log::error!("playback worker panicked");
            }
        }
    }
}

impl Drop for PlaybackScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
