//! Cancellable deferred work.
//!
//! A [`ViewTimer`] owns a spawned task that waits out a delay before running
//! its callback. Dropping the handle aborts the task, so whoever owns the
//! timer controls whether it ever fires; the session handle drops a view's
//! timers the moment that view is left.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Handle to a scheduled callback. Dropping it cancels the callback.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
#[must_use = "a timer stops the moment its handle is dropped"]
pub struct ViewTimer {
    handle: JoinHandle<()>,
}

impl ViewTimer {
    /// Runs `callback` once after `delay`.
    pub fn once<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    /// Runs `callback` every `period` until cancelled, first firing after
    /// one full period.
    pub fn repeating<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                time::sleep(period).await;
                callback();
            }
        });
        Self { handle }
    }

    /// Stops the timer. Firings that have not happened yet never will.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the timer has fired for the last time or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ViewTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
