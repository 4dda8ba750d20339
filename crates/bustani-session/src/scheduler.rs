//! # Scheduler Module
//!
//! Cancellable scheduled callbacks for the mock "processing" delays (the
//! 2.5s blend animation, the crop scan analysis pause).
//!
//! ## Why Not Fire-and-Forget?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The original screens scheduled bare timeouts and did not always clear  │
//! │  them on unmount, leaving callbacks that fire into a dead screen.       │
//! │                                                                         │
//! │  Here every scheduled callback is owned by a TaskHandle:                │
//! │                                                                         │
//! │    spawn(delay, f) ──► TaskHandle                                       │
//! │         │                  │ cancel() / drop                            │
//! │         ▼                  ▼                                            │
//! │    select! { sleep ──► f()   |   shutdown ──► never runs f }            │
//! │                                                                         │
//! │  Dropping the handle cancels the task, so a callback cannot outlive     │
//! │  the scope that scheduled it.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A delay task only ever receives one control message, so a `oneshot`
//! channel raced against the sleep in `select!` is all the machinery needed.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// A scheduled, cancellable callback.
#[derive(Debug)]
pub struct DelayedTask;

/// Handle owning a scheduled callback.
///
/// Dropping the handle cancels the callback if it has not fired yet.
#[derive(Debug)]
pub struct TaskHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl DelayedTask {
    /// Schedules `callback` to run after `delay` on the current runtime.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// // Simulate the blend finishing after 2.5s; cancelled automatically
    /// // if the screen's handle is dropped first.
    /// let handle = DelayedTask::spawn(Duration::from_millis(2500), move || {
    ///     blending.store(false, Ordering::SeqCst);
    /// });
    /// ```
    pub fn spawn<F>(delay: Duration, callback: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        let join = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    callback();
                }
                // Fires on explicit cancel AND on handle drop (closed channel).
                _ = cancel_rx => {
                    debug!("scheduled task cancelled before firing");
                }
            }
        });

        TaskHandle {
            cancel_tx: Some(cancel_tx),
            join,
        }
    }
}

impl TaskHandle {
    /// Cancels the scheduled callback if it has not fired yet.
    pub fn cancel(mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // Send fails if the task already completed; nothing to cancel then.
            let _ = tx.send(());
        }
    }

    /// Whether the task has finished (fired or cancelled).
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the task to settle. Test helper; the view layer never joins.
    ///
    /// The cancel sender must stay alive while we wait, otherwise the task
    /// sees a closed channel and cancels itself.
    pub async fn join(mut self) {
        let _ = (&mut self.join).await;
        // Task is done; clear the sender so Drop has nothing to signal.
        self.cancel_tx = None;
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_callback_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = DelayedTask::spawn(Duration::from_millis(10), move || {
            flag.store(true, Ordering::SeqCst);
        });

        handle.join().await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_prevents_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = DelayedTask::spawn(Duration::from_secs(60), move || {
            flag.store(true, Ordering::SeqCst);
        });

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        {
            let _handle = DelayedTask::spawn(Duration::from_secs(60), move || {
                flag.store(true, Ordering::SeqCst);
            });
            // Handle dropped here, before the delay elapses.
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_after_fire_is_harmless() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = DelayedTask::spawn(Duration::from_millis(5), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished());
        handle.cancel();
        assert!(fired.load(Ordering::SeqCst));
    }
}
