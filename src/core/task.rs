//! Background execution for long-running mutating commands.
//!
//! Stash operations may run on a worker thread so the host UI stays
//! responsive. Instead of a fire-and-forget thread, the worker posts its
//! result over a channel wrapped in [`BackgroundTask`], so failures are
//! observable and the caller decides whether to poll or block.
//!
//! # Public API
//! - [`BackgroundTask`]: handle to one in-flight operation

use crate::core::error::{Result, SceneGitError};
use std::sync::mpsc;
use std::thread::JoinHandle;

/// Handle to a mutating command running on a worker thread. The operation
/// counter advances inside the worker when the command succeeds, so caches
/// become stale on the next redraw tick after completion; this handle is how
/// the *result* gets back.
#[derive(Debug)]
pub struct BackgroundTask<T = String> {
    receiver: mpsc::Receiver<Result<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Run `job` on a new worker thread.
    pub fn spawn(job: impl FnOnce() -> Result<T> + Send + 'static) -> Self {
        let (sender, receiver) = mpsc::channel();
        let worker = std::thread::spawn(move || {
            // The receiver may have been dropped; nothing useful to do then.
            let _ = sender.send(job());
        });
        Self {
            receiver,
            worker: Some(worker),
        }
    }

    /// Non-blocking poll. `None` while the worker is still running; after a
    /// result was taken once, subsequent polls return `None` forever.
    pub fn try_take(&mut self) -> Option<Result<T>> {
        self.receiver.try_recv().ok()
    }

    /// Block until the worker finishes and return its result.
    pub fn wait(mut self) -> Result<T> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| SceneGitError::BackgroundTaskLost)?;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_returns_job_result() {
        let task = BackgroundTask::spawn(|| Ok(21 * 2));
        assert_eq!(task.wait().unwrap(), 42);
    }

    #[test]
    fn test_wait_surfaces_job_error() {
        let task: BackgroundTask<u32> =
            BackgroundTask::spawn(|| Err(SceneGitError::validation("stash failed")));
        assert!(matches!(
            task.wait(),
            Err(SceneGitError::Validation { .. })
        ));
    }

    #[test]
    fn test_try_take_eventually_sees_result() {
        let mut task = BackgroundTask::spawn(|| Ok("done".to_string()));
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        loop {
            if let Some(result) = task.try_take() {
                assert_eq!(result.unwrap(), "done");
                break;
            }
            assert!(std::time::Instant::now() < deadline, "worker never finished");
            std::thread::yield_now();
        }
    }
}
