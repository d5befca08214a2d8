//! Landing splash timer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// One-shot, cancellable transition out of the landing screen.
///
/// The armed flag is held locked while the callback runs, so once
/// [`deactivate`](Self::deactivate) returns the callback has either already
/// completed or will never run.
pub struct LandingController {
    armed: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl LandingController {
    pub fn new() -> Self {
        Self {
            armed: Arc::new(Mutex::new(false)),
            task: None,
        }
    }

    /// Schedule `on_finish` to run once after `delay`.
    ///
    /// Replaces any previous arming. Must be called inside a tokio runtime.
    pub fn activate<F>(&mut self, delay: Duration, on_finish: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.deactivate();

        let armed = Arc::new(Mutex::new(true));
        self.armed = Arc::clone(&armed);
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut armed = armed.lock();
            if *armed {
                *armed = false;
                on_finish();
            }
        }));
        tracing::debug!(delay_ms = delay.as_millis() as u64, "landing timer armed");
    }

    /// Cancel a pending transition. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        let was_armed = std::mem::replace(&mut *self.armed.lock(), false);
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if was_armed {
            tracing::debug!("landing timer cancelled");
        }
    }

    /// True while a transition is scheduled and has not fired.
    pub fn is_armed(&self) -> bool {
        *self.armed.lock()
    }
}

impl Default for LandingController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LandingController {
    fn drop(&mut self) {
        self.deactivate();
    }
}
