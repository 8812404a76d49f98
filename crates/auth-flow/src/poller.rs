//! Cancellable background session refresh.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the background refresh task. Dropping the handle aborts the task,
/// so a stale refresh can never fire after teardown or reconfiguration.
pub(crate) struct SessionPoller {
    handle: JoinHandle<()>,
}

impl SessionPoller {
    /// Spawn a task invoking `tick` once per `period`, starting one full
    /// period from now (the caller already refreshed at time zero).
    pub(crate) fn spawn<F, Fut>(period: Duration, tick: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            loop {
                ticker.tick().await;
                debug!("Session ping");
                tick().await;
            }
        });
        Self { handle }
    }
}

impl Drop for SessionPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
