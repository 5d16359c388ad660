//! Fixed-interval refresh task with an owned stop/abort lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ports::NotificationApi;
use crate::services::dashboard_service::DashboardService;

/// Default seconds between refresh cycles.
pub const DEFAULT_POLL_SECONDS: u64 = 10;

/// Spawns the periodic refresh task for a [`DashboardService`].
///
/// The cadence is fixed — no backoff, no jitter. A cycle that outlives its
/// period overlaps the next one; the snapshot's generation guard keeps the
/// slower cycle's stale results from being applied.
pub struct Poller<A> {
    service: Arc<DashboardService<A>>,
    period: Duration,
}

impl<A> Poller<A>
where
    A: NotificationApi + Send + Sync + 'static,
{
    /// Create a poller refreshing `service` every `period`.
    pub fn new(service: Arc<DashboardService<A>>, period: Duration) -> Self {
        Self { service, period }
    }

    /// Spawn the refresh task.
    ///
    /// The first cycle runs immediately (the page's initial load), then one
    /// per period. The returned handle owns the task.
    #[must_use]
    pub fn spawn(&self) -> PollerHandle {
        let service = Arc::clone(&self.service);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let period = self.period;

        let handle = tokio::spawn(async move {
            tracing::debug!(period_secs = period.as_secs(), "poller starting");
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;

                    _ = shutdown_rx.changed() => {
                        tracing::debug!("poller shutting down");
                        break;
                    }

                    _ = ticker.tick() => service.refresh().await,
                }
            }
        });

        PollerHandle {
            shutdown: shutdown_tx,
            handle,
        }
    }
}

/// Handle owning a running poller task.
///
/// Dropping the handle also ends the task: the shutdown channel closes,
/// which the task treats the same as an explicit [`stop`](Self::stop) —
/// except that nothing waits for the in-flight cycle.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollerHandle {
    /// Whether the task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal shutdown and wait for the in-flight cycle to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }

    /// Abort immediately without waiting.
    pub fn abort(&self) {
        self.handle.abort();
    }
}
