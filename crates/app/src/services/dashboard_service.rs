//! Dashboard service — use-cases behind the notification dashboard.

use notidash_domain::error::DashboardError;
use notidash_domain::id::NotificationId;
use notidash_domain::notification::{self, Notification, NotificationDraft};
use notidash_domain::time::now;

use crate::ports::NotificationApi;
use crate::snapshot::{DashboardSnapshot, SnapshotStore};

/// Application service driving the dashboard: schedule, delete, refresh.
///
/// Owns the snapshot the pages render from; the poller and the HTTP
/// handlers share one instance behind an `Arc`.
pub struct DashboardService<A> {
    api: A,
    store: SnapshotStore,
}

impl<A: NotificationApi> DashboardService<A> {
    /// Create a new service backed by the given API client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: SnapshotStore::new(),
        }
    }

    /// Schedule a new notification, then refresh the snapshot.
    ///
    /// The refresh runs before returning so the next render already shows
    /// the new entry instead of waiting for the poller's cycle.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when the draft is invalid
    /// (nothing is sent in that case), otherwise whatever the backend call
    /// produced. The snapshot is left untouched on failure.
    pub async fn schedule(&self, draft: NotificationDraft) -> Result<Notification, DashboardError> {
        draft.validate()?;
        let created = self.api.create(draft).await?;
        tracing::info!(id = %created.id, send_at = %created.send_at, "notification scheduled");
        self.refresh().await;
        Ok(created)
    }

    /// Delete a notification, then refresh the snapshot.
    ///
    /// There is no optimistic removal: the entry leaves the list only once
    /// a refresh no longer reports it.
    ///
    /// # Errors
    ///
    /// Propagates the backend error; the snapshot is left untouched when
    /// the delete fails.
    pub async fn delete(&self, id: NotificationId) -> Result<(), DashboardError> {
        self.api.delete(id.clone()).await?;
        tracing::info!(%id, "notification deleted");
        self.refresh().await;
        Ok(())
    }

    /// Run one refresh cycle: fetch the list, then the metrics.
    ///
    /// A list failure replaces the list with its error message; a metrics
    /// failure is only logged, leaving the previous counts on screen. Both
    /// outcomes are stamped with one ticket taken before the fetches, so an
    /// overlapping newer cycle wins regardless of completion order.
    pub async fn refresh(&self) {
        let generation = self.store.begin();

        let outcome = match self.api.list().await {
            Ok(mut notifications) => {
                notification::sort_newest_first(&mut notifications);
                Ok(notifications)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load notifications");
                Err(err.to_string())
            }
        };
        self.store.apply_list(generation, outcome, now());

        match self.api.metrics().await {
            Ok(metrics) => {
                self.store.apply_metrics(generation, metrics, now());
            }
            Err(err) => tracing::warn!(error = %err, "failed to load metrics"),
        }
    }

    /// Clone out the current render state.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.store.read()
    }
}
