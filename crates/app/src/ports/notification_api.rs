//! Backend API port — the dashboard's window onto the scheduling service.

use std::future::Future;

use notidash_domain::error::DashboardError;
use notidash_domain::id::NotificationId;
use notidash_domain::metrics::Metrics;
use notidash_domain::notification::{Notification, NotificationDraft};

/// Client for the notification-scheduling backend.
///
/// Implementations own every wire concern (base URL, encoding, error
/// mapping); the application layer sees only domain types.
pub trait NotificationApi {
    /// Schedule a new notification.
    ///
    /// Returns the notification as the backend recorded it, id included.
    fn create(
        &self,
        draft: NotificationDraft,
    ) -> impl Future<Output = Result<Notification, DashboardError>> + Send;

    /// Fetch every notification the backend knows about.
    ///
    /// The backend offers no paging or filtering; ordering is applied
    /// client-side.
    fn list(&self) -> impl Future<Output = Result<Vec<Notification>, DashboardError>> + Send;

    /// Delete a notification.
    ///
    /// The backend cancels rather than purges — the entry keeps appearing
    /// in [`list`](Self::list) with status `cancelled` — but callers only
    /// rely on a success answer here.
    fn delete(
        &self,
        id: NotificationId,
    ) -> impl Future<Output = Result<(), DashboardError>> + Send;

    /// Fetch aggregate counts grouped by status.
    fn metrics(&self) -> impl Future<Output = Result<Metrics, DashboardError>> + Send;
}
