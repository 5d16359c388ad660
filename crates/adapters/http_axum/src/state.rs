//! Shared application state for axum handlers.

use std::sync::Arc;

use notidash_app::ports::NotificationApi;
use notidash_app::services::dashboard_service::DashboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the API client type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the client itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<A> {
    /// Dashboard service: schedule, delete, snapshot.
    pub dashboard: Arc<DashboardService<A>>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
        }
    }
}

impl<A> AppState<A>
where
    A: NotificationApi + Send + Sync + 'static,
{
    /// Create a new application state owning the service.
    pub fn new(dashboard: DashboardService<A>) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with the background poller
    /// before constructing the HTTP state.
    pub fn from_arc(dashboard: Arc<DashboardService<A>>) -> Self {
        Self { dashboard }
    }
}
