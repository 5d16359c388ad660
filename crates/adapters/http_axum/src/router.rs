//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use notidash_app::ports::NotificationApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Dashboard routes sit at `/`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<A>(state: AppState<A>) -> Router
where
    A: NotificationApi + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
