//! Server-side rendered HTML dashboard.

pub mod home;

use axum::Router;
use axum::routing::{get, post};

use notidash_app::ports::NotificationApi;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<A>() -> Router<AppState<A>>
where
    A: NotificationApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<A>))
        .route("/notifications", post(home::create::<A>))
        .route("/notifications/{id}/delete", post(home::delete::<A>))
}
