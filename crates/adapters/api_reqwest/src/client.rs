//! HTTP client for the scheduler's REST API.

use notidash_app::ports::NotificationApi;
use notidash_domain::error::DashboardError;
use notidash_domain::id::NotificationId;
use notidash_domain::metrics::Metrics;
use notidash_domain::notification::{Notification, NotificationDraft};

/// [`NotificationApi`] implementation over HTTP.
///
/// `base_url` addresses the backend's API root, e.g.
/// `http://127.0.0.1:8080/api`. Holds a reusable [`reqwest::Client`] for
/// connection pooling; requests keep the transport's own timeout defaults.
#[derive(Debug, Clone)]
pub struct HttpNotificationApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpNotificationApi {
    /// Create a client for the given API root. Trailing slashes are
    /// tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl NotificationApi for HttpNotificationApi {
    async fn create(&self, draft: NotificationDraft) -> Result<Notification, DashboardError> {
        let resp = self
            .http
            .post(self.url("/notify"))
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        let resp = check_response(resp).await?;
        resp.json().await.map_err(read_failure)
    }

    async fn list(&self) -> Result<Vec<Notification>, DashboardError> {
        let resp = self
            .http
            .get(self.url("/notify"))
            .send()
            .await
            .map_err(transport)?;
        let resp = check_response(resp).await?;
        resp.json().await.map_err(read_failure)
    }

    async fn delete(&self, id: NotificationId) -> Result<(), DashboardError> {
        let resp = self
            .http
            .delete(self.url(&format!("/notify/{id}")))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?;
        Ok(())
    }

    async fn metrics(&self) -> Result<Metrics, DashboardError> {
        let resp = self
            .http
            .get(self.url("/metrics"))
            .send()
            .await
            .map_err(transport)?;
        let resp = check_response(resp).await?;
        resp.json().await.map_err(read_failure)
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
///
/// The backend sends plain-text error bodies; the raw text is preserved
/// verbatim so the dashboard can show exactly what the server said.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, DashboardError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "backend rejected request");
    Err(DashboardError::Api {
        status: status.as_u16(),
        body,
    })
}

/// Map a send-phase failure (connect, DNS, timeout).
fn transport(err: reqwest::Error) -> DashboardError {
    DashboardError::Transport(err.to_string())
}

/// Map a body-read failure: decode errors mean a contract mismatch,
/// anything else is the connection dying mid-body.
fn read_failure(err: reqwest::Error) -> DashboardError {
    if err.is_decode() {
        DashboardError::Decode(err.to_string())
    } else {
        DashboardError::Transport(err.to_string())
    }
}
