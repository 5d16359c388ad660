//! Dashboard home page — the whole dashboard on one screen.
//!
//! Renders from the service's snapshot only; a page load never calls the
//! backend. Schedule and delete POST back and redirect (PRG), carrying
//! their outcome as a flash query parameter.

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use notidash_app::ports::NotificationApi;
use notidash_app::snapshot::DashboardSnapshot;
use notidash_domain::error::{DashboardError, ValidationError};
use notidash_domain::id::NotificationId;
use notidash_domain::notification::{Notification, NotificationDraft};
use notidash_domain::time;

use crate::state::AppState;

/// Page reload interval. Matches the poller cadence so a reload never shows
/// a snapshot older than one cycle.
const REFRESH_SECONDS: u32 = 10;

/// Flash shown after a successful schedule.
const SCHEDULED_TEXT: &str = "Notification scheduled successfully!";
/// Flash shown when the backend rejects a delete.
const DELETE_FAILED_TEXT: &str = "Failed to delete notification";

/// Dashboard page template.
///
/// Flash fields use the empty string for "absent" so the template only
/// needs `!=` checks.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    notice: String,
    error: String,
    default_send_at: String,
    total: u64,
    pending: u64,
    sent: u64,
    failed: u64,
    retrying: u64,
    list_failed: bool,
    rows: Vec<NotificationRow>,
}

impl DashboardTemplate {
    fn new(snapshot: DashboardSnapshot, flash: FlashParams) -> Self {
        let (rows, list_failed) = match &snapshot.notifications {
            Ok(notifications) => {
                (notifications.iter().map(NotificationRow::from).collect(), false)
            }
            Err(_) => (Vec::new(), true),
        };

        Self {
            refresh_seconds: REFRESH_SECONDS,
            notice: flash.notice,
            error: flash.error,
            default_send_at: time::format_datetime_local(time::default_send_at(time::now())),
            total: snapshot.metrics.total,
            pending: snapshot.metrics.pending,
            sent: snapshot.metrics.sent,
            failed: snapshot.metrics.failed,
            retrying: snapshot.metrics.retrying,
            list_failed,
            rows,
        }
    }
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// One notification, pre-formatted for the list.
struct NotificationRow {
    id: String,
    message: String,
    status_label: String,
    status_class: &'static str,
    send_at: String,
    created_at: String,
    attempts: u32,
    max_retries: u32,
    /// Empty unless the backend scheduled a retry.
    next_retry: String,
}

impl From<&Notification> for NotificationRow {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message.clone(),
            status_label: notification.status.label().to_string(),
            status_class: notification.status.css_class(),
            send_at: time::format_local(notification.send_at),
            created_at: time::format_local(notification.created_at),
            attempts: notification.attempts,
            max_retries: notification.max_retries,
            next_retry: notification
                .next_retry
                .map(time::format_local)
                .unwrap_or_default(),
        }
    }
}

/// Flash banner carried in the redirect query string.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    #[serde(default)]
    pub notice: String,
    #[serde(default)]
    pub error: String,
}

/// Form data for the schedule form. Raw strings; parsing happens here so
/// a bad value turns into a flash instead of a 422.
#[derive(Deserialize)]
pub struct ScheduleForm {
    pub message: String,
    #[serde(default)]
    pub send_at: String,
    #[serde(default)]
    pub max_retries: String,
}

/// `GET /` — render the dashboard from the current snapshot.
pub async fn index<A>(
    State(state): State<AppState<A>>,
    Query(flash): Query<FlashParams>,
) -> DashboardTemplate
where
    A: NotificationApi + Send + Sync + 'static,
{
    DashboardTemplate::new(state.dashboard.snapshot(), flash)
}

/// `POST /notifications` — schedule a notification (PRG).
///
/// Always redirects: success carries a notice flash, any failure carries
/// an error flash.
pub async fn create<A>(
    State(state): State<AppState<A>>,
    Form(form): Form<ScheduleForm>,
) -> Redirect
where
    A: NotificationApi + Send + Sync + 'static,
{
    let draft = match build_draft(&form) {
        Ok(draft) => draft,
        Err(err) => return flash_redirect("error", &create_error_text(&err)),
    };

    match state.dashboard.schedule(draft).await {
        Ok(_) => flash_redirect("notice", SCHEDULED_TEXT),
        Err(err) => {
            tracing::warn!(error = %err, "schedule request failed");
            flash_redirect("error", &create_error_text(&err))
        }
    }
}

/// `POST /notifications/{id}/delete` — delete a notification (PRG).
pub async fn delete<A>(State(state): State<AppState<A>>, Path(id): Path<String>) -> Redirect
where
    A: NotificationApi + Send + Sync + 'static,
{
    match state.dashboard.delete(NotificationId::new(id)).await {
        Ok(()) => Redirect::to("/"),
        Err(err) => {
            tracing::warn!(error = %err, "delete request failed");
            flash_redirect("error", &delete_error_text(&err))
        }
    }
}

/// Turn the schedule form into a draft.
///
/// A blank send time falls back to the builder's default (five minutes
/// out); a blank retry limit falls back to the backend default.
fn build_draft(form: &ScheduleForm) -> Result<NotificationDraft, DashboardError> {
    let mut builder = NotificationDraft::builder().message(form.message.as_str());
    if !form.send_at.trim().is_empty() {
        builder = builder.send_at(time::parse_datetime_local(&form.send_at)?);
    }
    if let Some(limit) = parse_max_retries(&form.max_retries)? {
        builder = builder.max_retries(limit);
    }
    builder.build()
}

fn parse_max_retries(raw: &str) -> Result<Option<u32>, DashboardError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidMaxRetries(raw.to_string()).into())
}

/// Flash text for a failed schedule: the backend's own words where it had
/// any, the error's message otherwise.
fn create_error_text(err: &DashboardError) -> String {
    match err {
        DashboardError::Api { status, body } => {
            let body = body.trim();
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Flash text for a failed delete: a rejection gets the generic flash, a
/// request that never completed gets its message.
fn delete_error_text(err: &DashboardError) -> String {
    match err {
        DashboardError::Api { .. } => DELETE_FAILED_TEXT.to_string(),
        other => other.to_string(),
    }
}

fn flash_redirect(key: &str, text: &str) -> Redirect {
    Redirect::to(&format!("/?{key}={}", encode_query_value(text)))
}

/// Minimal percent-encoding for a query-string value.
///
/// `#` matters here: flash text echoes arbitrary backend bodies, and an
/// unescaped hash would end the query string and swallow the rest.
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('#', "%23")
        .replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notidash_domain::metrics::Metrics;
    use notidash_domain::status::NotificationStatus;
    use notidash_domain::time::Timestamp;

    fn ts(secs: i64) -> Timestamp {
        use chrono::TimeZone;
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn sample(id: &str, status: NotificationStatus) -> Notification {
        Notification {
            id: NotificationId::new(id),
            message: format!("message for {id}"),
            send_at: ts(2_000_000_000),
            status,
            created_at: ts(1_900_000_000),
            updated_at: ts(1_900_000_000),
            attempts: 1,
            max_retries: 3,
            next_retry: None,
        }
    }

    fn snapshot_with(notifications: Vec<Notification>) -> DashboardSnapshot {
        DashboardSnapshot {
            notifications: Ok(notifications),
            metrics: Metrics {
                total: 4,
                pending: 2,
                sent: 1,
                failed: 1,
                cancelled: 0,
                retrying: 0,
            },
            refreshed_at: Some(ts(1_900_000_100)),
        }
    }

    #[test]
    fn should_render_placeholder_when_list_is_empty() {
        let html = DashboardTemplate::new(snapshot_with(vec![]), FlashParams::default())
            .to_string();
        assert!(html.contains("No notifications yet."));
        assert!(!html.contains("/delete"));
    }

    #[test]
    fn should_render_rows_in_snapshot_order() {
        let html = DashboardTemplate::new(
            snapshot_with(vec![
                sample("notif-2", NotificationStatus::Pending),
                sample("notif-1", NotificationStatus::Sent),
            ]),
            FlashParams::default(),
        )
        .to_string();
        let first = html.find("message for notif-2").unwrap();
        let second = html.find("message for notif-1").unwrap();
        assert!(first < second);
    }

    #[test]
    fn should_render_badge_for_each_known_status() {
        let html = DashboardTemplate::new(
            snapshot_with(vec![
                sample("notif-1", NotificationStatus::Pending),
                sample("notif-2", NotificationStatus::Sent),
                sample("notif-3", NotificationStatus::Failed),
                sample("notif-4", NotificationStatus::Cancelled),
                sample("notif-5", NotificationStatus::Retrying),
            ]),
            FlashParams::default(),
        )
        .to_string();
        for class in [
            "badge status-pending",
            "badge status-sent",
            "badge status-failed",
            "badge status-cancelled",
            "badge status-retrying",
        ] {
            assert!(html.contains(class), "missing {class}");
        }
    }

    #[test]
    fn should_render_unknown_status_with_raw_label_and_pending_style() {
        let html = DashboardTemplate::new(
            snapshot_with(vec![sample(
                "notif-1",
                NotificationStatus::Unknown("paused".to_string()),
            )]),
            FlashParams::default(),
        )
        .to_string();
        assert!(html.contains("paused"));
        assert!(html.contains("badge status-pending"));
    }

    #[test]
    fn should_render_error_state_when_list_failed() {
        let snapshot = DashboardSnapshot {
            notifications: Err("connection refused".to_string()),
            metrics: Metrics::default(),
            refreshed_at: Some(ts(1_900_000_100)),
        };
        let html = DashboardTemplate::new(snapshot, FlashParams::default()).to_string();
        assert!(html.contains("Error loading notifications"));
        assert!(!html.contains("No notifications yet."));
    }

    #[test]
    fn should_render_metric_cards_from_snapshot() {
        let html =
            DashboardTemplate::new(snapshot_with(vec![]), FlashParams::default()).to_string();
        assert!(html.contains("Total"));
        assert!(html.contains("Retrying"));
        assert!(html.contains(">4<"));
    }

    #[test]
    fn should_render_flash_banners() {
        let html = DashboardTemplate::new(
            snapshot_with(vec![]),
            FlashParams {
                notice: SCHEDULED_TEXT.to_string(),
                error: "Message is required".to_string(),
            },
        )
        .to_string();
        assert!(html.contains(SCHEDULED_TEXT));
        assert!(html.contains("Message is required"));
    }

    #[test]
    fn should_escape_user_text_in_rows() {
        let mut notification = sample("notif-1", NotificationStatus::Pending);
        notification.message = "<script>alert(1)</script>".to_string();
        let html =
            DashboardTemplate::new(snapshot_with(vec![notification]), FlashParams::default())
                .to_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn should_show_next_retry_only_when_present() {
        let mut with_retry = sample("notif-1", NotificationStatus::Retrying);
        with_retry.next_retry = Some(ts(2_000_000_000));
        let html = DashboardTemplate::new(
            snapshot_with(vec![with_retry, sample("notif-2", NotificationStatus::Pending)]),
            FlashParams::default(),
        )
        .to_string();
        assert_eq!(html.matches("Next retry").count(), 1);
    }

    #[test]
    fn should_prefill_send_time_with_parseable_local_value() {
        let template = DashboardTemplate::new(snapshot_with(vec![]), FlashParams::default());
        assert!(time::parse_datetime_local(&template.default_send_at).is_ok());
    }

    #[test]
    fn should_build_draft_with_defaults_for_blank_fields() {
        let form = ScheduleForm {
            message: "Reminder".to_string(),
            send_at: String::new(),
            max_retries: String::new(),
        };
        let draft = build_draft(&form).unwrap();
        assert_eq!(draft.message, "Reminder");
        assert_eq!(draft.max_retries, 3);
    }

    #[test]
    fn should_reject_unparseable_send_time() {
        let form = ScheduleForm {
            message: "Reminder".to_string(),
            send_at: "not-a-date".to_string(),
            max_retries: String::new(),
        };
        assert!(matches!(
            build_draft(&form),
            Err(DashboardError::Validation(ValidationError::InvalidSendAt(_)))
        ));
    }

    #[test]
    fn should_reject_non_numeric_retry_limit() {
        assert!(matches!(
            parse_max_retries("many"),
            Err(DashboardError::Validation(
                ValidationError::InvalidMaxRetries(_)
            ))
        ));
        assert_eq!(parse_max_retries("  ").unwrap(), None);
        assert_eq!(parse_max_retries("5").unwrap(), Some(5));
    }

    #[test]
    fn should_use_backend_body_as_create_flash() {
        let err = DashboardError::Api {
            status: 400,
            body: "Message is required\n".to_string(),
        };
        assert_eq!(create_error_text(&err), "Message is required");

        let empty = DashboardError::Api {
            status: 502,
            body: String::new(),
        };
        assert_eq!(create_error_text(&empty), "HTTP 502");

        let transport = DashboardError::Transport("connection refused".to_string());
        assert_eq!(create_error_text(&transport), "connection refused");
    }

    #[test]
    fn should_use_generic_flash_for_rejected_delete() {
        let rejected = DashboardError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(delete_error_text(&rejected), DELETE_FAILED_TEXT);

        let transport = DashboardError::Transport("connection refused".to_string());
        assert_eq!(delete_error_text(&transport), "connection refused");
    }

    #[test]
    fn should_percent_encode_flash_values() {
        assert_eq!(
            encode_query_value("50% off & more = win + tax"),
            "50%25%20off%20%26%20more%20%3D%20win%20%2B%20tax"
        );
    }

    #[test]
    fn should_encode_hash_so_flash_text_survives_intact() {
        assert_eq!(
            encode_query_value("queue #3 rejected the request"),
            "queue%20%233%20rejected%20the%20request"
        );
    }
}
