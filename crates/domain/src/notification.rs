//! Notification — a message the backend has been asked to deliver later.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, ValidationError};
use crate::id::NotificationId;
use crate::status::NotificationStatus;
use crate::time::{self, Timestamp};

/// Retry ceiling applied when the user leaves the field blank. The backend
/// treats zero the same way, so zero also resolves to this.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// A scheduled notification as the backend reports it.
///
/// Every field is server-authoritative; the dashboard only constructs these
/// when decoding API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub send_at: Timestamp,
    pub status: NotificationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub attempts: u32,
    pub max_retries: u32,
    /// Set while the backend is waiting to retry a failed delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_retry: Option<Timestamp>,
}

/// Order notifications newest-first by creation time, the way the dashboard
/// lists them.
pub fn sort_newest_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// What the user asks the backend to schedule.
///
/// Serializes to exactly the creation request the backend expects
/// (`message`, `send_at`, `max_retries`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationDraft {
    pub message: String,
    pub send_at: Timestamp,
    pub max_retries: u32,
}

impl NotificationDraft {
    /// Create a builder for constructing a [`NotificationDraft`].
    #[must_use]
    pub fn builder() -> NotificationDraftBuilder {
        NotificationDraftBuilder::default()
    }

    /// Check draft invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] when the message is empty —
    /// the backend rejects those with a 400, so the dashboard refuses to
    /// send them at all.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.message.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NotificationDraft`].
#[derive(Debug, Default)]
pub struct NotificationDraftBuilder {
    message: Option<String>,
    send_at: Option<Timestamp>,
    max_retries: Option<u32>,
}

impl NotificationDraftBuilder {
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn send_at(mut self, send_at: Timestamp) -> Self {
        self.send_at = Some(send_at);
        self
    }

    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Consume the builder, validate, and return a [`NotificationDraft`].
    ///
    /// An unset send time falls back to [`time::default_send_at`] (five
    /// minutes out, matching the form's prefill); an unset or zero retry
    /// limit falls back to [`DEFAULT_MAX_RETRIES`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] if `message` is missing or
    /// empty.
    pub fn build(self) -> Result<NotificationDraft, DashboardError> {
        let draft = NotificationDraft {
            message: self.message.unwrap_or_default(),
            send_at: self
                .send_at
                .unwrap_or_else(|| time::default_send_at(time::now())),
            max_retries: match self.max_retries {
                Some(limit) if limit > 0 => limit,
                _ => DEFAULT_MAX_RETRIES,
            },
        };
        draft.validate()?;
        Ok(draft)
    }
}
