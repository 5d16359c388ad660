//! Notification status — where a notification sits in its delivery lifecycle.

use serde::{Deserialize, Serialize};

/// Delivery-lifecycle status reported by the backend.
///
/// The set of known statuses is closed; anything else the server sends is
/// preserved in [`Unknown`](Self::Unknown) instead of being coerced, so the
/// raw text still reaches the screen when the backend grows a new status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationStatus {
    #[default]
    Pending,
    Sent,
    Failed,
    Cancelled,
    Retrying,
    /// Status string this client does not recognize, kept verbatim.
    Unknown(String),
}

impl NotificationStatus {
    /// Parse a wire value. Known labels match exactly (the backend sends
    /// lowercase); anything else lands in [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "sent" => Self::Sent,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            "retrying" => Self::Retrying,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The raw wire form of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Retrying => "retrying",
            Self::Unknown(raw) => raw,
        }
    }

    /// Badge label shown in the notification list.
    ///
    /// Unknown statuses keep their raw text rather than pretending to be a
    /// known one.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Sent => "Sent",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Retrying => "Retrying",
            Self::Unknown(raw) => raw,
        }
    }

    /// CSS class styling the badge. Unknown statuses fall back to the
    /// pending (neutral) style.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending | Self::Unknown(_) => "status-pending",
            Self::Sent => "status-sent",
            Self::Failed => "status-failed",
            Self::Cancelled => "status-cancelled",
            Self::Retrying => "status-retrying",
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NotificationStatus {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<NotificationStatus> for String {
    fn from(status: NotificationStatus) -> Self {
        match status {
            NotificationStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
