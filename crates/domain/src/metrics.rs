//! Aggregate notification counts, grouped by status.

use serde::{Deserialize, Serialize};

/// Counts returned by the backend's metrics endpoint.
///
/// Every field defaults to zero so a partial payload (or an empty object)
/// still deserializes — the backend omits keys it has no counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// All notifications ever scheduled.
    pub total: u64,
    pub pending: u64,
    pub sent: u64,
    pub failed: u64,
    pub cancelled: u64,
    pub retrying: u64,
}
