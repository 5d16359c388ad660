//! Last-applied render state, guarded against stale refreshes.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use notidash_domain::metrics::Metrics;
use notidash_domain::notification::Notification;
use notidash_domain::time::Timestamp;

/// Monotonic ticket ordering refresh applications.
pub type Generation = u64;

/// What the dashboard currently shows.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Outcome of the last applied list fetch: notifications newest-first,
    /// or the error message that replaced the list.
    pub notifications: Result<Vec<Notification>, String>,
    /// Last successfully fetched counts. Metrics failures keep the previous
    /// value instead of blanking the cards.
    pub metrics: Metrics,
    /// When the last outcome (of either kind) was applied.
    pub refreshed_at: Option<Timestamp>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            notifications: Ok(Vec::new()),
            metrics: Metrics::default(),
            refreshed_at: None,
        }
    }
}

/// Shared store for the dashboard snapshot.
///
/// Every refresh cycle takes a ticket from [`begin`](Self::begin) *before*
/// issuing its fetches; the `apply_*` methods then store an outcome only
/// when its ticket is newer than the last one applied for that field. This
/// lets overlapping cycles complete in any order without an older response
/// overwriting a newer one. The list and metrics track separate applied
/// generations because they are independent fetches.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    ticket: AtomicU64,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    list_generation: Generation,
    metrics_generation: Generation,
    snapshot: DashboardSnapshot,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next refresh ticket. Tickets start at 1, so generation 0
    /// always reads as "nothing applied yet".
    pub fn begin(&self) -> Generation {
        self.ticket.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Apply a list outcome stamped with `generation`.
    ///
    /// Returns `false` (and changes nothing) when an outcome with a newer
    /// ticket has already been applied.
    pub fn apply_list(
        &self,
        generation: Generation,
        outcome: Result<Vec<Notification>, String>,
        at: Timestamp,
    ) -> bool {
        let mut state = self.state.write().expect("snapshot lock poisoned");
        if generation <= state.list_generation {
            return false;
        }
        state.list_generation = generation;
        state.snapshot.notifications = outcome;
        state.snapshot.refreshed_at = Some(at);
        true
    }

    /// Apply fresh metrics stamped with `generation`. Same staleness rule
    /// as [`apply_list`](Self::apply_list).
    pub fn apply_metrics(&self, generation: Generation, metrics: Metrics, at: Timestamp) -> bool {
        let mut state = self.state.write().expect("snapshot lock poisoned");
        if generation <= state.metrics_generation {
            return false;
        }
        state.metrics_generation = generation;
        state.snapshot.metrics = metrics;
        state.snapshot.refreshed_at = Some(at);
        true
    }

    /// Clone out the current snapshot.
    #[must_use]
    pub fn read(&self) -> DashboardSnapshot {
        self.state
            .read()
            .expect("snapshot lock poisoned")
            .snapshot
            .clone()
    }
}
