//! # notidash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the backend adapter must implement
//!   (driven/outbound port):
//!   - `NotificationApi` — create, list, delete notifications; fetch metrics
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardService` — schedule, delete, refresh, read the snapshot
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `SnapshotStore` — last-applied render state with a generation guard
//!   - `Poller` — the cancellable fixed-interval refresh task
//! - Orchestrate domain objects without knowing *how* the wire works
//!
//! ## Dependency rule
//! Depends on `notidash-domain` only (plus `tokio::sync`/`tokio::time` for
//! the poller). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod ports;
pub mod services;
pub mod snapshot;
