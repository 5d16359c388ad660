//! # notidash-domain
//!
//! Pure domain model for the notidash notification dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Notifications** (scheduled messages owned by the backend) and
//!   the draft the user submits to schedule one
//! - Define **`NotificationStatus`** (the delivery lifecycle: pending, sent,
//!   failed, cancelled, retrying — plus a raw-preserving fallback)
//! - Define **Metrics** (aggregate counts grouped by status)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod metrics;
pub mod notification;
pub mod status;
