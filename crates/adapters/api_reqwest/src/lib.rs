//! # notidash-adapter-api-reqwest
//!
//! Backend API adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `NotificationApi` port against the scheduler's REST
//!   contract (`POST /notify`, `GET /notify`, `DELETE /notify/{id}`,
//!   `GET /metrics`)
//! - Map wire failures into domain errors: non-2xx responses keep their
//!   raw body text for display, transport and decode failures keep the
//!   underlying error's message
//!
//! ## Dependency rule
//! Depends on `notidash-app` (for the port trait) and `notidash-domain`
//! (for the types crossing the boundary). Never leaks `reqwest` types into
//! the application layer.

pub mod client;

pub use client::HttpNotificationApi;
