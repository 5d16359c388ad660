//! # notidash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered HTML dashboard** — pure HTML forms +
//!   `<meta http-equiv="refresh">` for live updates
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTML responses
//!
//! ## SSR dashboard approach
//! - The page is rendered server-side as complete HTML from the snapshot
//!   the poller maintains; a render never calls the backend.
//! - Schedule and delete are `<form>` elements that POST back to the
//!   server and redirect (PRG pattern), carrying the outcome as a flash
//!   query parameter.
//! - The page auto-reloads via `<meta http-equiv="refresh">` at the
//!   poller's cadence, so each reload shows the freshest snapshot.
//! - The only script is the inline `confirm()` guard on delete forms;
//!   without it the form still submits, so the page works with scripting
//!   disabled.
//!
//! ## Dependency rule
//! Depends on `notidash-app` (for the service and snapshot types) and
//! `notidash-domain` (for domain types used in rendering). Never leaks
//! axum types into the domain.

pub mod dashboard;
pub mod router;
pub mod state;
