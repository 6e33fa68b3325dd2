//! Application state layer of the eduboard project.
//!
//! Responsibilities:
//!
//! - define one state slice per domain area (auth, users, students,
//!   dashboard) as a plain value plus a pure reducer over typed actions;
//! - drive the slices through async thunks that call the REST backend
//!   behind gateway ports and dispatch a pending action followed by
//!   exactly one terminal action;
//! - normalize every backend failure into a single user-facing message;
//! - suppress stale responses with a monotonic request sequence, so the
//!   state always reflects the most recently issued request.
//!
//! Dependency rule: this crate depends only on `eduboard-domain`. It knows
//! nothing about the UI framework or the HTTP client; those live in the
//! dashboard crate and reach in through the [`gateway`] ports. The port
//! futures are not required to be `Send` because the dashboard awaits them
//! on the browser's event loop.

pub mod auth;
pub mod dashboard;
pub mod gateway;
pub mod sequence;
pub mod students;
pub mod users;
