//! # eduboard-domain
//!
//! Pure domain model for the eduboard administration dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (staff accounts with a role and an active/inactive status)
//! - Define **Students** (biographical records managed by the office)
//! - Define **form payloads** and their declarative validation schemas
//! - Define the **pagination envelope** returned by list endpoints
//! - Define the **dashboard tallies** (student counts by gender)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from `store`, the dashboard crate, or
//! network/browser crates. All IO boundaries are expressed as traits in the
//! `store` crate (ports).

pub mod error;
pub mod id;
pub mod validation;

pub mod dashboard;
pub mod page;
pub mod student;
pub mod user;
