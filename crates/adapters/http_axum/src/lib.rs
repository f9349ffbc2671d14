//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **`/people` JSON resource** (list, get, create, update,
//!   delete, search by name, count)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: absent reads become
//!   `204 No Content`, absent writes become `404 Not Found`
//! - Trace every request through `tower-http`
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
