//! # roster-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — create, find, search, update, delete, count people
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService` — the operations exposed over HTTP
//! - Decide absence semantics: reads report `None`, writes report `NotFound`
//!
//! ## Dependency rule
//! Depends on `roster-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
