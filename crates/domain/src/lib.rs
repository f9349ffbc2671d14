//! # roster-domain
//!
//! Pure domain model for the roster people registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Person** record and its categorical **status**
//! - Own the update rule (which fields a replacement may overwrite)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod person;
