//! # roster-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `roster-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod person_repo;
mod pool;

pub use error::StorageError;
pub use person_repo::SqlitePersonRepository;
pub use pool::{Config, Database};
