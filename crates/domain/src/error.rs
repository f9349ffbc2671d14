//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RosterError`]
//! via `From`, so the HTTP adapter only has to map one enum.

/// Top-level error returned by application services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed. The source is adapter specific.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Person"`).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
