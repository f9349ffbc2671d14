//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::ports::PersonRepository;
use roster_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<PR> {
    /// Person CRUD service.
    pub person_service: Arc<PersonService<PR>>,
}

impl<PR> Clone for AppState<PR> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
        }
    }
}

impl<PR> AppState<PR>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(person_service: PersonService<PR>) -> Self {
        Self {
            person_service: Arc::new(person_service),
        }
    }
}
