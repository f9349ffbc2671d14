//! Storage port — repository trait for persisting people.

use std::future::Future;
use std::sync::Arc;

use roster_domain::error::RosterError;
use roster_domain::id::PersonId;
use roster_domain::person::Person;

/// Repository for persisting and querying [`Person`]s.
///
/// Absence is reported through `Option`/`bool` rather than errors; turning
/// it into [`RosterError::NotFound`] is the service's decision.
pub trait PersonRepository {
    /// Store a new person and return it with its freshly assigned id.
    ///
    /// Any id already present on `person` is ignored.
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, RosterError>> + Send;

    /// Get a person by its unique identifier.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send;

    /// Get all people, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send;

    /// Find the person whose name is exactly `name`.
    ///
    /// When several people share the name, the one with the lowest id wins.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send;

    /// Write `person`'s name, birth and status into the row `id`.
    ///
    /// Returns the stored record, or `None` when no row has that id.
    fn update(
        &self,
        id: PersonId,
        person: Person,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send;

    /// Delete the row `id`, returning whether a row was removed.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, RosterError>> + Send;

    /// Count stored people.
    fn count(&self) -> impl Future<Output = Result<u64, RosterError>> + Send;
}

impl<T: PersonRepository + Send + Sync> PersonRepository for Arc<T> {
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, RosterError>> + Send {
        (**self).create(person)
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send {
        (**self).get_all()
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        (**self).find_by_name(name)
    }

    fn update(
        &self,
        id: PersonId,
        person: Person,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        (**self).update(id, person)
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, RosterError>> + Send {
        (**self).delete(id)
    }

    fn count(&self) -> impl Future<Output = Result<u64, RosterError>> + Send {
        (**self).count()
    }
}
