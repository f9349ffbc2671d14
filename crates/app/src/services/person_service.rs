//! Person service — use-cases behind the `/people` resource.

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::PersonId;
use roster_domain::person::Person;

use crate::ports::PersonRepository;

fn not_found(id: PersonId) -> NotFoundError {
    NotFoundError {
        entity: "Person",
        id: id.to_string(),
    }
}

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every stored person.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_people(&self) -> Result<Vec<Person>, RosterError> {
        let people = self.repo.get_all().await?;
        tracing::debug!(count = people.len(), "people listed");
        Ok(people)
    }

    /// Look up a person by id. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_person(&self, id: PersonId) -> Result<Option<Person>, RosterError> {
        let found = self.repo.get_by_id(id).await?;
        if found.is_none() {
            tracing::debug!("person not found");
        }
        Ok(found)
    }

    /// Persist a new person; storage assigns the id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, person), fields(person_name = %person.name))]
    pub async fn create_person(&self, mut person: Person) -> Result<Person, RosterError> {
        person.id = None;
        let created = self.repo.create(person).await?;
        if let Some(id) = created.id {
            tracing::info!(person_id = %id, "person created");
        }
        Ok(created)
    }

    /// Replace the name, birth and status of an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no person with `id` exists
    /// (nothing is written), or a storage error from the repository.
    #[tracing::instrument(skip(self, person))]
    pub async fn update_person(&self, id: PersonId, person: Person) -> Result<Person, RosterError> {
        let mut entity = self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        entity.overwrite_with(person);
        let updated = self
            .repo
            .update(id, entity)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("person updated");
        Ok(updated)
    }

    /// Delete an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no person with `id` exists
    /// (nothing is written), or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), RosterError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if !self.repo.delete(id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!("person deleted");
        Ok(())
    }

    /// Find the person named exactly `name`. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_name(&self, name: &str) -> Result<Option<Person>, RosterError> {
        let found = self.repo.find_by_name(name).await?;
        tracing::debug!(found = found.is_some(), "person searched");
        Ok(found)
    }

    /// Count stored people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn count_people(&self) -> Result<u64, RosterError> {
        let count = self.repo.count().await?;
        tracing::debug!(count, "people counted");
        Ok(count)
    }
}
