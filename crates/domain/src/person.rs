//! Person — the single record kept by the registry.

mod status;

pub use status::PersonStatus;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::PersonId;

/// A person as stored in the registry.
///
/// `id` is `None` until the record has been persisted for the first time;
/// the persistence layer assigns it and it never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<PersonId>,
    pub name: String,
    #[serde(default)]
    pub birth: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<PersonStatus>,
}

impl Person {
    /// Create a builder for constructing a [`Person`].
    #[must_use]
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Overwrite the mutable fields with the ones from `replacement`.
    ///
    /// Only `name`, `birth` and `status` are copied; the identifier of `self`
    /// is kept whatever `replacement.id` says.
    pub fn overwrite_with(&mut self, replacement: Person) {
        self.name = replacement.name;
        self.birth = replacement.birth;
        self.status = replacement.status;
    }
}

/// Step-by-step builder for [`Person`].
#[derive(Debug, Default)]
pub struct PersonBuilder {
    id: Option<PersonId>,
    name: Option<String>,
    birth: Option<NaiveDate>,
    status: Option<PersonStatus>,
}

impl PersonBuilder {
    #[must_use]
    pub fn id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth(mut self, birth: NaiveDate) -> Self {
        self.birth = Some(birth);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PersonStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Consume the builder and return a [`Person`].
    ///
    /// No field is validated; a missing name becomes the empty string.
    #[must_use]
    pub fn build(self) -> Person {
        Person {
            id: self.id,
            name: self.name.unwrap_or_default(),
            birth: self.birth,
            status: self.status,
        }
    }
}
