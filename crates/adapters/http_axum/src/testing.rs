//! In-memory repository shared by the handler tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use roster_app::ports::PersonRepository;
use roster_domain::error::RosterError;
use roster_domain::id::PersonId;
use roster_domain::person::Person;

#[derive(Default)]
pub(crate) struct InMemoryPersonRepo {
    store: Mutex<BTreeMap<PersonId, Person>>,
    next_id: Mutex<i64>,
    pub(crate) writes: AtomicUsize,
    pub(crate) broken: AtomicBool,
}

impl InMemoryPersonRepo {
    /// The first created person gets id `next_id + 1`.
    pub(crate) fn starting_at(next_id: i64) -> Self {
        Self {
            next_id: Mutex::new(next_id),
            ..Self::default()
        }
    }

    pub(crate) fn with(self, person: Person) -> Self {
        let id = person.id.expect("seeded person needs an id");
        self.store.lock().unwrap().insert(id, person);
        self
    }

    fn check(&self) -> Result<(), RosterError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(RosterError::Storage("database unavailable".into()));
        }
        Ok(())
    }
}

impl PersonRepository for InMemoryPersonRepo {
    fn create(
        &self,
        mut person: Person,
    ) -> impl Future<Output = Result<Person, RosterError>> + Send {
        let result = self.check().map(|()| {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = PersonId::from_raw(*next_id);
            person.id = Some(id);
            self.store.lock().unwrap().insert(id, person.clone());
            self.writes.fetch_add(1, Ordering::SeqCst);
            person
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        let result = self
            .check()
            .map(|()| self.store.lock().unwrap().get(&id).cloned());
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send {
        let result = self
            .check()
            .map(|()| self.store.lock().unwrap().values().cloned().collect());
        async { result }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        let result = self.check().map(|()| {
            self.store
                .lock()
                .unwrap()
                .values()
                .find(|p| p.name == name)
                .cloned()
        });
        async { result }
    }

    fn update(
        &self,
        id: PersonId,
        person: Person,
    ) -> impl Future<Output = Result<Option<Person>, RosterError>> + Send {
        let result = self.check().map(|()| {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.store.lock().unwrap().get_mut(&id).map(|stored| {
                stored.overwrite_with(person);
                stored.clone()
            })
        });
        async { result }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, RosterError>> + Send {
        let result = self.check().map(|()| {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.store.lock().unwrap().remove(&id).is_some()
        });
        async { result }
    }

    fn count(&self) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let result = self
            .check()
            .map(|()| self.store.lock().unwrap().len() as u64);
        async { result }
    }
}
