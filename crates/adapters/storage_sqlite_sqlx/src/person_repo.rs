//! `SQLite` implementation of [`PersonRepository`].

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::PersonRepository;
use roster_domain::error::RosterError;
use roster_domain::id::PersonId;
use roster_domain::person::{Person, PersonStatus};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let birth: Option<NaiveDate> = row.try_get("birth")?;
        let status: Option<String> = row.try_get("status")?;

        Ok(Self(Person {
            id: Some(PersonId::from_raw(id)),
            name,
            birth,
            status: status.map(PersonStatus::from),
        }))
    }
}

const INSERT: &str = "INSERT INTO people (name, birth, status) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, birth, status FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, birth, status FROM people ORDER BY id";
const SELECT_BY_NAME: &str =
    "SELECT id, name, birth, status FROM people WHERE name = ? ORDER BY id LIMIT 1";
const UPDATE: &str = "UPDATE people SET name = ?, birth = ?, status = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM people";

/// `SQLite`-backed person repository.
///
/// Writes run inside their own transaction, so a failed statement leaves
/// nothing behind.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    async fn create(&self, person: Person) -> Result<Person, RosterError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(INSERT)
            .bind(&person.name)
            .bind(person.birth)
            .bind(person.status.as_ref().map(PersonStatus::as_str))
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(Person {
            id: Some(PersonId::from_raw(result.last_insert_rowid())),
            ..person
        })
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, RosterError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_raw())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Person>, RosterError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, RosterError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn update(&self, id: PersonId, person: Person) -> Result<Option<Person>, RosterError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(UPDATE)
            .bind(&person.name)
            .bind(person.birth)
            .bind(person.status.as_ref().map(PersonStatus::as_str))
            .bind(id.as_raw())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Person {
            id: Some(id),
            ..person
        }))
    }

    async fn delete(&self, id: PersonId) -> Result<bool, RosterError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_raw())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, RosterError> {
        let (count,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let count = u64::try_from(count)
            .map_err(|err| StorageError::from(sqlx::Error::Decode(Box::new(err))))?;
        Ok(count)
    }
}
