//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide select/insert/delete access to the `persons` table.
//! - Own ID assignment for new directory entries.
//!
//! # Invariants
//! - Write paths call `NewPerson::validate()` before SQL mutations.
//! - Read paths reject malformed rows instead of masking them.
//! - Listing order is `name COLLATE NOCASE ASC, id ASC`.

use crate::db::{table_exists, DbError};
use crate::model::person::{NewPerson, Person, PersonId};
use crate::model::validation::ValidationError;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    name,
    url,
    interests,
    bio,
    updated_at
FROM persons";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error shared by the person and project repositories.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound(Uuid),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store capability for directory entries.
pub trait PersonRepository {
    /// Inserts one entry and returns the stored row with its assigned ID.
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn list_persons(&self) -> RepoResult<Vec<Person>>;
    /// Hard-deletes one entry. Projects referencing it are left untouched.
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a migrated connection, refusing one without the `persons` table.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "persons")?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person> {
        person.validate()?;

        let id = Uuid::new_v4();
        let interests = encode_interests(&person.interests)?;
        self.conn.execute(
            "INSERT INTO persons (id, name, url, interests, bio)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.to_string(),
                person.name.as_str(),
                person.url.as_deref(),
                interests,
                person.bio.as_deref(),
            ],
        )?;

        self.get_person(id)?.ok_or(RepoError::NotFound(id))
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }
        Ok(None)
    }

    fn list_persons(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL} ORDER BY name COLLATE NOCASE ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }
        Ok(persons)
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM persons WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let id_text: String = row.get("id")?;
    let interests_text: String = row.get("interests")?;
    let interests: Vec<String> = serde_json::from_str(&interests_text).map_err(|err| {
        RepoError::InvalidData(format!(
            "invalid interests `{interests_text}` in persons.interests: {err}"
        ))
    })?;

    Ok(Person {
        id: parse_uuid(&id_text, "persons.id")?,
        name: row.get("name")?,
        url: row.get("url")?,
        interests,
        bio: row.get("bio")?,
        updated_at: row.get("updated_at")?,
    })
}

fn encode_interests(interests: &[String]) -> RepoResult<String> {
    serde_json::to_string(interests)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode interests: {err}")))
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn ensure_table_exists(conn: &Connection, table: &'static str) -> RepoResult<()> {
    if table_exists(conn, table)? {
        Ok(())
    } else {
        Err(RepoError::MissingRequiredTable(table))
    }
}
