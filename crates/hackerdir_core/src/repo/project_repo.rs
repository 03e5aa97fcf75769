//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert project attribution rows as one all-or-nothing batch.
//! - List projects, optionally filtered by person back-reference.
//!
//! # Invariants
//! - Every row of a batch is validated before the transaction opens.
//! - A batch either commits completely or leaves no rows behind.
//! - Rows of one batch share one `created_at`, strictly greater than any
//!   earlier row's.
//! - Listing order is newest batch first, input order within a batch.

use crate::model::person::PersonId;
use crate::model::project::{NewProject, Project, ProjectId};
use crate::repo::person_repo::{ensure_table_exists, parse_uuid, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    title,
    creator,
    description,
    url,
    hacker_id,
    created_at
FROM projects";

/// Current epoch milliseconds, bumped past the newest stored batch so that
/// batches written within the same millisecond still sort by write order.
const BATCH_STAMP_SQL: &str = "SELECT max(
    CAST(unixepoch('subsec') * 1000 AS INTEGER),
    COALESCE(max(created_at) + 1, 0)
)
FROM projects;";

/// Query options for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListQuery {
    /// Exact-match filter on `hacker_id`.
    pub hacker_id: Option<PersonId>,
    pub limit: Option<u32>,
}

impl ProjectListQuery {
    pub fn for_person(hacker_id: PersonId) -> Self {
        Self {
            hacker_id: Some(hacker_id),
            ..Self::default()
        }
    }
}

/// Store capability for project attribution rows.
pub trait ProjectRepository {
    /// Inserts all rows atomically and returns them in input order.
    fn create_projects(&self, projects: &[NewProject]) -> RepoResult<Vec<Project>>;
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>>;
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "projects")?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_projects(&self, projects: &[NewProject]) -> RepoResult<Vec<Project>> {
        for project in projects {
            project.validate()?;
        }

        // Repositories only borrow the connection; nested batches are not used.
        let tx = self.conn.unchecked_transaction()?;
        let batch_at: i64 = tx.query_row(BATCH_STAMP_SQL, [], |row| row.get(0))?;
        let mut ids = Vec::with_capacity(projects.len());
        for project in projects {
            let id = Uuid::new_v4();
            tx.execute(
                "INSERT INTO projects (id, title, creator, description, url, hacker_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    id.to_string(),
                    project.title.as_str(),
                    project.creator.as_str(),
                    project.description.as_str(),
                    project.url.as_str(),
                    project.hacker_id.map(|hacker_id| hacker_id.to_string()),
                    batch_at,
                ],
            )?;
            ids.push(id);
        }

        let mut created = Vec::with_capacity(ids.len());
        {
            let mut stmt = tx.prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;
            for id in &ids {
                let mut rows = stmt.query([id.to_string()])?;
                match rows.next()? {
                    Some(row) => created.push(parse_project_row(row)?),
                    None => return Err(RepoError::NotFound(*id)),
                }
            }
        }
        tx.commit()?;

        Ok(created)
    }

    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        let mut sql = format!("{PROJECT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(hacker_id) = query.hacker_id {
            sql.push_str(" AND hacker_id = ?");
            bind_values.push(Value::Text(hacker_id.to_string()));
        }

        sql.push_str(" ORDER BY created_at DESC, rowid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id_text: String = row.get("id")?;
    let hacker_id = match row.get::<_, Option<String>>("hacker_id")? {
        Some(value) => Some(parse_uuid(&value, "projects.hacker_id")?),
        None => None,
    };

    Ok(Project {
        id: parse_uuid(&id_text, "projects.id")?,
        title: row.get("title")?,
        creator: row.get("creator")?,
        description: row.get("description")?,
        url: row.get("url")?,
        hacker_id,
        created_at: row.get("created_at")?,
    })
}
