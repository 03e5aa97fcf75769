//! Directory schema history.
//!
//! Each step names the tables it introduces; after migrating, every table of
//! the known history must be present, otherwise the database is rejected
//! before any repository reads from it.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    sql: &'static str,
    tables: &'static [&'static str],
}

const SCHEMA_STEPS: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        sql: include_str!("0001_persons.sql"),
        tables: &["persons"],
    },
    SchemaStep {
        version: 2,
        sql: include_str!("0002_projects.sql"),
        tables: &["projects"],
    },
];

/// Returns the latest schema version this build understands.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Tables the directory schema consists of, in creation order.
pub fn directory_tables() -> impl Iterator<Item = &'static str> {
    SCHEMA_STEPS.iter().flat_map(|step| step.tables.iter().copied())
}

/// Brings the schema up to [`latest_version`] and verifies the result.
///
/// Pending steps run in one transaction. A database stamped with a version
/// this build knows but missing one of its tables fails with
/// [`DbError::MissingTable`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if !pending.is_empty() {
        let tx = conn.transaction()?;
        for step in &pending {
            tx.execute_batch(step.sql)?;
            tx.pragma_update(None, "user_version", step.version)?;
            info!(
                "event=db_migrate module=db status=ok version={} tables={}",
                step.version,
                step.tables.join(",")
            );
        }
        tx.commit()?;
    }

    verify_schema(conn)
}

/// Whether `table` exists in the main schema of `conn`.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}

fn verify_schema(conn: &Connection) -> DbResult<()> {
    for step in SCHEMA_STEPS {
        for table in step.tables {
            if !table_exists(conn, table)? {
                return Err(DbError::MissingTable {
                    table: *table,
                    version: step.version,
                });
            }
        }
    }
    Ok(())
}
