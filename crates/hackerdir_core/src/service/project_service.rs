//! Project submission use-cases.
//!
//! # Invariants
//! - One submission is inserted as one atomic batch of attribution rows.
//! - Partial persistence is never reported as success.

use crate::model::person::PersonId;
use crate::model::project::{NewProject, Project};
use crate::repo::project_repo::{ProjectListQuery, ProjectRepository};
use crate::service::error::ServiceError;
use log::{error, info};

/// Use-case service for project attribution rows.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists every creator row of one submission, all or nothing.
    pub fn add_projects(&self, rows: &[NewProject]) -> Result<Vec<Project>, ServiceError> {
        if rows.is_empty() {
            return Err(ServiceError::EmptyBatch);
        }
        for row in rows {
            row.validate()?;
        }

        match self.repo.create_projects(rows) {
            Ok(created) => {
                info!(
                    "event=project_batch_insert module=service status=ok rows={}",
                    created.len()
                );
                Ok(created)
            }
            Err(err) => {
                error!(
                    "event=project_batch_insert module=service status=error rows={} error={err}",
                    rows.len()
                );
                Err(err.into())
            }
        }
    }

    /// Lists all projects, newest first.
    pub fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.repo.list_projects(&ProjectListQuery::default())?)
    }

    /// Lists projects attributed to one directory entry.
    pub fn list_projects_for(&self, hacker_id: PersonId) -> Result<Vec<Project>, ServiceError> {
        Ok(self
            .repo
            .list_projects(&ProjectListQuery::for_person(hacker_id))?)
    }
}
