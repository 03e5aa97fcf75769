//! Directory entry use-cases.
//!
//! # Invariants
//! - Entries are validated here before the repository is called.
//! - The service never caches; every call is one store round trip.

use crate::model::person::{NewPerson, Person, PersonId};
use crate::repo::person_repo::PersonRepository;
use crate::service::error::ServiceError;
use log::{error, info};

/// Use-case service for directory entries.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one directory entry and returns the stored row.
    pub fn add_person(&self, person: &NewPerson) -> Result<Person, ServiceError> {
        person.validate()?;
        match self.repo.create_person(person) {
            Ok(created) => {
                info!(
                    "event=person_create module=service status=ok person_id={} interests={}",
                    created.id,
                    created.interests.len()
                );
                Ok(created)
            }
            Err(err) => {
                error!("event=person_create module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Gets one entry; absence is reported as `PersonNotFound`.
    pub fn get_person(&self, id: PersonId) -> Result<Person, ServiceError> {
        self.repo
            .get_person(id)?
            .ok_or(ServiceError::PersonNotFound(id))
    }

    /// Lists all entries ordered by name.
    pub fn list_persons(&self) -> Result<Vec<Person>, ServiceError> {
        Ok(self.repo.list_persons()?)
    }
}
