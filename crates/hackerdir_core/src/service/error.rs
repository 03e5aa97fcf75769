use crate::model::person::PersonId;
use crate::model::validation::ValidationError;
use crate::repo::person_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by directory use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Payload failed validation; nothing was sent to the store.
    Validation(ValidationError),
    /// A project submission carried no creator rows.
    EmptyBatch,
    /// Requested directory entry does not exist.
    PersonNotFound(PersonId),
    /// Store failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmptyBatch => write!(f, "project submission has no creators"),
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}
