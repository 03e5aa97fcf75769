//! Project attribution rows.
//!
//! A project with several creators is stored as one row per creator; all
//! rows of one submission share title, description and URL.

use super::person::{format_epoch_date, PersonId};
use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = Uuid;

/// Persisted project attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Display name of the creator for this row.
    pub creator: String,
    pub description: String,
    pub url: String,
    /// Back-reference to the directory entry, when the creator is listed.
    pub hacker_id: Option<PersonId>,
    /// Unix epoch milliseconds assigned on insert.
    pub created_at: i64,
}

impl Project {
    pub fn created_date(&self) -> String {
        format_epoch_date(self.created_at)
    }
}

/// Insert payload for one project attribution row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub creator: String,
    pub description: String,
    pub url: String,
    pub hacker_id: Option<PersonId>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.title, ValidationError::BlankTitle)?;
        require_text(&self.creator, ValidationError::BlankCreator)?;
        require_text(&self.description, ValidationError::BlankDescription)?;
        require_text(&self.url, ValidationError::BlankUrl)?;
        Ok(())
    }
}
