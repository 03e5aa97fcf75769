//! Form state machines for adding directory entries and projects.
//!
//! # Responsibility
//! - Hold local field state between edits.
//! - Validate required fields and normalize input before emitting payloads.
//!
//! # Invariants
//! - A rejected submission emits nothing and leaves field state untouched.
//! - An accepted submission clears the form and closes it.

use crate::model::person::PersonId;
use crate::notify::Toast;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod creator;
pub mod normalize;
pub mod person_form;
pub mod project_form;

/// Local validation failure of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit was attempted on a closed form.
    Closed,
    MissingName,
    MissingInterests,
    MissingTitle,
    MissingDescription,
    MissingUrl,
    /// Creator at `index` is in free-text mode with a blank name.
    BlankCreator { index: usize },
    /// Creator at `index` is in existing-person mode with nothing selected.
    UnselectedCreator { index: usize },
    /// Creator at `index` points at a person absent from the fetched list.
    UnknownPerson { index: usize, person_id: PersonId },
    /// The creator list must keep at least one entry.
    LastCreator,
    CreatorOutOfRange { index: usize, len: usize },
}

impl FormError {
    /// Destructive toast describing the failure to the user.
    pub fn to_toast(&self) -> Toast {
        match self {
            Self::MissingName => Toast::error("Missing information", "Please provide a name"),
            Self::MissingInterests => {
                Toast::error("Missing interests", "Please provide at least one interest")
            }
            Self::MissingTitle | Self::MissingDescription | Self::MissingUrl => {
                Toast::error("Missing information", "Please fill out all fields")
            }
            Self::BlankCreator { .. }
            | Self::UnselectedCreator { .. }
            | Self::UnknownPerson { .. } => Toast::error(
                "Missing creator",
                "Please select a hacker or enter a name for every creator",
            ),
            Self::LastCreator => Toast::error(
                "Cannot remove creator",
                "A project needs at least one creator",
            ),
            Self::Closed | Self::CreatorOutOfRange { .. } => {
                Toast::error("Error", self.to_string())
            }
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "form is not open"),
            Self::MissingName => write!(f, "name is required"),
            Self::MissingInterests => write!(f, "at least one interest is required"),
            Self::MissingTitle => write!(f, "project title is required"),
            Self::MissingDescription => write!(f, "project description is required"),
            Self::MissingUrl => write!(f, "project url is required"),
            Self::BlankCreator { index } => write!(f, "creator #{} has no name", index + 1),
            Self::UnselectedCreator { index } => {
                write!(f, "creator #{} has no hacker selected", index + 1)
            }
            Self::UnknownPerson { index, person_id } => write!(
                f,
                "creator #{} references unknown hacker {person_id}",
                index + 1
            ),
            Self::LastCreator => write!(f, "cannot remove the last creator"),
            Self::CreatorOutOfRange { index, len } => {
                write!(f, "creator index {index} out of range for {len} entries")
            }
        }
    }
}

impl Error for FormError {}
