//! Add-Person form.

use super::normalize::{normalize_optional_url, optional_text, parse_interests};
use super::FormError;
use crate::model::person::NewPerson;

/// Field state of the Add-Person form.
///
/// Fields hold raw user input; normalization happens only on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPersonForm {
    open: bool,
    pub name: String,
    pub url: String,
    /// Comma-separated interests, e.g. `AI, Blockchain, Cybersecurity`.
    pub interests: String,
    pub bio: String,
}

impl AddPersonForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the form without clearing what was typed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validates the fields and emits the normalized payload.
    ///
    /// On success the fields are cleared and the form closes. On failure
    /// the fields are kept so the user can correct them.
    pub fn submit(&mut self) -> Result<NewPerson, FormError> {
        if !self.open {
            return Err(FormError::Closed);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let interests = parse_interests(&self.interests);
        if interests.is_empty() {
            return Err(FormError::MissingInterests);
        }

        let person = NewPerson {
            name: name.to_string(),
            url: normalize_optional_url(&self.url),
            interests,
            bio: optional_text(&self.bio),
        };
        *self = Self::default();
        Ok(person)
    }
}
