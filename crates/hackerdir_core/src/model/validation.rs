//! Field-level validation shared by person and project payloads.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Person name is blank after trim.
    BlankName,
    /// Person has no interests left after normalization.
    NoInterests,
    /// An interest tag is blank after trim.
    BlankInterest,
    /// Project title is blank after trim.
    BlankTitle,
    /// Project creator display name is blank after trim.
    BlankCreator,
    /// Project description is blank after trim.
    BlankDescription,
    /// Project URL is blank after trim.
    BlankUrl,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::BlankName => "name must not be blank",
            Self::NoInterests => "at least one interest is required",
            Self::BlankInterest => "interests must not contain blank entries",
            Self::BlankTitle => "project title must not be blank",
            Self::BlankCreator => "project creator must not be blank",
            Self::BlankDescription => "project description must not be blank",
            Self::BlankUrl => "project url must not be blank",
        };
        f.write_str(message)
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}
