//! Person ("hacker") directory entry.
//!
//! # Invariants
//! - `name` is never blank.
//! - `interests` keeps the order the user typed and holds no blank tags.
//! - `updated_at` is owned by the store (epoch milliseconds).

use super::validation::{require_text, ValidationError};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a directory entry.
pub type PersonId = Uuid;

/// Persisted directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Homepage; absent when the person did not provide one.
    pub url: Option<String>,
    pub interests: Vec<String>,
    pub bio: Option<String>,
    /// Unix epoch milliseconds of the last store write.
    pub updated_at: i64,
}

impl Person {
    /// First character of the display name, used as the profile avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next()
    }

    /// `updated_at` rendered as a UTC calendar date (`YYYY-MM-DD`).
    pub fn last_updated_date(&self) -> String {
        format_epoch_date(self.updated_at)
    }
}

/// Insert payload emitted by the Add-Person form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub url: Option<String>,
    pub interests: Vec<String>,
    pub bio: Option<String>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, interests: Vec<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            interests,
            bio: None,
        }
    }

    /// Checks store-level invariants for a new directory entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, ValidationError::BlankName)?;
        if self.interests.is_empty() {
            return Err(ValidationError::NoInterests);
        }
        for interest in &self.interests {
            require_text(interest, ValidationError::BlankInterest)?;
        }
        Ok(())
    }
}

pub(crate) fn format_epoch_date(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::{format_epoch_date, NewPerson, Person, ValidationError};
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn validate_rejects_blank_name() {
        let person = NewPerson::new("   ", vec!["AI".to_string()]);
        assert_eq!(person.validate(), Err(ValidationError::BlankName));
    }

    #[test]
    fn validate_rejects_missing_or_blank_interests() {
        let none = NewPerson::new("Alex", Vec::new());
        assert_eq!(none.validate(), Err(ValidationError::NoInterests));

        let blank = NewPerson::new("Alex", vec!["AI".to_string(), " ".to_string()]);
        assert_eq!(blank.validate(), Err(ValidationError::BlankInterest));
    }

    #[test]
    fn initial_and_date_are_derived_for_display() {
        let person = Person {
            id: Uuid::new_v4(),
            name: " riley".to_string(),
            url: None,
            interests: vec!["Compilers".to_string()],
            bio: None,
            updated_at: 1_684_108_800_000,
        };
        assert_eq!(person.initial(), Some('r'));
        assert_eq!(person.last_updated_date(), "2023-05-15");
        assert_eq!(format_epoch_date(i64::MAX), "unknown");
    }

    #[test]
    fn payload_without_optional_fields_deserializes() {
        let payload: NewPerson = serde_json::from_value(json!({
            "name": "Alex Chen",
            "interests": ["AI", "Blockchain"],
        }))
        .expect("deserialize payload");

        assert_eq!(payload.url, None);
        assert_eq!(payload.bio, None);
        assert_eq!(payload.validate(), Ok(()));
        assert_eq!(
            serde_json::to_value(&payload).expect("serialize payload")["interests"],
            json!(["AI", "Blockchain"])
        );
    }
}
