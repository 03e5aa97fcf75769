//! Add-Project form with a multi-creator attribution list.
//!
//! # Invariants
//! - One submission emits exactly one `NewProject` per creator entry.
//! - The person list used for resolution is the one fetched when the form
//!   was opened.

use super::creator::{CreatorEntry, CreatorList};
use super::normalize::normalize_url;
use super::FormError;
use crate::model::person::Person;
use crate::model::project::NewProject;

/// Pre-filled project URL, matching the most common hosting choice.
pub const DEFAULT_PROJECT_URL: &str = "https://github.com/";

/// Field state of the Add-Project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProjectForm {
    open: bool,
    pub title: String,
    pub description: String,
    pub url: String,
    pub creators: CreatorList,
    people: Vec<Person>,
}

impl Default for AddProjectForm {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            description: String::new(),
            url: DEFAULT_PROJECT_URL.to_string(),
            creators: CreatorList::default(),
            people: Vec::new(),
        }
    }
}

impl AddProjectForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the form with the person list fetched for the creator picker.
    pub fn open(&mut self, people: Vec<Person>) {
        self.people = people;
        self.open = true;
    }

    /// Opens the form with `first` as the initial creator entry.
    pub fn open_with_creator(&mut self, people: Vec<Person>, first: CreatorEntry) {
        self.creators = CreatorList::starting_with(first);
        self.open(people);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Persons offered by the creator picker.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Validates every field and fans the submission out into one row per
    /// creator.
    ///
    /// On success the form resets to its defaults and closes.
    pub fn submit(&mut self) -> Result<Vec<NewProject>, FormError> {
        if !self.open {
            return Err(FormError::Closed);
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        let url = normalize_url(&self.url);
        if url.is_empty() {
            return Err(FormError::MissingUrl);
        }

        let creators = self.creators.resolve(&self.people)?;
        let rows: Vec<NewProject> = creators
            .into_iter()
            .map(|creator| NewProject {
                title: title.to_string(),
                creator: creator.name,
                description: description.to_string(),
                url: url.clone(),
                hacker_id: creator.hacker_id,
            })
            .collect();

        *self = Self::default();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddProjectForm, DEFAULT_PROJECT_URL};
    use crate::form::creator::{CreatorEntry, PersonPick};
    use crate::form::FormError;
    use crate::model::person::Person;
    use uuid::Uuid;

    fn riley() -> Person {
        Person {
            id: Uuid::new_v4(),
            name: "Riley Patel".to_string(),
            url: Some("https://rpatel.berkeley.edu".to_string()),
            interests: vec!["Compilers".to_string()],
            bio: None,
            updated_at: 0,
        }
    }

    fn filled_form(people: Vec<Person>) -> AddProjectForm {
        let mut form = AddProjectForm::default();
        form.open(people);
        form.title = "tinycc-rs".to_string();
        form.description = "A toy C compiler".to_string();
        form.url = "github.com/rp/tinycc-rs".to_string();
        form
    }

    #[test]
    fn blank_free_text_creator_is_rejected() {
        let mut form = filled_form(Vec::new());
        assert_eq!(form.submit(), Err(FormError::BlankCreator { index: 0 }));
        assert!(form.is_open());
    }

    #[test]
    fn missing_required_fields_are_reported_in_order() {
        let mut form = filled_form(Vec::new());
        form.title = " ".to_string();
        assert_eq!(form.submit(), Err(FormError::MissingTitle));

        form.title = "x".to_string();
        form.description.clear();
        assert_eq!(form.submit(), Err(FormError::MissingDescription));

        form.description = "y".to_string();
        form.url = "  ".to_string();
        assert_eq!(form.submit(), Err(FormError::MissingUrl));
    }

    #[test]
    fn linked_and_free_text_creators_fan_out_into_two_rows() {
        let riley = riley();
        let mut form = filled_form(vec![riley.clone()]);
        form.creators
            .set(
                0,
                CreatorEntry::Existing(Some(PersonPick {
                    person_id: riley.id,
                    label: "R. Patel".to_string(),
                })),
            )
            .unwrap();
        form.creators
            .push(CreatorEntry::FreeText("Visiting Student".to_string()));

        let rows = form.submit().expect("form should submit");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].creator, "Riley Patel");
        assert_eq!(rows[0].hacker_id, Some(riley.id));
        assert_eq!(rows[1].creator, "Visiting Student");
        assert_eq!(rows[1].hacker_id, None);
        assert!(rows
            .iter()
            .all(|row| row.url == "https://github.com/rp/tinycc-rs"));
    }

    #[test]
    fn successful_submit_resets_to_defaults() {
        let mut form = filled_form(Vec::new());
        form.creators
            .set(0, CreatorEntry::FreeText("Jamie".to_string()))
            .unwrap();
        form.submit().unwrap();

        assert!(!form.is_open());
        assert_eq!(form.url, DEFAULT_PROJECT_URL);
        assert_eq!(form.creators.len(), 1);
        assert!(form.people().is_empty());
    }
}
