//! Creator entries of the Add-Project form and their resolution into rows.
//!
//! # Invariants
//! - A `CreatorList` always holds at least one entry.
//! - Linked creators take their display name from the fetched person list,
//!   never from the label cached by the picker.

use super::FormError;
use crate::model::person::{Person, PersonId};

/// Person chosen in the creator picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonPick {
    pub person_id: PersonId,
    /// Label shown by the picker when the choice was made; may be stale.
    pub label: String,
}

impl PersonPick {
    pub fn of(person: &Person) -> Self {
        Self {
            person_id: person.id,
            label: person.name.clone(),
        }
    }
}

/// One attribution slot of a project submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorEntry {
    /// Reference to a directory entry; `None` until a person is picked.
    Existing(Option<PersonPick>),
    /// Free-text name of someone outside the directory.
    FreeText(String),
}

impl CreatorEntry {
    pub fn blank() -> Self {
        Self::FreeText(String::new())
    }

    /// Switches between existing-person and free-text mode.
    ///
    /// A picked person's label carries over as the free-text name; switching
    /// to existing mode always starts without a selection.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Existing(pick) => Self::FreeText(
                pick.as_ref()
                    .map(|pick| pick.label.clone())
                    .unwrap_or_default(),
            ),
            Self::FreeText(_) => Self::Existing(None),
        }
    }
}

/// A creator after resolution, ready to become one project row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCreator {
    pub name: String,
    pub hacker_id: Option<PersonId>,
}

/// Non-empty, ordered list of creator entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorList {
    entries: Vec<CreatorEntry>,
}

impl Default for CreatorList {
    fn default() -> Self {
        Self {
            entries: vec![CreatorEntry::blank()],
        }
    }
}

impl CreatorList {
    /// Starts the list with `first` instead of a blank free-text entry.
    pub fn starting_with(first: CreatorEntry) -> Self {
        Self {
            entries: vec![first],
        }
    }

    pub fn entries(&self) -> &[CreatorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: CreatorEntry) {
        self.entries.push(entry);
    }

    pub fn set(&mut self, index: usize, entry: CreatorEntry) -> Result<(), FormError> {
        let slot = self.slot_mut(index)?;
        *slot = entry;
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<(), FormError> {
        let slot = self.slot_mut(index)?;
        *slot = slot.toggled();
        Ok(())
    }

    /// Removes one entry; removing the sole remaining entry is rejected.
    pub fn remove(&mut self, index: usize) -> Result<CreatorEntry, FormError> {
        self.check_index(index)?;
        if self.entries.len() == 1 {
            return Err(FormError::LastCreator);
        }
        Ok(self.entries.remove(index))
    }

    /// Resolves every entry against the person list fetched from the store.
    pub fn resolve(&self, people: &[Person]) -> Result<Vec<ResolvedCreator>, FormError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| resolve_entry(index, entry, people))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(FormError::CreatorOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut CreatorEntry, FormError> {
        self.check_index(index)?;
        Ok(&mut self.entries[index])
    }
}

fn resolve_entry(
    index: usize,
    entry: &CreatorEntry,
    people: &[Person],
) -> Result<ResolvedCreator, FormError> {
    match entry {
        CreatorEntry::Existing(None) => Err(FormError::UnselectedCreator { index }),
        CreatorEntry::Existing(Some(pick)) => people
            .iter()
            .find(|person| person.id == pick.person_id)
            .map(|person| ResolvedCreator {
                name: person.name.clone(),
                hacker_id: Some(person.id),
            })
            .ok_or(FormError::UnknownPerson {
                index,
                person_id: pick.person_id,
            }),
        CreatorEntry::FreeText(name) => {
            let name = name.trim();
            if name.is_empty() {
                Err(FormError::BlankCreator { index })
            } else {
                Ok(ResolvedCreator {
                    name: name.to_string(),
                    hacker_id: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CreatorEntry, CreatorList, PersonPick};
    use crate::form::FormError;
    use crate::model::person::Person;
    use uuid::Uuid;

    fn person(name: &str) -> Person {
        Person {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: None,
            interests: vec!["Linux".to_string()],
            bio: None,
            updated_at: 0,
        }
    }

    #[test]
    fn sole_entry_cannot_be_removed() {
        let mut list = CreatorList::default();
        assert_eq!(list.remove(0), Err(FormError::LastCreator));
        assert_eq!(list.len(), 1);

        list.push(CreatorEntry::FreeText("Sam".to_string()));
        list.remove(0).expect("second entry allows removal");
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove(0), Err(FormError::LastCreator));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut list = CreatorList::default();
        assert_eq!(
            list.toggle(3),
            Err(FormError::CreatorOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn toggle_switches_modes_and_clears_selection() {
        let jordan = person("Jordan Taylor");
        let mut list = CreatorList::starting_with(CreatorEntry::Existing(Some(PersonPick::of(
            &jordan,
        ))));

        list.toggle(0).expect("index 0 exists");
        assert_eq!(
            list.entries()[0],
            CreatorEntry::FreeText("Jordan Taylor".to_string())
        );

        list.toggle(0).expect("index 0 exists");
        assert_eq!(list.entries()[0], CreatorEntry::Existing(None));
    }

    #[test]
    fn resolve_rejects_blank_and_unselected_entries() {
        let blank = CreatorList::starting_with(CreatorEntry::FreeText("  ".to_string()));
        assert_eq!(
            blank.resolve(&[]),
            Err(FormError::BlankCreator { index: 0 })
        );

        let mut unselected = CreatorList::default();
        unselected.set(0, CreatorEntry::FreeText("Casey".to_string())).unwrap();
        unselected.push(CreatorEntry::Existing(None));
        assert_eq!(
            unselected.resolve(&[]),
            Err(FormError::UnselectedCreator { index: 1 })
        );
    }

    #[test]
    fn resolve_uses_fetched_name_not_picker_label() {
        let morgan = person("Morgan Lee");
        let stale = PersonPick {
            person_id: morgan.id,
            label: "Morgan (old name)".to_string(),
        };
        let mut list = CreatorList::starting_with(CreatorEntry::Existing(Some(stale)));
        list.push(CreatorEntry::FreeText(" Guest Hacker ".to_string()));

        let resolved = list.resolve(std::slice::from_ref(&morgan)).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "Morgan Lee");
        assert_eq!(resolved[0].hacker_id, Some(morgan.id));
        assert_eq!(resolved[1].name, "Guest Hacker");
        assert_eq!(resolved[1].hacker_id, None);
    }

    #[test]
    fn resolve_rejects_pick_missing_from_fetched_list() {
        let ghost = person("Ghost");
        let list = CreatorList::starting_with(CreatorEntry::Existing(Some(PersonPick::of(&ghost))));
        assert_eq!(
            list.resolve(&[person("Someone Else")]),
            Err(FormError::UnknownPerson {
                index: 0,
                person_id: ghost.id
            })
        );
    }
}
