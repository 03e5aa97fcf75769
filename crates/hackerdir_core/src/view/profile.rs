//! Profile screen: one person and the projects attributed to them.

use super::directory::write_failure_toast;
use super::{LoadState, LOADING_TEXT};
use crate::form::creator::{CreatorEntry, PersonPick};
use crate::form::project_form::AddProjectForm;
use crate::model::person::{Person, PersonId};
use crate::model::project::Project;
use crate::notify::{Toast, Toasts};
use crate::repo::person_repo::PersonRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::ServiceError;
use crate::service::person_service::PersonService;
use crate::service::project_service::ProjectService;
use log::{error, info};
use std::fmt::Write as _;

const NO_BIO_TEXT: &str = "This hacker hasn't added a bio yet. Check back later!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub person: Person,
    pub projects: Vec<Project>,
}

pub struct ProfileView<P: PersonRepository, J: ProjectRepository> {
    person_id: PersonId,
    persons: PersonService<P>,
    projects: ProjectService<J>,
    state: LoadState<ProfileData>,
    toasts: Toasts,
    pub project_form: AddProjectForm,
}

impl<P: PersonRepository, J: ProjectRepository> ProfileView<P, J> {
    pub fn new(person_id: PersonId, person_repo: P, project_repo: J) -> Self {
        Self {
            person_id,
            persons: PersonService::new(person_repo),
            projects: ProjectService::new(project_repo),
            state: LoadState::Loading,
            toasts: Toasts::default(),
            project_form: AddProjectForm::default(),
        }
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// Loads the person, then their projects.
    ///
    /// A missing person renders the not-found state without a toast; store
    /// failures push an error toast as well.
    pub fn activate(&mut self) {
        let loaded = self.persons.get_person(self.person_id).and_then(|person| {
            let projects = self.projects.list_projects_for(person.id)?;
            Ok(ProfileData { person, projects })
        });

        self.state = match loaded {
            Ok(data) => {
                info!(
                    "event=view_activate module=view view=profile status=ok person_id={} projects={}",
                    self.person_id,
                    data.projects.len()
                );
                LoadState::Loaded(data)
            }
            Err(ServiceError::PersonNotFound(_)) => {
                info!(
                    "event=view_activate module=view view=profile status=not_found person_id={}",
                    self.person_id
                );
                LoadState::NotFound
            }
            Err(err) => {
                error!(
                    "event=view_activate module=view view=profile status=error person_id={} error={err}",
                    self.person_id
                );
                self.toasts
                    .push(Toast::error("Error", "Failed to load hacker profile"));
                LoadState::Failed
            }
        };
    }

    pub fn state(&self) -> &LoadState<ProfileData> {
        &self.state
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    /// Opens the Add-Project form with this profile's person as the first
    /// creator. Requires a loaded profile.
    pub fn open_project_form(&mut self) -> bool {
        let Some(data) = self.state.loaded() else {
            self.toasts
                .push(Toast::error("Error", "Hacker profile is not loaded"));
            return false;
        };
        let first = CreatorEntry::Existing(Some(PersonPick::of(&data.person)));

        match self.persons.list_persons() {
            Ok(people) => {
                self.project_form.open_with_creator(people, first);
                true
            }
            Err(err) => {
                error!("event=form_open module=view view=profile status=error error={err}");
                self.toasts
                    .push(Toast::error("Error", "Failed to load hackers"));
                false
            }
        }
    }

    /// Submits the Add-Project form; rows attributed to this person are
    /// put in front of the local project list.
    pub fn submit_project_form(&mut self) -> bool {
        let rows = match self.project_form.submit() {
            Ok(rows) => rows,
            Err(err) => {
                self.toasts.push(err.to_toast());
                return false;
            }
        };

        match self.projects.add_projects(&rows) {
            Ok(created) => {
                if let Some(first) = created.first() {
                    self.toasts.push(Toast::success(format!(
                        "{} has been added to projects",
                        first.title
                    )));
                }
                let person_id = self.person_id;
                if let LoadState::Loaded(data) = &mut self.state {
                    let mut projects: Vec<Project> = created
                        .into_iter()
                        .filter(|project| project.hacker_id == Some(person_id))
                        .collect();
                    projects.append(&mut data.projects);
                    data.projects = projects;
                }
                true
            }
            Err(err) => {
                self.toasts.push(write_failure_toast("project", &err));
                false
            }
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            LoadState::Loading => format!("{LOADING_TEXT}\n"),
            LoadState::Loaded(data) => render_profile(data),
            LoadState::NotFound | LoadState::Failed => "Hacker Not Found\n\
                 The hacker profile you're looking for doesn't exist.\n\
                 Return home: /\n"
                .to_string(),
        }
    }
}

fn render_profile(data: &ProfileData) -> String {
    let person = &data.person;
    let mut out = String::from("< Back to Directory\n\n");
    let _ = writeln!(out, "<{}>", person.name);
    if let Some(initial) = person.initial() {
        let _ = writeln!(out, "[ {} ]", initial.to_uppercase());
    }

    out.push_str("\nContact\n");
    let _ = writeln!(out, "  {}", person.url.as_deref().unwrap_or("(no homepage)"));
    out.push_str("\nLast Updated\n");
    let _ = writeln!(out, "  {}", person.last_updated_date());

    out.push_str("\nInterests\n");
    for interest in &person.interests {
        let _ = writeln!(out, "  [{interest}]");
    }

    out.push_str("\nAbout\n");
    let _ = writeln!(out, "  {}", person.bio.as_deref().unwrap_or(NO_BIO_TEXT));

    out.push_str("\nProjects\n");
    if data.projects.is_empty() {
        out.push_str("  (no projects yet)\n");
    }
    for project in &data.projects {
        let _ = writeln!(out, "  * {} <{}>", project.title, project.url);
        let _ = writeln!(out, "    {}", project.description);
        let _ = writeln!(out, "    Added: {}", project.created_date());
    }
    out
}
