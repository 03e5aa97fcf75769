//! Directory screen: every person and every project.

use super::{LoadState, LOADING_TEXT};
use crate::form::person_form::AddPersonForm;
use crate::form::project_form::AddProjectForm;
use crate::model::person::Person;
use crate::model::project::Project;
use crate::notify::{Toast, Toasts};
use crate::repo::person_repo::PersonRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::ServiceError;
use crate::service::person_service::PersonService;
use crate::service::project_service::ProjectService;
use log::{error, info};
use std::fmt::Write as _;

/// Rows shown by the directory screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryData {
    pub persons: Vec<Person>,
    pub projects: Vec<Project>,
}

pub struct DirectoryView<P: PersonRepository, J: ProjectRepository> {
    persons: PersonService<P>,
    projects: ProjectService<J>,
    state: LoadState<DirectoryData>,
    toasts: Toasts,
    pub person_form: AddPersonForm,
    pub project_form: AddProjectForm,
}

impl<P: PersonRepository, J: ProjectRepository> DirectoryView<P, J> {
    pub fn new(person_repo: P, project_repo: J) -> Self {
        Self {
            persons: PersonService::new(person_repo),
            projects: ProjectService::new(project_repo),
            state: LoadState::Loading,
            toasts: Toasts::default(),
            person_form: AddPersonForm::default(),
            project_form: AddProjectForm::default(),
        }
    }

    /// Issues the screen's reads and stores the outcome.
    pub fn activate(&mut self) {
        let loaded = self.persons.list_persons().and_then(|persons| {
            let projects = self.projects.list_projects()?;
            Ok(DirectoryData { persons, projects })
        });

        match loaded {
            Ok(data) => {
                info!(
                    "event=view_activate module=view view=directory status=ok persons={} projects={}",
                    data.persons.len(),
                    data.projects.len()
                );
                self.state = LoadState::Loaded(data);
            }
            Err(err) => {
                error!("event=view_activate module=view view=directory status=error error={err}");
                self.toasts
                    .push(Toast::error("Error", "Failed to load the directory"));
                self.state = LoadState::Failed;
            }
        }
    }

    pub fn state(&self) -> &LoadState<DirectoryData> {
        &self.state
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    pub fn open_person_form(&mut self) {
        self.person_form.open();
    }

    /// Submits the Add-Person form; returns whether a row was stored.
    pub fn submit_person_form(&mut self) -> bool {
        let payload = match self.person_form.submit() {
            Ok(payload) => payload,
            Err(err) => {
                self.toasts.push(err.to_toast());
                return false;
            }
        };

        match self.persons.add_person(&payload) {
            Ok(person) => {
                self.toasts.push(Toast::success(format!(
                    "{} has been added to the directory",
                    person.name
                )));
                self.update_local(|data| data.persons.push(person));
                true
            }
            Err(err) => {
                self.toasts.push(write_failure_toast("hacker", &err));
                false
            }
        }
    }

    /// Fetches the creator picker list and opens the Add-Project form.
    pub fn open_project_form(&mut self) -> bool {
        match self.persons.list_persons() {
            Ok(people) => {
                self.project_form.open(people);
                true
            }
            Err(err) => {
                error!("event=form_open module=view view=directory status=error error={err}");
                self.toasts
                    .push(Toast::error("Error", "Failed to load hackers"));
                false
            }
        }
    }

    /// Submits the Add-Project form as one batch; returns whether rows were
    /// stored.
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
                // Newest batch first, matching the store's listing order.
                self.update_local(|data| {
                    let older = std::mem::replace(&mut data.projects, created);
                    data.projects.extend(older);
                });
                true
            }
            Err(err) => {
                self.toasts.push(write_failure_toast("project", &err));
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<Directory>\n");
        match &self.state {
            LoadState::Loading => {
                out.push_str(LOADING_TEXT);
                out.push('\n');
            }
            LoadState::Loaded(data) => render_data(&mut out, data),
            LoadState::NotFound | LoadState::Failed => out.push_str("  (no entries)\n"),
        }
        out
    }

    /// Applies a successful write to local rows. A screen whose initial
    /// load failed starts over from an empty listing.
    fn update_local(&mut self, apply: impl FnOnce(&mut DirectoryData)) {
        let mut data = match std::mem::replace(&mut self.state, LoadState::Loading) {
            LoadState::Loaded(data) => data,
            _ => DirectoryData::default(),
        };
        apply(&mut data);
        self.state = LoadState::Loaded(data);
    }
}

pub(crate) fn write_failure_toast(kind: &str, err: &ServiceError) -> Toast {
    error!("event=view_write module=view kind={kind} status=error error={err}");
    Toast::error("Error", format!("Failed to add {kind}. Please try again."))
}

fn render_data(out: &mut String, data: &DirectoryData) {
    if data.persons.is_empty() {
        out.push_str("  (no entries)\n");
    }
    for person in &data.persons {
        let _ = write!(out, "  * {}", person.name);
        if let Some(url) = &person.url {
            let _ = write!(out, " <{url}>");
        }
        out.push('\n');
        if !person.interests.is_empty() {
            let tags: Vec<String> = person
                .interests
                .iter()
                .map(|interest| format!("[{interest}]"))
                .collect();
            let _ = writeln!(out, "    {}", tags.join(" "));
        }
        let _ = writeln!(
            out,
            "    Last updated: {}  (/hacker/{})",
            person.last_updated_date(),
            person.id
        );
    }

    out.push_str("\n<Projects>\n");
    if data.projects.is_empty() {
        out.push_str("  (no projects)\n");
    }
    for project in &data.projects {
        let _ = writeln!(
            out,
            "  * {} by {} <{}>",
            project.title, project.creator, project.url
        );
        let _ = writeln!(out, "    {}", project.description);
    }
}
