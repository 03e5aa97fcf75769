//! Core of the hacker directory: store, forms, and screens.
//! This crate is the single source of truth for directory invariants.

pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{AppConfig, ConfigError, LoggingConfig};
pub use form::creator::{CreatorEntry, CreatorList, PersonPick, ResolvedCreator};
pub use form::normalize::{normalize_url, parse_interests};
pub use form::person_form::AddPersonForm;
pub use form::project_form::{AddProjectForm, DEFAULT_PROJECT_URL};
pub use form::FormError;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::person::{NewPerson, Person, PersonId};
pub use model::project::{NewProject, Project, ProjectId};
pub use model::validation::ValidationError;
pub use notify::{Toast, ToastVariant, Toasts};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use repo::project_repo::{ProjectListQuery, ProjectRepository, SqliteProjectRepository};
pub use service::error::ServiceError;
pub use service::person_service::PersonService;
pub use service::project_service::ProjectService;
pub use service::seed::{demo_people, seed_demo_directory};
pub use view::directory::{DirectoryData, DirectoryView};
pub use view::profile::{ProfileData, ProfileView};
pub use view::route::{Route, RouteError};
pub use view::LoadState;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
