//! Command-line front end for the hacker directory.
//!
//! Each command activates one screen against the configured SQLite store,
//! optionally drives a form, prints the rendered screen to stdout and the
//! resulting toasts to stderr. Any error toast yields a non-zero exit code.

use clap::{Parser, Subcommand};
use hackerdir_core::db::open_db;
use hackerdir_core::{
    init_logging, seed_demo_directory, AppConfig, CreatorEntry, DirectoryView, PersonPick,
    PersonService, ProfileView, Route, SqlitePersonRepository, SqliteProjectRepository, Toast,
};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

/// Prefix marking a `--creator` value as a directory entry id.
const LINKED_CREATOR_PREFIX: char = '@';

#[derive(Parser)]
#[command(name = "hackerdir")]
#[command(about = "A directory of hackers and their projects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite database file (overrides the configuration file)
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the directory of hackers and projects
    List,

    /// Show one hacker's profile
    Show {
        #[arg(value_name = "HACKER_ID")]
        id: Uuid,
    },

    /// Open a screen by path (`/` or `/hacker/<id>`)
    Open {
        #[arg(value_name = "PATH")]
        path: Route,
    },

    /// Add a hacker to the directory
    AddPerson {
        #[arg(long)]
        name: String,

        /// Homepage URL; `https://` is added when no scheme is given
        #[arg(long)]
        url: Option<String>,

        /// Comma-separated interests, e.g. "AI, Blockchain"
        #[arg(long)]
        interests: String,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Add a project with one or more creators
    AddProject {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        url: String,

        /// Creator name, or `@<hacker id>` for a listed hacker (repeatable)
        #[arg(long = "creator", value_name = "CREATOR", required = true)]
        creators: Vec<String>,
    },

    /// Fill an empty directory with demo hackers
    Seed,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(db) = cli.db {
        config = config.with_database_path(db);
    }
    if let Some(dir) = &config.logging.directory {
        init_logging(&config.logging.level, dir)?;
    }

    let conn = open_db(&config.database_path)?;
    info!(
        "event=cli_command module=cli status=start db={}",
        config.database_path.display()
    );

    let toasts = match cli.command {
        Commands::List => show_route(&conn, Route::Directory)?,
        Commands::Show { id } => show_route(&conn, Route::Profile(id))?,
        Commands::Open { path } => show_route(&conn, path)?,
        Commands::AddPerson {
            name,
            url,
            interests,
            bio,
        } => {
            let mut view = directory_view(&conn)?;
            view.activate();
            view.open_person_form();
            view.person_form.name = name;
            view.person_form.url = url.unwrap_or_default();
            view.person_form.interests = interests;
            view.person_form.bio = bio.unwrap_or_default();
            view.submit_person_form();
            print!("{}", view.render());
            view.take_toasts()
        }
        Commands::AddProject {
            title,
            description,
            url,
            creators,
        } => {
            let mut view = directory_view(&conn)?;
            view.activate();
            if view.open_project_form() {
                view.project_form.title = title;
                view.project_form.description = description;
                view.project_form.url = url;
                fill_creators(&mut view.project_form.creators, &creators)?;
                view.submit_project_form();
            }
            print!("{}", view.render());
            view.take_toasts()
        }
        Commands::Seed => {
            let service = PersonService::new(SqlitePersonRepository::try_new(&conn)?);
            let inserted = seed_demo_directory(&service)?;
            println!("Seeded {inserted} hacker(s).");
            Vec::new()
        }
    };

    Ok(report(&toasts))
}

fn directory_view(
    conn: &Connection,
) -> Result<DirectoryView<SqlitePersonRepository<'_>, SqliteProjectRepository<'_>>, Box<dyn Error>>
{
    Ok(DirectoryView::new(
        SqlitePersonRepository::try_new(conn)?,
        SqliteProjectRepository::try_new(conn)?,
    ))
}

fn show_route(conn: &Connection, route: Route) -> Result<Vec<Toast>, Box<dyn Error>> {
    match route {
        Route::Directory => {
            let mut view = directory_view(conn)?;
            view.activate();
            print!("{}", view.render());
            Ok(view.take_toasts())
        }
        Route::Profile(id) => {
            let mut view = ProfileView::new(
                id,
                SqlitePersonRepository::try_new(conn)?,
                SqliteProjectRepository::try_new(conn)?,
            );
            view.activate();
            print!("{}", view.render());
            Ok(view.take_toasts())
        }
    }
}

/// Maps `--creator` values onto the form's creator list, replacing the
/// initial blank entry with the first value.
fn fill_creators(
    list: &mut hackerdir_core::CreatorList,
    values: &[String],
) -> Result<(), Box<dyn Error>> {
    for (index, value) in values.iter().enumerate() {
        let entry = parse_creator(value)?;
        if index == 0 {
            list.set(0, entry)?;
        } else {
            list.push(entry);
        }
    }
    Ok(())
}

fn parse_creator(value: &str) -> Result<CreatorEntry, Box<dyn Error>> {
    match value.trim().strip_prefix(LINKED_CREATOR_PREFIX) {
        Some(id) => {
            let person_id = Uuid::parse_str(id.trim())
                .map_err(|err| format!("invalid hacker id in creator `{value}`: {err}"))?;
            Ok(CreatorEntry::Existing(Some(PersonPick {
                person_id,
                label: String::new(),
            })))
        }
        None => Ok(CreatorEntry::FreeText(value.to_string())),
    }
}

fn report(toasts: &[Toast]) -> ExitCode {
    for toast in toasts {
        eprintln!("[{}] {}", toast.title, toast.description);
    }
    if toasts.iter().any(Toast::is_error) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_creator, Cli};
    use clap::CommandFactory;
    use hackerdir_core::CreatorEntry;
    use uuid::Uuid;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn creator_values_map_to_entries() {
        let id = Uuid::new_v4();
        match parse_creator(&format!("@{id}")).unwrap() {
            CreatorEntry::Existing(Some(pick)) => assert_eq!(pick.person_id, id),
            other => panic!("unexpected entry: {other:?}"),
        }
        assert_eq!(
            parse_creator("Jamie Garcia").unwrap(),
            CreatorEntry::FreeText("Jamie Garcia".to_string())
        );
        assert!(parse_creator("@not-a-uuid").is_err());
    }
}
