//! Navigable screens and their paths.

use crate::model::person::PersonId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

const PROFILE_PREFIX: &str = "/hacker/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: the directory listing.
    Directory,
    /// `/hacker/{id}`: one person's profile.
    Profile(PersonId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
    InvalidId(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPath(path) => write!(f, "no screen at path `{path}`"),
            Self::InvalidId(id) => write!(f, "invalid hacker id `{id}`"),
        }
    }
}

impl Error for RouteError {}

impl Route {
    /// Parses a screen path; a trailing slash is tolerated.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::Directory);
        }

        let without_slash = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match without_slash.strip_prefix(PROFILE_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Uuid::parse_str(id)
                .map(Self::Profile)
                .map_err(|_| RouteError::InvalidId(id.to_string())),
            _ => Err(RouteError::UnknownPath(trimmed.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Directory => "/".to_string(),
            Self::Profile(id) => format!("{PROFILE_PREFIX}{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
